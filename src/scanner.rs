use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::parser::NameParser;
use fullname_types::ParsedName;

/// One parsed line of a batch input file.
#[derive(Debug, Clone, Serialize)]
pub struct NameRecord {
    pub file: String,
    /// 1-based
    pub line: usize,
    pub input: String,
    pub parsed: ParsedName,
}

/// Find every file under `root` with extension `ext`, sorted by path.
///
/// Unreadable directory entries are skipped.
pub fn scan_inputs(root: &Path, ext: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|x| x.to_str()) == Some(ext))
        .collect();
    files.sort();
    files
}

/// Parse each non-empty line of `path`.
pub fn parse_file(parser: &NameParser, path: &Path) -> Result<Vec<NameRecord>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = path.display().to_string();

    Ok(content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| NameRecord {
            file: file.clone(),
            line: i + 1,
            input: l.trim().to_string(),
            parsed: parser.parse(l),
        })
        .collect())
}

/// Scan `root` and parse every matching file.
pub fn parse_tree(parser: &NameParser, root: &Path, ext: &str) -> Result<Vec<NameRecord>> {
    let files = scan_inputs(root, ext);
    tracing::info!(count = files.len(), root = %root.display(), "input files found");

    let mut records = Vec::new();
    for path in &files {
        records.extend(parse_file(parser, path)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_filters_by_extension_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("nested/a.txt"), "").unwrap();
        fs::write(dir.path().join("c.csv"), "").unwrap();

        let files = scan_inputs(dir.path(), "txt");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![PathBuf::from("b.txt"), PathBuf::from("nested/a.txt")]
        );
    }

    #[test]
    fn test_parse_file_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.txt");
        fs::write(&path, "Juan Xavier\n\n  \nDr. Juan Q. Xavier\n").unwrap();

        let records = parse_file(&NameParser::default(), &path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[0].parsed.last, "Xavier");
        assert_eq!(records[1].line, 4);
        assert_eq!(records[1].parsed.title, "Dr.");
        assert_eq!(records[1].parsed.middle, "Q.");
    }

    #[test]
    fn test_parse_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(&NameParser::default(), &dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
