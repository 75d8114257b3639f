use std::fmt;

use serde::{Deserialize, Serialize};

// ── Parsed name ──────────────────────────────────────────────────────────

/// The components of a decomposed full name.
///
/// Every field is a plain string; a component that was not found is the
/// empty string. `title`, `suffix` and `nick` may carry several values
/// joined with commas when more than one was recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedName {
    /// Honorifics such as "Dr." or "Mrs", joined with ", ".
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub first: String,
    /// Every token left between first and last, space-joined.
    #[serde(default)]
    pub middle: String,
    #[serde(default)]
    pub last: String,
    /// Bracketed or quoted spans from the raw input, joined with ",".
    #[serde(default)]
    pub nick: String,
    /// Generational and professional suffixes, joined with ", ".
    #[serde(default)]
    pub suffix: String,
}

impl ParsedName {
    /// True when no component was recognized at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.first.is_empty()
            && self.middle.is_empty()
            && self.last.is_empty()
            && self.nick.is_empty()
            && self.suffix.is_empty()
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("title", &self.title),
            ("first", &self.first),
            ("middle", &self.middle),
            ("last", &self.last),
            ("nick", &self.nick),
            ("suffix", &self.suffix),
        ];
        let mut sep = "";
        for (key, value) in fields {
            if value.is_empty() {
                continue;
            }
            write!(f, "{sep}{key}={value:?}")?;
            sep = " ";
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedName {
        ParsedName {
            title: "Dr.".into(),
            first: "Juan".into(),
            middle: "Q.".into(),
            last: "Xavier".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_is_empty() {
        assert!(ParsedName::default().is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn test_display_lists_present_fields() {
        assert_eq!(
            sample().to_string(),
            r#"title="Dr." first="Juan" middle="Q." last="Xavier""#
        );
        assert_eq!(ParsedName::default().to_string(), "");
    }

    #[test]
    fn test_json_uses_empty_strings() {
        let json = serde_json::to_string(&ParsedName::default()).unwrap();
        assert_eq!(
            json,
            r#"{"title":"","first":"","middle":"","last":"","nick":"","suffix":""}"#
        );
        let back: ParsedName = serde_json::from_str(r#"{"last":"Cotter"}"#).unwrap();
        assert_eq!(back.last, "Cotter");
        assert!(back.first.is_empty());
    }
}
