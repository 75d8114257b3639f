use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

// Two or more whitespace characters of any kind, Unicode space separators included.
static RE_WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\p{Zs}]{2,}").unwrap());

/// One whitespace-delimited fragment of the name and whether a comma
/// followed it in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePart {
    pub text: String,
    pub comma: bool,
}

impl NamePart {
    pub fn new(text: impl Into<String>, comma: bool) -> Self {
        Self {
            text: text.into(),
            comma,
        }
    }
}

/// Per-call token state threaded through every pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    parts: Vec<NamePart>,
}

impl NameParts {
    /// Split a nickname-free name into parts.
    ///
    /// Whitespace runs collapse to one space, the result is trimmed and split
    /// on single spaces, and a trailing comma is moved from each token into its
    /// flag. Empty tokens survive (an empty input yields one empty token).
    pub fn tokenize(fullname: &str) -> Self {
        let collapsed = RE_WHITESPACE_RUN.replace_all(fullname, " ");
        let parts: Vec<NamePart> = collapsed
            .trim()
            .split(' ')
            .map(|raw| {
                let token = raw.trim();
                match token.strip_suffix(',') {
                    Some(stripped) => NamePart::new(stripped, true),
                    None => NamePart::new(token, false),
                }
            })
            .collect();

        let parts = Self { parts };
        debug!(parts = ?parts.texts(), commas = ?parts.commas(), "name split");
        parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NamePart> {
        self.parts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamePart> {
        self.parts.iter()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }

    pub fn commas(&self) -> Vec<bool> {
        self.parts.iter().map(|p| p.comma).collect()
    }

    pub fn comma_count(&self) -> usize {
        self.parts.iter().filter(|p| p.comma).count()
    }

    /// Index of the rightmost part that was followed by a comma.
    pub fn last_comma_index(&self) -> Option<usize> {
        self.parts.iter().rposition(|p| p.comma)
    }

    /// Remove a matched suffix or title.
    ///
    /// A comma after the removed part separated it from its successor, so
    /// unless the part was the last one the successor takes over the flag.
    /// Whatever flag the successor had is dropped.
    pub fn remove_carrying_comma(&mut self, index: usize) -> Option<String> {
        if index >= self.parts.len() {
            return None;
        }
        let removed = self.parts.remove(index);
        if removed.comma
            && let Some(next) = self.parts.get_mut(index)
        {
            next.comma = true;
        }
        Some(removed.text)
    }

    /// Remove a part together with its own flag.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.parts.len() {
            return None;
        }
        Some(self.parts.remove(index).text)
    }

    /// Merge `count` parts starting at `index` into one space-joined part.
    ///
    /// The merged part keeps the flag of the rightmost part consumed; the
    /// flags of the others are dropped. Returns false when the window does
    /// not fit.
    pub fn merge(&mut self, index: usize, count: usize) -> bool {
        if count < 2 || index + count > self.parts.len() {
            return false;
        }
        let window: Vec<NamePart> = self.parts.drain(index..index + count).collect();
        let comma = window.last().is_some_and(|p| p.comma);
        let text = window
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        self.parts.insert(index, NamePart::new(text, comma));
        true
    }

    /// Forget every comma flag.
    pub fn clear_commas(&mut self) {
        for part in &mut self.parts {
            part.comma = false;
        }
    }

    /// Take every remaining part, leaving the state empty.
    pub fn drain_texts(&mut self) -> Vec<String> {
        self.parts.drain(..).map(|p| p.text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(layout: &[(&str, bool)]) -> NameParts {
        NameParts {
            parts: layout.iter().map(|(t, c)| NamePart::new(*t, *c)).collect(),
        }
    }

    #[test]
    fn test_tokenize_records_commas() {
        let p = NameParts::tokenize("de la Vega, Dr. Juan");
        assert_eq!(p.texts(), vec!["de", "la", "Vega", "Dr.", "Juan"]);
        assert_eq!(p.commas(), vec![false, false, true, false, false]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let p = NameParts::tokenize("  Juan \t\u{00A0} Xavier\u{2003}\u{2003}Vega ");
        assert_eq!(p.texts(), vec!["Juan", "Xavier", "Vega"]);
    }

    #[test]
    fn test_tokenize_empty_input_gives_one_empty_part() {
        let p = NameParts::tokenize("");
        assert_eq!(p.len(), 1);
        assert_eq!(p.texts(), vec![""]);
    }

    #[test]
    fn test_tokenize_bare_comma_is_empty_token() {
        let p = NameParts::tokenize("Vega , Juan");
        assert_eq!(p.texts(), vec!["Vega", "", "Juan"]);
        assert_eq!(p.commas(), vec![false, true, false]);
    }

    #[test]
    fn test_remove_carrying_comma_moves_flag_to_successor() {
        let mut p = parts(&[("Juan", false), ("III", true), ("Jr.", false)]);
        assert_eq!(p.remove_carrying_comma(1).as_deref(), Some("III"));
        assert_eq!(p.texts(), vec!["Juan", "Jr."]);
        assert_eq!(p.commas(), vec![false, true]);
    }

    #[test]
    fn test_remove_carrying_comma_drops_successor_flag() {
        let mut p = parts(&[("III", true), ("Jr.", true), ("Genius", false)]);
        p.remove_carrying_comma(0);
        assert_eq!(p.commas(), vec![true, false]);
    }

    #[test]
    fn test_remove_carrying_comma_last_part() {
        let mut p = parts(&[("Juan", true), ("Jr.", true)]);
        p.remove_carrying_comma(1);
        assert_eq!(p.commas(), vec![true]);
        assert_eq!(p.remove_carrying_comma(5), None);
    }

    #[test]
    fn test_remove_without_comma() {
        let mut p = parts(&[("Dr.", false), ("Juan", true)]);
        p.remove_carrying_comma(0);
        assert_eq!(p.texts(), vec!["Juan"]);
        assert_eq!(p.commas(), vec![true]);
    }

    #[test]
    fn test_merge_keeps_rightmost_flag() {
        let mut p = parts(&[("de", true), ("la", false), ("Vega", true), ("Juan", false)]);
        assert!(p.merge(1, 2));
        assert_eq!(p.texts(), vec!["de", "la Vega", "Juan"]);
        assert_eq!(p.commas(), vec![true, true, false]);
        assert!(!p.merge(2, 2));
    }

    #[test]
    fn test_last_comma_index() {
        let p = parts(&[("a", true), ("b", false), ("c", true), ("d", false)]);
        assert_eq!(p.last_comma_index(), Some(2));
        assert_eq!(p.comma_count(), 2);
        assert_eq!(parts(&[("a", false)]).last_comma_index(), None);
    }
}
