use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Generational, academic and professional suffixes.
/// Compared against tokens lowercased with one trailing period removed, so
/// the dotted entries only match a token such as "Ph.D..".
pub const SUFFIXES: &[&str] = &[
    "esq", "esquire", "jr", "jnr", "sr", "snr", "2", "ii", "iii", "iv", "v", // Generational
    "clu", "chfc", "cfp", "md", "phd", // Professional
    "j.d.", "ll.m.", "m.d.", "d.o.", "d.c.", "p.c.", "ph.d.",
];

/// Surname-forming particles, joined to the token on their right.
/// Matched case-sensitively: "van" joins, "Van" does not.
pub const PREFIXES: &[&str] = &[
    "a", "ab", "antune", "ap", "abu", "al", "alm", "alt", "bab", "bäck", "bar", "bath", "bat",
    "beau", "beck", "ben", "berg", "bet", "bin", "bint", "birch", "björk", "björn", "bjur", "da",
    "dahl", "dal", "de", "degli", "dele", "del", "della", "der", "di", "dos", "du", "e", "ek",
    "el", "escob", "esch", "fleisch", "fitz", "fors", "gott", "griff", "haj", "haug", "holm",
    "ibn", "kauf", "kil", "koop", "kvarn", "la", "le", "lind", "lönn", "lund", "mac", "mhic",
    "mic", "mir", "na", "naka", "neder", "nic", "ni", "nin", "nord", "norr", "ny", "o", "ua",
    "ui'", "öfver", "ost", "över", "öz", "papa", "pour", "quarn", "skog", "skoog", "sten",
    "stor", "ström", "söder", "ter", "tre", "türk", "van", "väst", "väster", "vest", "von",
];

/// Honorifics and ranks. Multi-word entries never match a single token
/// but are kept so override files can be diffed against this list.
pub const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "miss", "dr", "herr", "monsieur", "hr", "frau", "a v m", "admiraal",
    "admiral", "air cdre", "air commodore", "air marshal", "air vice marshal", "alderman",
    "alhaji", "ambassador", "baron", "barones", "brig", "brig gen", "brig general", "brigadier",
    "brigadier general", "brother", "canon", "capt", "captain", "cardinal", "cdr", "chief",
    "cik", "cmdr", "coach", "col", "colonel", "commandant", "commander", "commissioner",
    "commodore", "comte", "comtessa", "congressman", "conseiller", "consul", "conte",
    "contessa", "corporal", "councillor", "count", "countess", "crown prince",
    "crown princess", "dame", "datin", "dato", "datuk", "datuk seri", "deacon", "deaconess",
    "dean", "dhr", "dipl ing", "doctor", "dott", "dott sa", "dr ing", "dra", "drs",
    "embajador", "embajadora", "en", "encik", "eng", "eur ing", "exma sra", "exmo sr", "f o",
    "father", "first lieutient", "first officer", "flt lieut", "flying officer", "fr",
    "fraulein", "fru", "gen", "generaal", "general", "governor", "graaf", "gravin",
    "group captain", "grp capt", "h e dr", "h h", "h m", "h r h", "hajah", "haji", "hajim",
    "her highness", "her majesty", "high chief", "his highness", "his holiness",
    "his majesty", "hon", "hra", "ing", "ir", "jonkheer", "judge", "justice", "khun ying",
    "kolonel", "lady", "lcda", "lic", "lieut", "lieut cdr", "lieut col", "lieut gen", "lord",
    "m", "m l", "m r", "madame", "mademoiselle", "maj gen", "major", "master", "mevrouw",
    "mlle", "mme", "monsignor", "mstr", "nti", "pastor", "president", "prince", "princess",
    "princesse", "prinses", "prof", "prof sir", "professor", "puan", "puan sri", "rabbi",
    "rear admiral", "rev", "rev canon", "rev dr", "rev mother", "reverend", "rva", "senator",
    "sergeant", "sheikh", "sheikha", "sig", "sig na", "sig ra", "sir", "sister", "sqn ldr", "sr",
    "sr d", "sra", "srta", "sultan", "tan sri", "tan sri dato", "tengku", "teuku",
    "than puying", "the hon dr", "the hon justice", "the hon miss", "the hon mr",
    "the hon mrs", "the hon ms", "the hon sir", "the very rev", "toh puan", "tun",
    "vice admiral", "viscount", "viscountess", "wg cdr",
];

/// Words that glue two given names into one ("Juan et Glova").
pub const CONJUNCTIONS: &[&str] = &["&", "and", "et", "e", "of", "the", "und", "y"];

// ── Swappable list set ───────────────────────────────────────────────

/// The four reference lists the pipeline consults.
///
/// Suffixes and titles are stored lowercase because their stage compares
/// normalized tokens. Prefixes and conjunctions are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLists {
    pub suffixes: HashSet<String>,
    pub titles: HashSet<String>,
    pub prefixes: HashSet<String>,
    pub conjunctions: HashSet<String>,
}

impl Default for ReferenceLists {
    fn default() -> Self {
        Self {
            suffixes: to_set(SUFFIXES),
            titles: to_set(TITLES),
            prefixes: to_set(PREFIXES),
            conjunctions: to_set(CONJUNCTIONS),
        }
    }
}

/// On-disk shape of an override file. Missing keys keep the built-in list.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ListsFile {
    suffixes: Option<Vec<String>>,
    titles: Option<Vec<String>>,
    prefixes: Option<Vec<String>>,
    conjunctions: Option<Vec<String>>,
}

impl ReferenceLists {
    /// Parse an override document such as `{"titles": ["dr", "prof"]}`.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        let file: ListsFile = serde_json::from_str(json)?;
        let mut lists = Self::default();
        if let Some(s) = file.suffixes {
            lists.suffixes = s.iter().map(|e| e.to_lowercase()).collect();
        }
        if let Some(t) = file.titles {
            lists.titles = t.iter().map(|e| e.to_lowercase()).collect();
        }
        if let Some(p) = file.prefixes {
            lists.prefixes = p.into_iter().collect();
        }
        if let Some(c) = file.conjunctions {
            lists.conjunctions = c.into_iter().collect();
        }
        Ok(lists)
    }

    /// Load an override file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json).map_err(|source| Error::Lists {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_suffix(&self, normalized: &str) -> bool {
        self.suffixes.contains(normalized)
    }

    pub fn is_title(&self, normalized: &str) -> bool {
        self.titles.contains(normalized)
    }

    pub fn is_prefix(&self, token: &str) -> bool {
        self.prefixes.contains(token)
    }

    pub fn is_conjunction(&self, token: &str) -> bool {
        self.conjunctions.contains(token)
    }
}

fn to_set(list: &[&str]) -> HashSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lists_are_lowercase() {
        for entry in SUFFIXES.iter().chain(TITLES).chain(PREFIXES).chain(CONJUNCTIONS) {
            assert_eq!(*entry, entry.to_lowercase(), "{entry} is not lowercase");
        }
    }

    #[test]
    fn test_default_membership() {
        let lists = ReferenceLists::default();
        assert!(lists.is_suffix("jr"));
        assert!(lists.is_suffix("ph.d."));
        assert!(lists.is_title("dr"));
        assert!(lists.is_prefix("van"));
        assert!(!lists.is_prefix("Van"));
        assert!(lists.is_conjunction("y"));
        assert!(!lists.is_conjunction("And"));
    }

    #[test]
    fn test_override_replaces_only_given_keys() {
        let lists = ReferenceLists::from_json_str(r#"{"titles": ["Dr", "Sensei"]}"#).unwrap();
        assert_eq!(lists.titles.len(), 2);
        assert!(lists.is_title("sensei"));
        assert!(!lists.is_title("mr"));
        assert_eq!(lists.suffixes, ReferenceLists::default().suffixes);
    }

    #[test]
    fn test_override_keeps_prefix_case() {
        let lists = ReferenceLists::from_json_str(r#"{"prefixes": ["Van"]}"#).unwrap();
        assert!(lists.is_prefix("Van"));
        assert!(!lists.is_prefix("van"));
    }

    #[test]
    fn test_override_rejects_unknown_keys() {
        assert!(ReferenceLists::from_json_str(r#"{"honorifics": []}"#).is_err());
    }
}
