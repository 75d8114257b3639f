use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

// A quoted or bracketed span, with at most one whitespace character in
// front of it so that "Juan (Doc) Vega" cleans up to "Juan Vega".
// The inner text may not contain any other delimiter character.
// `\s` is Unicode-aware, so a lone NBSP before the span goes with it too.
static RE_NICKNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\s?(?:'([^'"()\[\]]+)'|"([^'"()\[\]]+)"|\(([^'"()\[\]]+)\)|\[([^'"()\[\]]+)\])"#,
    )
    .unwrap()
});

/// Pull every nickname span out of `fullname`.
///
/// Returns the inner texts in source order together with the string that
/// remains once the spans (delimiters included) have been cut out.
/// Unbalanced delimiters are left in place.
pub fn extract_nicknames(fullname: &str) -> (Vec<String>, String) {
    let mut nicknames = Vec::new();
    let mut spans = Vec::new();

    for caps in RE_NICKNAME.captures_iter(fullname) {
        let Some(inner) = caps.iter().skip(1).flatten().next() else {
            continue;
        };
        nicknames.push(inner.as_str().to_string());
        spans.push(caps.get(0).map_or("", |m| m.as_str()));
    }

    let mut cleaned = fullname.to_string();
    for span in spans {
        cleaned = cleaned.replacen(span, "", 1);
    }

    debug!(count = nicknames.len(), ?nicknames, %cleaned, "nicknames extracted");
    (nicknames, cleaned)
}
