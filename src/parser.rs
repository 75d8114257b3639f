use fullname_types::ParsedName;
use tracing::{debug, trace};

use crate::lists::ReferenceLists;
use crate::nickname::extract_nicknames;
use crate::tokens::NameParts;

// ── Parser ─────────────────────────────────────────────────────────
//
// The stages run in a fixed order over one `NameParts` value created for
// the call. Order matters:
//   - suffixes and titles go first so that "Jr.," and "Dr." never take part
//     in prefix or conjunction joins;
//   - joins happen before the comma-driven stages so that "de la Vega,"
//     counts as one comma-marked part;
//   - extra suffixes must be gone before the surname picks the rightmost
//     comma-marked part.
//
// Real inputs:
//   Juan Xavier III (Doc Vega), Jr.
//   de la Vega, Dr. Juan et Glova (Doc Vega) Q. Xavier III, Jr., Genius

/// Decomposes full names against one set of reference lists.
///
/// Holds no per-call state, so one parser can be shared freely between
/// threads.
#[derive(Debug, Clone, Default)]
pub struct NameParser {
    lists: ReferenceLists,
}

impl NameParser {
    pub fn new(lists: ReferenceLists) -> Self {
        Self { lists }
    }

    /// Split `fullname` into title, first, middle, last, nickname and suffix.
    ///
    /// Never fails: whatever cannot be recognized ends up in first, middle or
    /// last, and missing components are empty strings.
    pub fn parse(&self, fullname: &str) -> ParsedName {
        debug!(%fullname, "start parsing fullname");
        let lists = &self.lists;
        let mut parsed = ParsedName::default();

        let (nicknames, cleaned) = extract_nicknames(fullname);
        parsed.nick = nicknames.join(",");

        let mut parts = NameParts::tokenize(&cleaned);

        // A lone part is always the surname, even "Jr." or "Dr."
        let mut suffixes = Vec::new();
        if parts.len() > 1 {
            suffixes = find_suffixes(&mut parts, lists);
        }
        if parts.len() > 1 {
            parsed.title = find_titles(&mut parts, lists).join(", ");
        }
        if parts.len() > 1 {
            join_prefixes(&mut parts, lists);
        }
        if parts.len() > 1 {
            join_conjunctions(&mut parts, lists);
        }
        if parts.len() > 1 {
            suffixes.extend(find_extra_suffixes(&mut parts));
        }
        parsed.suffix = suffixes.join(", ");

        if !parts.is_empty() {
            parsed.last = find_last_name(&mut parts);
        }
        if !parts.is_empty() {
            parsed.first = find_first_name(&mut parts);
        }
        if !parts.is_empty() {
            parsed.middle = find_middle_name(&mut parts);
        }

        debug!(?parsed, "parsing complete");
        parsed
    }
}

// ── List matching ──────────────────────────────────────────────────

/// Lowercase and drop one trailing period: "Jr." → "jr", "Ph.D." → "ph.d".
fn normalize(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}

/// Remove every part whose normalized text satisfies `is_member`.
///
/// Matches are collected in one left-to-right scan and then removed by
/// position, left to right, each removal handing its comma to the successor.
/// Returned values keep their original case.
fn take_listed(parts: &mut NameParts, is_member: impl Fn(&str) -> bool) -> Vec<String> {
    let matched: Vec<usize> = parts
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.text.is_empty())
        .filter(|(_, p)| {
            let key = normalize(&p.text);
            let hit = is_member(&key);
            trace!(token = %p.text, %key, hit, "list lookup");
            hit
        })
        .map(|(i, _)| i)
        .collect();

    let mut found = Vec::with_capacity(matched.len());
    for (removed, index) in matched.into_iter().enumerate() {
        if let Some(text) = parts.remove_carrying_comma(index - removed) {
            found.push(text);
        }
    }
    found
}

fn find_suffixes(parts: &mut NameParts, lists: &ReferenceLists) -> Vec<String> {
    let found = take_listed(parts, |key| lists.is_suffix(key));
    debug!(?found, parts = ?parts.texts(), commas = ?parts.commas(), "suffixes removed");
    found
}

fn find_titles(parts: &mut NameParts, lists: &ReferenceLists) -> Vec<String> {
    let found = take_listed(parts, |key| lists.is_title(key));
    debug!(?found, parts = ?parts.texts(), commas = ?parts.commas(), "titles removed");
    found
}

// ── Joins ──────────────────────────────────────────────────────────

/// Glue each surname prefix to the part on its right.
///
/// Scanning right to left lets chains collapse inward-out:
/// "van der Berg" → "van" + "der Berg" → "van der Berg".
/// Matching is exact; "Van" is not a prefix.
fn join_prefixes(parts: &mut NameParts, lists: &ReferenceLists) {
    if parts.len() < 2 {
        return;
    }
    for i in (0..parts.len() - 1).rev() {
        let is_prefix = parts
            .get(i)
            .is_some_and(|p| !p.text.is_empty() && lists.is_prefix(&p.text));
        if is_prefix {
            parts.merge(i, 2);
        }
    }
    debug!(parts = ?parts.texts(), commas = ?parts.commas(), "prefixes joined");
}

/// Collapse "A conj B" into one part, right to left.
///
/// After a join the scan steps back two places so the merged part can be
/// the right operand of the next window: "A and B and C" ends as one part.
fn join_conjunctions(parts: &mut NameParts, lists: &ReferenceLists) {
    if parts.len() < 3 {
        return;
    }
    let mut i = parts.len() - 3;
    loop {
        let joins = i + 2 < parts.len()
            && parts
                .get(i + 1)
                .is_some_and(|p| !p.text.is_empty() && lists.is_conjunction(&p.text));
        let step = if joins && parts.merge(i, 3) { 2 } else { 1 };
        match i.checked_sub(step) {
            Some(next) => i = next,
            None => break,
        }
    }
    debug!(parts = ?parts.texts(), commas = ?parts.commas(), "conjunctions joined");
}

// ── Comma-driven extraction ────────────────────────────────────────

/// With two or more commas left, every comma-marked part from index 2 on is
/// one more suffix ("Vega, Juan, Jr., Genius"). Positions 0 and 1 stay for
/// the surname and given name. Found right to left.
fn find_extra_suffixes(parts: &mut NameParts) -> Vec<String> {
    let mut extra = Vec::new();
    if parts.comma_count() > 1 {
        for i in (2..parts.len()).rev() {
            if parts.get(i).is_some_and(|p| p.comma)
                && let Some(text) = parts.remove(i)
            {
                extra.push(text);
            }
        }
    }
    debug!(?extra, commas = ?parts.commas(), "extra suffixes found");
    extra
}

/// The rightmost comma-marked part, or failing that the final part.
/// Commas carry no meaning afterwards.
fn find_last_name(parts: &mut NameParts) -> String {
    let index = parts
        .last_comma_index()
        .unwrap_or_else(|| parts.len().saturating_sub(1));
    let last = parts.remove(index).unwrap_or_default();
    parts.clear_commas();
    debug!(%last, parts = ?parts.texts(), "last name found");
    last
}

fn find_first_name(parts: &mut NameParts) -> String {
    let first = parts.remove(0).unwrap_or_default();
    debug!(%first, parts = ?parts.texts(), "first name found");
    first
}

fn find_middle_name(parts: &mut NameParts) -> String {
    let middle = parts.drain_texts().join(" ");
    debug!(%middle, "middle name found");
    middle
}
