// src/core/normalizer.rs
use crate::models::QuoteTable;

/// Counts the occurrences of every counted character of `table` in `content`.
///
/// A character listed twice in the table is counted twice.
#[must_use]
pub fn count_smart_quotes(content: &str, table: &QuoteTable) -> u64 {
    table.counted().iter().fold(0_u64, |acc, quote| {
        let found = u64::try_from(content.matches(*quote).count()).unwrap_or(u64::MAX);
        acc.saturating_add(found)
    })
}

/// Applies the substitutions of `table` in order, each over the whole text.
#[must_use]
pub fn replace_smart_quotes(content: &str, table: &QuoteTable) -> String {
    let mut buf = [0_u8; 4];
    table
        .replacements()
        .iter()
        .fold(content.to_owned(), |text, (from, to)| {
            text.replace(*from, to.encode_utf8(&mut buf))
        })
}

/// Returns the substituted text together with the count taken before any
/// substitution happened.
#[must_use]
pub fn normalize(content: &str, table: &QuoteTable) -> (String, u64) {
    let count = count_smart_quotes(content, table);
    (replace_smart_quotes(content, table), count)
}
