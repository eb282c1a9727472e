//! Text canonicalization applied before any comparison.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Lowercase, drop everything outside `[a-z0-9]` and whitespace, collapse
/// whitespace runs and trim.
///
/// Apostrophes go too, so "don't" becomes "dont". Non-ASCII letters are
/// removed after lowercasing. The function is idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_ALPHANUMERIC.replace_all(&lowered, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

/// Whitespace tokens of an already normalized string.
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Number of whitespace-separated tokens in raw text.
pub fn whitespace_token_count(text: &str) -> usize {
    text.split_whitespace().count()
}
