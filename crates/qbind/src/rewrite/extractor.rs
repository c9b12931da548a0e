//! SQL Placeholder Extractor
//!
//! Finds named placeholder tokens in SQL text. The token pattern here is
//! the single source of truth shared with the rewriter.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// A placeholder token is a colon followed by one or more ASCII letters,
// digits, or underscores. A leading digit is a valid key character.
pub(crate) static NAMED_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z0-9_]+)").expect("valid regex"));

/// Extracts the placeholder keys from a SQL string.
///
/// Returns the distinct keys (token text without the colon) in order of
/// first occurrence. Keys are case-sensitive, so `:Id` and `:id` are
/// distinct.
///
/// # Example
///
/// ```
/// use qbind::rewrite::placeholder_keys;
///
/// let keys = placeholder_keys("SELECT * FROM users WHERE id = :id OR parent_id = :id AND name = :name");
/// assert_eq!(keys, vec!["id".to_string(), "name".to_string()]);
/// ```
pub fn placeholder_keys(sql: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for cap in NAMED_TOKEN_REGEX.captures_iter(sql) {
        if let Some(key) = cap.get(1) {
            if seen.insert(key.as_str()) {
                keys.push(key.as_str().to_string());
            }
        }
    }

    keys
}
