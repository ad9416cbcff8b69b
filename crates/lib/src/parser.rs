//! # Decider Output Parsing
//!
//! The table decider prompt asks the model for a comma separated list of
//! table names. This module turns that raw reply into a clean, ordered list.

/// Splits a comma separated model response into trimmed, non-empty entries.
///
/// Order of first appearance is preserved and duplicates are retained. This
/// never fails: input with no commas yields a single-element list, and
/// whitespace-only input yields an empty one.
pub fn parse_comma_separated_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}
