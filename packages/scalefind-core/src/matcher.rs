//! Token matcher
//!
//! A scale is a hit when every cleaned query token appears as a substring of at
//! least one of its notes. Containment is unanchored and case-sensitive, so the
//! token `3` matches the note `3/2`.

use crate::catalog::{Catalog, ScaleEntry};
use crate::tokenizer::clean_tokens;

/// Names of the catalog entries that contain every valid token.
///
/// Tokens are cleaned first. When no valid token remains the result is empty,
/// which callers must treat as "nothing to search" rather than "no matches".
/// The order of the result is unspecified; see [`crate::sort_scales`].
///
/// ```
/// use scalefind::{find_scales, Catalog, ScaleEntry};
///
/// let catalog = Catalog::from_entries([
///     ("A", ScaleEntry::with_notes(["1/1", "3/2"])),
///     ("B", ScaleEntry::with_notes(["1/1", "5/4"])),
/// ]);
/// assert_eq!(find_scales(&catalog, &["3/2"]), vec!["A"]);
/// assert!(find_scales(&catalog, &["abc"]).is_empty());
/// ```
pub fn find_scales<S: AsRef<str>>(catalog: &Catalog, raw_tokens: &[S]) -> Vec<String> {
    let tokens = clean_tokens(raw_tokens);
    if tokens.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|(_, entry)| contains_all(entry, &tokens))
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Whether every token is a substring of some note of `entry`.
pub fn contains_all<S: AsRef<str>>(entry: &ScaleEntry, tokens: &[S]) -> bool {
    tokens
        .iter()
        .all(|t| entry.notes.iter().any(|note| note.contains(t.as_ref())))
}
