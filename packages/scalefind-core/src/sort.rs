//! Result ordering
//!
//! Orders a match list by one of four keys. Equal keys fall back to the scale name
//! so the order is deterministic. Text keys compare case-insensitively first and
//! then by code point, so `"a" < "B" < "b"`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ScaleEntry};

/// Sort key for search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    /// Scale name, ascending
    #[default]
    Name,
    /// Number of notes, ascending
    Length,
    /// Dimension tag, ascending (untagged scales first)
    Dimension,
    /// Number of related scales, descending
    Related,
}

impl SortMethod {
    /// Parse a selector value. Unknown values fall back to [`SortMethod::Name`].
    pub fn from_name(s: &str) -> Self {
        match s.trim() {
            "name" => SortMethod::Name,
            "length" => SortMethod::Length,
            "dimension" => SortMethod::Dimension,
            "related" => SortMethod::Related,
            other => {
                log::debug!("unknown sort method {:?}, using name", other);
                SortMethod::Name
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMethod::Name => "name",
            SortMethod::Length => "length",
            SortMethod::Dimension => "dimension",
            SortMethod::Related => "related",
        }
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order `names` by `method`, looking each name up in `catalog`.
///
/// Names missing from the catalog sort as if they had an empty record.
///
/// ```
/// use scalefind::{sort_scales, Catalog, ScaleEntry, SortMethod};
///
/// let catalog = Catalog::from_entries([
///     ("three", ScaleEntry::with_notes(["1", "2", "3"])),
///     ("one", ScaleEntry::with_notes(["1"])),
/// ]);
/// let names = vec!["three".to_string(), "one".to_string()];
/// assert_eq!(sort_scales(&catalog, names, SortMethod::Length), vec!["one", "three"]);
/// ```
pub fn sort_scales(catalog: &Catalog, mut names: Vec<String>, method: SortMethod) -> Vec<String> {
    let empty = ScaleEntry::default();
    names.sort_by(|a, b| {
        let ea = catalog.get(a).unwrap_or(&empty);
        let eb = catalog.get(b).unwrap_or(&empty);
        compare(method, ea, eb).then_with(|| collate(a, b))
    });
    names
}

fn compare(method: SortMethod, a: &ScaleEntry, b: &ScaleEntry) -> Ordering {
    match method {
        SortMethod::Name => Ordering::Equal,
        SortMethod::Length => a.notes.len().cmp(&b.notes.len()),
        SortMethod::Dimension => collate(&a.dimension, &b.dimension),
        SortMethod::Related => b.related.len().cmp(&a.related.len()),
    }
}

fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
