//! # Catalog Store
//!
//! The scale catalog: an immutable table of [`ScaleEntry`] records keyed by scale name,
//! built once from a JSON document and shared read-only with every search.
//!
//! ## Source Format
//! ```json
//! {
//!   "Pythagorean Pentatonic": {
//!     "notes": ["1/1", "9/8", "81/64", "3/2", "27/16"],
//!     "jpname": "ピタゴラス五音音階",
//!     "aliases": ["Pyth. pentatonic"],
//!     "dimension": "2D",
//!     "related": ["Pythagorean Diatonic"],
//!     "deta": ["1/1", "9/8", "81/64", "3/2", "27/16"]
//!   }
//! }
//! ```
//!
//! Every field is optional. Missing or `null` list fields become empty lists and a
//! missing `dimension` becomes the empty string. `jpname` and `deta` are the source
//! names for [`ScaleEntry::localized_name`] and [`ScaleEntry::ratios`].
//!
//! `related` keys are weak references and are not validated on load; use
//! [`Catalog::dangling_related`] to report the ones that resolve to nothing.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;

/// One catalog record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleEntry {
    pub notes: Vec<String>,
    pub localized_name: Option<String>,
    pub aliases: Vec<String>,
    pub dimension: String,
    pub related: Vec<String>,
    pub ratios: Vec<String>,
}

impl ScaleEntry {
    /// Entry with the given interval notes and nothing else.
    pub fn with_notes<I, S>(notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            notes: notes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn related_to<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related = related.into_iter().map(Into::into).collect();
        self
    }

    pub fn in_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = dimension.into();
        self
    }

    pub fn with_ratios<I, S>(mut self, ratios: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ratios = ratios.into_iter().map(Into::into).collect();
        self
    }
}

/// Raw record for JSON deserialization
#[derive(Deserialize, Debug, Default)]
struct RawEntry {
    #[serde(default)]
    notes: Option<Vec<String>>,
    #[serde(default, alias = "localizedName")]
    jpname: Option<String>,
    #[serde(default)]
    aliases: Option<Vec<String>>,
    #[serde(default)]
    dimension: Option<String>,
    #[serde(default)]
    related: Option<Vec<String>>,
    #[serde(default, alias = "ratios")]
    deta: Option<Vec<String>>,
}

impl From<RawEntry> for ScaleEntry {
    fn from(raw: RawEntry) -> Self {
        ScaleEntry {
            notes: raw
                .notes
                .unwrap_or_default()
                .into_iter()
                .map(|n| n.trim().to_string())
                .collect(),
            localized_name: raw.jpname.filter(|s| !s.is_empty()),
            aliases: raw.aliases.unwrap_or_default(),
            dimension: raw.dimension.unwrap_or_default(),
            related: raw.related.unwrap_or_default(),
            ratios: raw.deta.unwrap_or_default(),
        }
    }
}

/// The loaded scale catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<String, ScaleEntry>,
}

impl Catalog {
    /// Empty catalog. Every search against it yields no results.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog document.
    ///
    /// # Example
    /// ```rust
    /// use scalefind::Catalog;
    ///
    /// let catalog = Catalog::from_json(r#"{ "Just Major Triad": { "notes": ["1/1", " 5/4 ", "3/2"] } }"#)?;
    /// let triad = catalog.get("Just Major Triad").unwrap();
    /// assert_eq!(triad.notes, vec!["1/1", "5/4", "3/2"]);
    /// assert!(triad.related.is_empty());
    /// # Ok::<(), scalefind::ScaleError>(())
    /// ```
    pub fn from_json(source: &str) -> Result<Self, ScaleError> {
        let raw: BTreeMap<String, RawEntry> = serde_json::from_str(source)?;
        let entries: BTreeMap<String, ScaleEntry> = raw
            .into_iter()
            .map(|(name, entry)| (name, ScaleEntry::from(entry)))
            .collect();
        log::info!("loaded {} scales", entries.len());
        Ok(Self { entries })
    }

    /// Parse a catalog document, degrading to an empty catalog on failure.
    ///
    /// The failure is logged; downstream searches then return no results.
    pub fn from_json_or_empty(source: &str) -> Self {
        match Self::from_json(source) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("failed to load scale catalog: {}", e);
                Self::empty()
            }
        }
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScaleError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ScaleError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Build a catalog from already-constructed entries. Later duplicates replace earlier ones.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, ScaleEntry)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, entry)| (name.into(), entry))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ScaleEntry> {
        self.entries.get(name)
    }

    /// Like [`Catalog::get`], but an absent key is an error.
    pub fn require(&self, name: &str) -> Result<&ScaleEntry, ScaleError> {
        self.get(name)
            .ok_or_else(|| ScaleError::UnknownScale(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScaleEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// `(scale, related_key)` pairs whose related key is not in the catalog.
    pub fn dangling_related(&self) -> Vec<(&str, &str)> {
        self.iter()
            .flat_map(|(name, entry)| {
                entry
                    .related
                    .iter()
                    .filter(|r| !self.contains(r))
                    .map(move |r| (name, r.as_str()))
            })
            .collect()
    }
}
