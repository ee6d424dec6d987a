//! # Error Types
//!
//! This module defines all error types for the scale finder.
//!
//! Most of the search pipeline is total and never fails: malformed queries, unknown
//! sort keys and unparseable base frequencies all fall back to a defined state. The
//! errors below cover the edges where data enters the system.
//!
//! ## Error Types
//! - `CatalogParse` - The catalog document is not valid JSON of the expected shape
//! - `CatalogRead` - The catalog file could not be read
//! - `Settings` - Invalid YAML settings or out-of-range values
//! - `UnknownScale` - An operation named a key that is not in the catalog
//!
//! ## Usage
//! ```rust
//! use scalefind::{Catalog, ScaleError};
//!
//! match Catalog::from_json("not json") {
//!     Ok(catalog) => println!("{} scales", catalog.len()),
//!     Err(ScaleError::CatalogParse(e)) => eprintln!("bad catalog: {}", e),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaleError {
    /// The catalog document could not be decoded.
    #[error("Invalid catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid settings document or value.
    ///
    /// # Example
    /// ```
    /// # use scalefind::ScaleError;
    /// let err = ScaleError::Settings("page-size must be at least 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid settings: page-size must be at least 1");
    /// ```
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// A scale key that does not resolve to a catalog entry.
    ///
    /// # Example
    /// ```
    /// # use scalefind::ScaleError;
    /// let err = ScaleError::UnknownScale("Pelog".to_string());
    /// assert_eq!(err.to_string(), "Unknown scale: Pelog");
    /// ```
    #[error("Unknown scale: {0}")]
    UnknownScale(String),
}

impl ScaleError {
    /// Short machine-readable tag, used by the browser binding.
    pub fn kind(&self) -> &'static str {
        match self {
            ScaleError::CatalogParse(_) => "catalog-parse",
            ScaleError::CatalogRead { .. } => "catalog-read",
            ScaleError::Settings(_) => "settings",
            ScaleError::UnknownScale(_) => "unknown-scale",
        }
    }
}
