//! # Public API
//!
//! One-call entry points over the search pipeline and the audio preview.
//!
//! - [`search()`] - Tokenize, match and sort a raw query
//! - [`preview()`] - Tone schedule for a named scale, with a free-text base frequency
//!
//! Interactive front ends that page through results should hold a
//! [`SearchSession`](crate::SearchSession) instead.
//!
//! ## Typical Usage
//!
//! ```rust
//! use scalefind::{search, Catalog, SortMethod};
//!
//! let catalog = Catalog::from_json(r#"{
//!     "Just Major": { "notes": ["1/1", "9/8", "5/4", "4/3", "3/2", "5/3", "15/8"] },
//!     "Pythagorean Major": { "notes": ["1/1", "9/8", "81/64", "4/3", "3/2", "27/16", "243/128"] }
//! }"#)?;
//!
//! assert_eq!(search(&catalog, "9/8, 4/3", SortMethod::Name), vec!["Just Major", "Pythagorean Major"]);
//! assert_eq!(search(&catalog, "5/4", SortMethod::Name), vec!["Just Major"]);
//! # Ok::<(), scalefind::ScaleError>(())
//! ```

use crate::audio::{generate_playback, PlaybackData, PlaybackMode};
use crate::{find_scales, parse_base_frequency, sort_scales, tokenize, Catalog, ScaleError, Settings, SortMethod};

/// Run the full pipeline on a raw query string.
///
/// # Pipeline
/// 1. Split the input into tokens
/// 2. Keep ratio-shaped tokens and find the scales containing all of them
/// 3. Order the hits by `sort`
///
/// An input with no valid token returns an empty list.
pub fn search(catalog: &Catalog, raw_query: &str, sort: SortMethod) -> Vec<String> {
    let hits = find_scales(catalog, &tokenize(raw_query));
    sort_scales(catalog, hits, sort)
}

/// Tone schedule for previewing the scale called `name`.
///
/// `base_frequency` is the raw text of the base-frequency field; when it is absent
/// or unusable the value from `settings` is used.
///
/// # Errors
/// Returns [`ScaleError::UnknownScale`] if `name` is not in the catalog.
///
/// # Example
/// ```rust
/// use scalefind::{preview, Catalog, ScaleEntry, Settings};
/// use scalefind::audio::PlaybackMode;
///
/// let catalog = Catalog::from_entries([
///     ("Octave", ScaleEntry::with_notes(["1/1", "2/1"]).with_ratios(["1/1", "2/1"])),
/// ]);
/// let data = preview(&catalog, "Octave", PlaybackMode::Chord, Some("220"), &Settings::default())?;
/// assert_eq!(data.tones[1].frequency, 440.0);
///
/// let data = preview(&catalog, "Octave", PlaybackMode::Chord, Some("loud"), &Settings::default())?;
/// assert_eq!(data.tones[0].frequency, 440.0);
/// # Ok::<(), scalefind::ScaleError>(())
/// ```
pub fn preview(
    catalog: &Catalog,
    name: &str,
    mode: PlaybackMode,
    base_frequency: Option<&str>,
    settings: &Settings,
) -> Result<PlaybackData, ScaleError> {
    let entry = catalog.require(name)?;
    let settings = Settings {
        base_frequency: base_frequency
            .map(|raw| parse_base_frequency(raw, settings.base_frequency))
            .unwrap_or(settings.base_frequency),
        ..settings.clone()
    };
    Ok(generate_playback(name, entry, mode, &settings))
}
