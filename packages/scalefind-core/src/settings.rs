//! # Settings
//!
//! Tunables for the lookup page and the audio preview, read from a kebab-case YAML
//! document. Every key is optional.
//!
//! ```yaml
//! base-frequency: 432
//! page-size: 18
//! default-sort: related
//! arpeggio-note-seconds: 0.25
//! chord-seconds: 1.2
//! waveform: sawtooth
//! gain: 0.3
//! ```

use serde::{Deserialize, Serialize};

use crate::audio::Waveform;
use crate::error::ScaleError;
use crate::paginate::PAGE_SIZE;
use crate::sort::SortMethod;

/// Reference pitch for the ratio `1/1`, in Hz.
pub const DEFAULT_BASE_FREQUENCY: f64 = 440.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub base_frequency: f64,
    pub page_size: usize,
    pub default_sort: SortMethod,
    pub arpeggio_note_seconds: f64,
    pub chord_seconds: f64,
    pub waveform: Waveform,
    pub gain: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_frequency: DEFAULT_BASE_FREQUENCY,
            page_size: PAGE_SIZE,
            default_sort: SortMethod::Name,
            arpeggio_note_seconds: 0.25,
            chord_seconds: 1.2,
            waveform: Waveform::Sawtooth,
            gain: 0.3,
        }
    }
}

/// Raw settings for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawSettings {
    base_frequency: Option<f64>,
    page_size: Option<usize>,
    default_sort: Option<String>,
    arpeggio_note_seconds: Option<f64>,
    chord_seconds: Option<f64>,
    waveform: Option<String>,
    gain: Option<f64>,
}

impl Settings {
    /// Parse a YAML settings document. An empty document yields the defaults.
    ///
    /// ```
    /// use scalefind::{Settings, SortMethod};
    ///
    /// let settings = Settings::from_yaml("base-frequency: 432\ndefault-sort: related\n")?;
    /// assert_eq!(settings.base_frequency, 432.0);
    /// assert_eq!(settings.default_sort, SortMethod::Related);
    /// assert_eq!(settings.page_size, 18);
    /// # Ok::<(), scalefind::ScaleError>(())
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, ScaleError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawSettings =
            serde_yaml::from_str(content).map_err(|e| ScaleError::Settings(e.to_string()))?;
        let defaults = Self::default();

        let base_frequency = raw.base_frequency.unwrap_or(defaults.base_frequency);
        if !is_positive(base_frequency) {
            return Err(ScaleError::Settings(format!(
                "base-frequency must be a positive number, got {}",
                base_frequency
            )));
        }

        let page_size = raw.page_size.unwrap_or(defaults.page_size);
        if page_size == 0 {
            return Err(ScaleError::Settings(
                "page-size must be at least 1".to_string(),
            ));
        }

        let waveform = match &raw.waveform {
            Some(name) => Waveform::from_name(name).ok_or_else(|| {
                ScaleError::Settings(format!("Unknown waveform: {}", name))
            })?,
            None => defaults.waveform,
        };

        let arpeggio_note_seconds = raw
            .arpeggio_note_seconds
            .unwrap_or(defaults.arpeggio_note_seconds);
        let chord_seconds = raw.chord_seconds.unwrap_or(defaults.chord_seconds);
        if !is_positive(arpeggio_note_seconds) || !is_positive(chord_seconds) {
            return Err(ScaleError::Settings(
                "note durations must be positive".to_string(),
            ));
        }

        let gain = raw.gain.unwrap_or(defaults.gain);
        if !(0.0..=1.0).contains(&gain) {
            return Err(ScaleError::Settings(format!(
                "gain must be between 0 and 1, got {}",
                gain
            )));
        }

        Ok(Self {
            base_frequency,
            page_size,
            default_sort: raw
                .default_sort
                .as_deref()
                .map(SortMethod::from_name)
                .unwrap_or(defaults.default_sort),
            arpeggio_note_seconds,
            chord_seconds,
            waveform,
            gain,
        })
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Read a base frequency from a free-text field.
///
/// Parsing is lenient the way a browser number field is: leading whitespace is
/// skipped and the longest numeric prefix is used (`"432 Hz"` reads as 432). Input
/// with no numeric prefix, or a value that is not a finite positive number, yields
/// `fallback`.
///
/// ```
/// use scalefind::parse_base_frequency;
///
/// assert_eq!(parse_base_frequency("432", 440.0), 432.0);
/// assert_eq!(parse_base_frequency(" 261.63Hz", 440.0), 261.63);
/// assert_eq!(parse_base_frequency("abc", 440.0), 440.0);
/// assert_eq!(parse_base_frequency("", 440.0), 440.0);
/// ```
pub fn parse_base_frequency(input: &str, fallback: f64) -> f64 {
    let value = numeric_prefix(input.trim_start()).and_then(|s| s.parse::<f64>().ok());
    match value {
        Some(v) if is_positive(v) => v,
        _ => {
            log::debug!("base frequency {:?} not usable, using {}", input, fallback);
            fallback
        }
    }
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`.
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}
