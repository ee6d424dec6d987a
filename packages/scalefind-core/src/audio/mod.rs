//! # Audio Preview
//!
//! Turn a scale's ratio list into a tone schedule for the preview button, and
//! optionally into raw samples.
//!
//! ## Sub-modules
//! - `types` - PlaybackData, Tone, PlaybackMode, Waveform
//! - `ratio_parser` - `n/d` and bare-integer ratio parsing
//! - `engine` - Tone schedule generation
//! - `synth` - Offline oscillator mix for WAV export
//!
//! ## Modes
//! - **Arpeggio**: tones one after another, each `arpeggio-note-seconds` long
//! - **Chord**: all tones start together and last `chord-seconds`
//!
//! ## Example
//! ```rust
//! use scalefind::audio::{generate_playback, PlaybackMode};
//! use scalefind::{ScaleEntry, Settings};
//!
//! let entry = ScaleEntry::with_notes(["1/1", "3/2"]).with_ratios(["1/1", "3/2"]);
//! let data = generate_playback("Fifth", &entry, PlaybackMode::Arpeggio, &Settings::default());
//!
//! assert_eq!(data.tones.len(), 2);
//! assert_eq!(data.tones[1].frequency, 660.0);
//! assert_eq!(data.tones[1].start_time, 0.25);
//! ```
//!
//! The browser hands the schedule to Web Audio oscillators; the CLI mixes it with
//! [`render_samples`] and writes a WAV file.

mod engine;
mod ratio_parser;
mod synth;
mod types;

pub use engine::generate_playback;
pub use ratio_parser::parse_ratio;
pub use synth::render_samples;
pub use types::{PlaybackData, PlaybackMode, Tone, Waveform};
