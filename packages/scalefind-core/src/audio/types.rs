//! Playback data type definitions

use serde::{Deserialize, Serialize};

/// How the ratios of a scale are voiced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    /// One tone after another
    #[default]
    Arpeggio,
    /// All tones at once, sustained
    Chord,
}

impl PlaybackMode {
    /// `chord` and `sustained` select [`PlaybackMode::Chord`]; anything else is an arpeggio.
    pub fn from_name(s: &str) -> Self {
        match s.trim() {
            "chord" | "sustained" => PlaybackMode::Chord,
            _ => PlaybackMode::Arpeggio,
        }
    }
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    #[default]
    Sawtooth,
}

impl Waveform {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim() {
            "sine" => Some(Waveform::Sine),
            "square" => Some(Waveform::Square),
            "triangle" => Some(Waveform::Triangle),
            "sawtooth" => Some(Waveform::Sawtooth),
            _ => None,
        }
    }
}

/// One scheduled oscillator.
///
/// Times are in seconds from the start of playback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tone {
    pub ratio: String,
    pub frequency: f64,
    pub start_time: f64,
    pub duration: f64,
    pub gain: f64,
}

/// Tone schedule for one scale preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackData {
    pub scale: String,
    pub mode: PlaybackMode,
    pub base_frequency: f64,
    pub waveform: Waveform,
    pub tones: Vec<Tone>,
}

impl PlaybackData {
    /// End time of the last tone, in seconds.
    pub fn total_duration(&self) -> f64 {
        self.tones
            .iter()
            .map(|t| t.start_time + t.duration)
            .fold(0.0, f64::max)
    }
}
