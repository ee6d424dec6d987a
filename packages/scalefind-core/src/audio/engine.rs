//! Tone schedule generation

use crate::catalog::ScaleEntry;
use crate::settings::Settings;

use super::ratio_parser::parse_ratio;
use super::types::{PlaybackData, PlaybackMode, Tone};

/// Build the tone schedule for previewing `entry`.
///
/// Each ratio in [`ScaleEntry::ratios`] becomes one tone at `ratio * base_frequency`.
/// Ratios that cannot be parsed are skipped with a warning and do not leave a gap
/// in an arpeggio.
///
/// # Timing
/// - Arpeggio: tone `i` starts at `i * arpeggio_note_seconds` and lasts
///   `arpeggio_note_seconds`, so consecutive tones never overlap
/// - Chord: every tone starts at 0 and lasts `chord_seconds`
pub fn generate_playback(
    name: &str,
    entry: &ScaleEntry,
    mode: PlaybackMode,
    settings: &Settings,
) -> PlaybackData {
    let mut tones = Vec::with_capacity(entry.ratios.len());

    for ratio_str in &entry.ratios {
        let Some(ratio) = parse_ratio(ratio_str) else {
            log::warn!("{}: skipping unparseable ratio {:?}", name, ratio_str);
            continue;
        };

        let (start_time, duration) = match mode {
            PlaybackMode::Arpeggio => (
                tones.len() as f64 * settings.arpeggio_note_seconds,
                settings.arpeggio_note_seconds,
            ),
            PlaybackMode::Chord => (0.0, settings.chord_seconds),
        };

        tones.push(Tone {
            ratio: ratio_str.clone(),
            frequency: settings.base_frequency * ratio,
            start_time,
            duration,
            gain: settings.gain,
        });
    }

    PlaybackData {
        scale: name.to_string(),
        mode,
        base_frequency: settings.base_frequency,
        waveform: settings.waveform,
        tones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn triad() -> ScaleEntry {
        ScaleEntry::with_notes(["1/1", "5/4", "3/2"]).with_ratios(["1/1", "5/4", "3/2"])
    }

    #[test]
    fn test_arpeggio_is_sequential() {
        let data = generate_playback("Triad", &triad(), PlaybackMode::Arpeggio, &Settings::default());

        let frequencies: Vec<f64> = data.tones.iter().map(|t| t.frequency).collect();
        assert_eq!(frequencies, vec![440.0, 550.0, 660.0]);

        let starts: Vec<f64> = data.tones.iter().map(|t| t.start_time).collect();
        assert_eq!(starts, vec![0.0, 0.25, 0.5]);
        for pair in data.tones.windows(2) {
            assert!(pair[0].start_time + pair[0].duration <= pair[1].start_time);
        }
        assert_eq!(data.total_duration(), 0.75);
    }

    #[test]
    fn test_chord_is_simultaneous() {
        let data = generate_playback("Triad", &triad(), PlaybackMode::Chord, &Settings::default());
        assert!(data.tones.iter().all(|t| t.start_time == 0.0 && t.duration == 1.2));
        assert_eq!(data.total_duration(), 1.2);
    }

    #[test]
    fn test_base_frequency_scales_tones() {
        let settings = Settings {
            base_frequency: 200.0,
            ..Settings::default()
        };
        let data = generate_playback("Triad", &triad(), PlaybackMode::Chord, &settings);
        assert_eq!(data.base_frequency, 200.0);
        assert_eq!(data.tones[2].frequency, 300.0);
    }

    #[test]
    fn test_unparseable_ratios_skipped_without_gap() {
        let entry = ScaleEntry::default().with_ratios(["1/1", "oops", "2"]);
        let data = generate_playback("Gappy", &entry, PlaybackMode::Arpeggio, &Settings::default());
        assert_eq!(data.tones.len(), 2);
        assert_eq!(data.tones[1].ratio, "2");
        assert_eq!(data.tones[1].start_time, 0.25);
        assert_eq!(data.tones[1].frequency, 880.0);
    }

    #[test]
    fn test_no_ratios_is_silent() {
        let entry = ScaleEntry::with_notes(["1/1"]);
        let data = generate_playback("Mute", &entry, PlaybackMode::Arpeggio, &Settings::default());
        assert!(data.tones.is_empty());
        assert_eq!(data.total_duration(), 0.0);
    }

    #[test]
    fn test_mode_from_name() {
        assert_eq!(PlaybackMode::from_name("chord"), PlaybackMode::Chord);
        assert_eq!(PlaybackMode::from_name("sustained"), PlaybackMode::Chord);
        assert_eq!(PlaybackMode::from_name("arpeggio"), PlaybackMode::Arpeggio);
        assert_eq!(PlaybackMode::from_name("whatever"), PlaybackMode::Arpeggio);
    }
}
