//! Offline oscillator mix
//!
//! Renders a [`PlaybackData`] schedule to mono `f32` samples.

use std::f32::consts::PI;

use super::types::{PlaybackData, Waveform};

/// Mix every tone of `data` into a mono buffer at `sample_rate`.
///
/// The buffer covers `data.total_duration()` and is clamped to `[-1, 1]`.
pub fn render_samples(data: &PlaybackData, sample_rate: u32) -> Vec<f32> {
    let rate = sample_rate as f64;
    let len = (data.total_duration() * rate).ceil() as usize;
    let mut buffer = vec![0.0f32; len];

    for tone in &data.tones {
        let start = (tone.start_time * rate).round() as usize;
        let end = ((tone.start_time + tone.duration) * rate).round() as usize;
        let end = end.min(len);
        let gain = tone.gain as f32;

        for (clock, sample) in buffer.iter_mut().enumerate().take(end).skip(start) {
            let elapsed = (clock - start) as f64 / rate;
            let phase = ((elapsed * tone.frequency) % 1.0) as f32 * 2.0 * PI;
            *sample += gain * compute_sample(data.waveform, phase);
        }
    }

    for sample in &mut buffer {
        *sample = sample.clamp(-1.0, 1.0);
    }
    buffer
}

/// One oscillator period, `phase` in `[0, 2π)`.
fn compute_sample(waveform: Waveform, phase: f32) -> f32 {
    match waveform {
        Waveform::Sine => phase.sin(),
        Waveform::Square => {
            if phase < PI {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Triangle => (2.0 / PI) * (PI - (phase - PI).abs()) - 1.0,
        Waveform::Sawtooth => {
            if phase <= PI {
                phase / PI
            } else {
                ((phase - PI) / PI) - 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{PlaybackMode, Tone};

    fn data(waveform: Waveform, tones: Vec<Tone>) -> PlaybackData {
        PlaybackData {
            scale: "test".to_string(),
            mode: PlaybackMode::Arpeggio,
            base_frequency: 440.0,
            waveform,
            tones,
        }
    }

    fn tone(frequency: f64, start_time: f64, duration: f64, gain: f64) -> Tone {
        Tone {
            ratio: "1/1".to_string(),
            frequency,
            start_time,
            duration,
            gain,
        }
    }

    #[test]
    fn test_oscillator_shapes() {
        assert_eq!(compute_sample(Waveform::Sawtooth, 0.0), 0.0);
        assert_eq!(compute_sample(Waveform::Sawtooth, PI), 1.0);
        assert_eq!(compute_sample(Waveform::Square, 0.5), 1.0);
        assert_eq!(compute_sample(Waveform::Square, PI + 0.5), -1.0);
        assert_eq!(compute_sample(Waveform::Triangle, 0.0), -1.0);
        assert_eq!(compute_sample(Waveform::Triangle, PI), 1.0);
        assert!(compute_sample(Waveform::Sine, PI / 2.0) > 0.999);
    }

    #[test]
    fn test_buffer_length_covers_schedule() {
        let d = data(Waveform::Sine, vec![tone(440.0, 0.0, 0.25, 0.3), tone(660.0, 0.25, 0.25, 0.3)]);
        let samples = render_samples(&d, 8000);
        assert_eq!(samples.len(), 4000);
    }

    #[test]
    fn test_silence_outside_tones() {
        let d = data(Waveform::Square, vec![tone(100.0, 0.5, 0.5, 0.5)]);
        let samples = render_samples(&d, 1000);
        assert!(samples[..500].iter().all(|s| *s == 0.0));
        assert!(samples[500..].iter().any(|s| *s != 0.0));
    }

    #[test]
    fn test_mix_is_clamped() {
        let loud = (0..8).map(|_| tone(50.0, 0.0, 0.1, 1.0)).collect();
        let samples = render_samples(&data(Waveform::Square, loud), 1000);
        assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert_eq!(samples[1], 1.0);
    }

    #[test]
    fn test_empty_schedule() {
        assert!(render_samples(&data(Waveform::Sine, vec![]), 44100).is_empty());
    }
}
