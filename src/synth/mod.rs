mod output;
mod voice;

pub use output::{AudioOutput, SynthHandle};
pub use voice::Voice;

use crate::NoteName;

/// Seconds from onset to peak amplitude.
pub const ATTACK_SECONDS: f32 = 0.01;
/// Total tone length; the decay reaches its floor here and the voice stops.
pub const TONE_SECONDS: f32 = 0.3;

const FUNDAMENTAL_PEAK: f32 = 0.3;
const FUNDAMENTAL_FLOOR: f32 = 0.01;
const HARMONICS: [u32; 2] = [2, 3];
const HARMONIC_PEAK: f32 = 0.1;
const HARMONIC_FLOOR: f32 = 0.001;

/// An audio-synthesis capability the board can fire notes into. When none
/// is available, playback degrades to a silent no-op.
pub trait ToneSink: Send + Sync {
    fn fire(&self, note: NoteName);
}

/// The piano-like tone for one note: a sine fundamental plus two
/// harmonic-enrichment overtones, each with its own peak and decay floor.
pub fn voices_for(sample_rate: u32, note: NoteName) -> Vec<Voice> {
    let frequency = note.frequency() as f32;

    let mut voices = vec![Voice::new(
        sample_rate,
        frequency,
        FUNDAMENTAL_PEAK,
        FUNDAMENTAL_FLOOR,
    )];
    for harmonic in HARMONICS.iter() {
        voices.push(Voice::new(
            sample_rate,
            frequency * *harmonic as f32,
            HARMONIC_PEAK / *harmonic as f32,
            HARMONIC_FLOOR,
        ));
    }

    voices
}
