use super::{ATTACK_SECONDS, TONE_SECONDS};

/// One sine partial with the fixed attack/decay envelope: silent at
/// onset, linear ramp to its peak over the attack, then exponential decay
/// to its floor at the end of the tone.
pub struct Voice {
    sample_rate: f32,
    frequency: f32,
    peak: f32,
    floor: f32,
    position: u32,
}

impl Voice {
    pub fn new(sample_rate: u32, frequency: f32, peak: f32, floor: f32) -> Self {
        Self {
            sample_rate: sample_rate as f32,
            frequency,
            peak,
            floor,
            position: 0,
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn is_finished(&self) -> bool {
        self.t() >= TONE_SECONDS
    }

    fn t(&self) -> f32 {
        self.position as f32 / self.sample_rate
    }

    fn gain(&self) -> f32 {
        let t = self.t();
        if t < ATTACK_SECONDS {
            lerp(0.0, self.peak, t / ATTACK_SECONDS)
        } else {
            let progress = (t - ATTACK_SECONDS) / (TONE_SECONDS - ATTACK_SECONDS);
            self.peak * (self.floor / self.peak).powf(progress)
        }
    }

    /// The next sample, or None once the tone has run its course.
    pub fn next(&mut self) -> Option<f32> {
        if self.is_finished() {
            return None;
        }

        let t = self.t();
        let value = (t * self.frequency * 2.0 * std::f32::consts::PI).sin() * self.gain();
        self.position += 1;

        Some(value)
    }
}

fn lerp(a: f32, b: f32, v: f32) -> f32 {
    (b - a) * v + a
}
