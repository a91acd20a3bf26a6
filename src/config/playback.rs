use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Playback {
    /// Delay between tokens while auditioning the sequence.
    pub step_delay_ms: u64,
    /// How long a cycled token keeps its change flash.
    pub flash_ms: u64,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            step_delay_ms: 400,
            flash_ms: 300,
        }
    }
}
