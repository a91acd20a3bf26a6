pub mod playback;
pub mod staff;

use playback::Playback;
use staff::Staff;

use serde::Deserialize;

use crate::Result;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub staff: Staff,
    #[serde(default)]
    pub playback: Playback,
    /// Optional starting note labels, one per column. Labels that are not
    /// one of the seven note names fall back to C.
    #[serde(default)]
    pub initial_notes: Vec<String>,
}

impl Config {
    pub fn from(yaml: &str) -> Result<Config> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            staff: Staff::default(),
            playback: Playback::default(),
            initial_notes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from("{}").unwrap();

        assert_eq!(config.staff.width, 600.0);
        assert_eq!(config.staff.columns, 7);
        assert_eq!(config.playback.step_delay_ms, 400);
        assert!(config.initial_notes.is_empty());
    }

    #[test]
    fn sections_override_independently() {
        let config = Config::from(
            "staff:\n  columns: 3\n  width: 400\nplayback:\n  step_delay_ms: 100\ninitial_notes: [E, G]\n",
        )
        .unwrap();

        assert_eq!(config.staff.columns, 3);
        assert_eq!(config.staff.width, 400.0);
        assert_eq!(config.staff.top, 175.0);
        assert_eq!(config.playback.step_delay_ms, 100);
        assert_eq!(config.playback.flash_ms, 300);
        assert_eq!(config.initial_notes, vec!["E".to_string(), "G".to_string()]);
    }
}
