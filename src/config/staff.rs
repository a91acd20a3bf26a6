use serde::Deserialize;

/// Staff bounding geometry, owned by the presentation layer and consumed
/// read-only at board construction.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Staff {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub note_diameter: f64,
    pub columns: usize,
    /// Inset factor for the horizontal distribution: 1.0 runs tokens to
    /// the usable edges, smaller values pull them toward the center.
    pub compression: f64,
}

impl Default for Staff {
    fn default() -> Self {
        Self {
            top: 175.0,
            left: 180.0,
            width: 600.0,
            height: 200.0,
            note_diameter: 60.0,
            columns: 7,
            compression: 0.9,
        }
    }
}
