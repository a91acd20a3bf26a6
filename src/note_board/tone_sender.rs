use std::sync::Arc;

use crate::synth::ToneSink;
use crate::NoteName;

/// Cloneable handle the board and the sequence player fire notes through.
/// Without a synthesis engine every note is a silent no-op.
#[derive(Clone)]
pub struct ToneSender {
    sink: Option<Arc<dyn ToneSink>>,
}

impl ToneSender {
    pub fn new(sink: Option<Arc<dyn ToneSink>>) -> Self {
        Self { sink }
    }

    pub fn fire_note(&self, note: NoteName) {
        if let Some(sink) = &self.sink {
            sink.fire(note);
        }
    }
}
