mod event_publisher;

pub use event_publisher::EventPublisher;

use crate::NoteName;

/// Visual-state change published by the board for the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardEvent {
    NoteChanged {
        token_index: usize,
        note: NoteName,
        top: f64,
    },
    FlashEnded {
        token_index: usize,
    },
    PlaybackStarted,
    TokenPlayed {
        token_index: usize,
        note: NoteName,
    },
    PlaybackFinished,
    Cleared,
}
