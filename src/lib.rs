mod command;
mod config;
mod event;
mod layout;
mod model;
mod note_board;
mod result;
mod synth;

pub use command::Command;
pub use config::{playback::Playback, staff::Staff, Config};
pub use event::{BoardEvent, EventPublisher};
pub use layout::Layout;
pub use model::{NoteName, Token};
pub use note_board::{CancellationToken, NoteBoard};
pub use result::Result;
pub use synth::{AudioOutput, ToneSink};
