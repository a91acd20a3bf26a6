use crate::NoteName;

/// A clickable staff marker bound to one note and one horizontal slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub slot: usize,
    pub note: NoteName,
    pub left: f64,
    pub top: f64,
    pub is_changing: bool,
    pub is_playing: bool,
}

impl Token {
    pub fn new(slot: usize, note: NoteName, left: f64, top: f64) -> Self {
        Self {
            slot,
            note,
            left,
            top,
            is_changing: false,
            is_playing: false,
        }
    }
}
