use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::SystemTime;

use crate::event::BoardEvent;
use crate::Token;

pub struct FlashOffInstruction {
    pub token_index: usize,
    pub time: SystemTime,
}

/// Clears a cycled token's change flash once its deadline passes.
pub struct FlashOffTriggerer {
    receiver: Receiver<FlashOffInstruction>,
    tokens: Arc<Mutex<Vec<Token>>>,
    event_sender: Sender<BoardEvent>,
}

impl FlashOffTriggerer {
    pub fn new(
        tokens: Arc<Mutex<Vec<Token>>>,
        event_sender: Sender<BoardEvent>,
    ) -> (Self, Sender<FlashOffInstruction>) {
        let (sender, receiver) = mpsc::channel();

        let flash_off_triggerer = Self {
            receiver,
            tokens,
            event_sender,
        };

        (flash_off_triggerer, sender)
    }

    pub fn listen(self) -> JoinHandle<()> {
        thread::spawn(move || {
            for instruction in self.receiver.iter() {
                let now = SystemTime::now();
                let from_now = instruction
                    .time
                    .duration_since(now)
                    .unwrap_or_default();

                spin_sleep::sleep(from_now);

                {
                    let mut tokens = self.tokens.lock().unwrap();
                    if let Some(token) = tokens.get_mut(instruction.token_index) {
                        token.is_changing = false;
                    }
                }
                self.event_sender
                    .send(BoardEvent::FlashEnded {
                        token_index: instruction.token_index,
                    })
                    .ok();
            }
        })
    }
}
