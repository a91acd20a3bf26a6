use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use super::BoardEvent;

/// Fans the board's event stream out to any number of subscribers.
pub struct EventPublisher {
    events: Receiver<BoardEvent>,
    senders: Vec<Sender<BoardEvent>>,
}

impl EventPublisher {
    pub fn new(events: Receiver<BoardEvent>) -> Self {
        Self {
            events,
            senders: Vec::new(),
        }
    }

    pub fn get_receiver(&mut self) -> Receiver<BoardEvent> {
        let (sender, receiver) = mpsc::channel::<BoardEvent>();
        self.senders.push(sender);
        receiver
    }

    pub fn listen(self) -> JoinHandle<()> {
        thread::spawn(move || {
            for event in self.events.iter() {
                for sender in &self.senders {
                    sender.send(event.clone()).unwrap();
                }
            }
        })
    }
}
