use log::*;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::{CancellationToken, PlayingState, ToneSender};
use crate::event::BoardEvent;
use crate::Token;

/// Auditions the board's tokens left to right, one tone per step,
/// yielding between steps for the fixed inter-note delay.
pub struct SequencePlayer {
    tokens: Arc<Mutex<Vec<Token>>>,
    playing_state: Arc<Mutex<PlayingState>>,
    tone_sender: ToneSender,
    event_sender: Sender<BoardEvent>,
    step_delay: Duration,
}

impl SequencePlayer {
    pub fn new(
        tokens: Arc<Mutex<Vec<Token>>>,
        playing_state: Arc<Mutex<PlayingState>>,
        tone_sender: ToneSender,
        event_sender: Sender<BoardEvent>,
        step_delay: Duration,
    ) -> Self {
        Self {
            tokens,
            playing_state,
            tone_sender,
            event_sender,
            step_delay,
        }
    }

    /// Starts a walk unless one is already in flight or there is nothing
    /// to play. The cancellation token belongs to this walk alone; it is
    /// polled once per step, after the delay.
    pub fn start(&self, cancellation: CancellationToken) -> Option<JoinHandle<()>> {
        let order = self.playback_order();
        if order.is_empty() {
            return None;
        }

        {
            let mut playing_state = self.playing_state.lock().unwrap();
            if let PlayingState::Playing = *playing_state {
                debug!("Sequence already playing, ignoring start");
                return None;
            }
            *playing_state = PlayingState::Playing;
        }

        let tokens = self.tokens.clone();
        let playing_state = self.playing_state.clone();
        let tone_sender = self.tone_sender.clone();
        let event_sender = self.event_sender.clone();
        let step_delay = self.step_delay;

        Some(thread::spawn(move || {
            for index in order {
                let note = {
                    let mut tokens = tokens.lock().unwrap();
                    let token = &mut tokens[index];
                    token.is_playing = true;
                    token.note
                };
                event_sender
                    .send(BoardEvent::TokenPlayed {
                        token_index: index,
                        note,
                    })
                    .ok();
                tone_sender.fire_note(note);

                spin_sleep::sleep(step_delay);

                {
                    let mut tokens = tokens.lock().unwrap();
                    tokens[index].is_playing = false;
                }

                if cancellation.is_cancelled() {
                    debug!("Sequence walk cancelled after token {}", index);
                    break;
                }
            }

            *playing_state.lock().unwrap() = PlayingState::NotPlaying;
            event_sender.send(BoardEvent::PlaybackFinished).ok();
        }))
    }

    /// Token indices sorted by ascending horizontal position, not by
    /// creation order.
    fn playback_order(&self) -> Vec<usize> {
        let tokens = self.tokens.lock().unwrap();
        let mut order: Vec<usize> = (0..tokens.len()).collect();
        order.sort_by(|a, b| tokens[*a].left.partial_cmp(&tokens[*b].left).unwrap());

        order
    }
}
