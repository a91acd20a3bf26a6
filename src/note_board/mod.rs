mod cancellation;
mod flash_off_triggerer;
mod playing_state;
mod sequence_player;
mod tone_sender;

pub use cancellation::CancellationToken;
pub use playing_state::PlayingState;
pub use tone_sender::ToneSender;

use log::*;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime};

use flash_off_triggerer::{FlashOffInstruction, FlashOffTriggerer};
use sequence_player::SequencePlayer;

use crate::event::{BoardEvent, EventPublisher};
use crate::synth::ToneSink;
use crate::{Command, Config, Layout, NoteName, Token};

/// The board: a row of staff tokens, each bound to one note, with
/// cycle / play-all / clear operations driven by typed commands.
pub struct NoteBoard {
    tokens: Arc<Mutex<Vec<Token>>>,
    layout: Layout,
    playing_state: Arc<Mutex<PlayingState>>,
    sequence_player: SequencePlayer,
    tone_sender: ToneSender,
    walk_cancellation: CancellationToken,
    flash_off_sender: Sender<FlashOffInstruction>,
    flash_duration: Duration,
    event_sender: Sender<BoardEvent>,
}

impl NoteBoard {
    pub fn new(config: &Config, sink: Option<Arc<dyn ToneSink>>) -> (Self, EventPublisher) {
        let layout = Layout::new(&config.staff);

        let tokens: Vec<Token> = (0..layout.columns())
            .map(|slot| {
                let note = config
                    .initial_notes
                    .get(slot)
                    .map(|label| NoteName::parse(label).unwrap_or_default())
                    .unwrap_or_default();
                let left = layout.slot_left(slot).unwrap();

                Token::new(slot, note, left, layout.note_top(note))
            })
            .collect();
        let tokens = Arc::new(Mutex::new(tokens));

        let (event_sender, event_receiver) = mpsc::channel();
        let publisher = EventPublisher::new(event_receiver);

        let (flash_off_triggerer, flash_off_sender) =
            FlashOffTriggerer::new(tokens.clone(), event_sender.clone());
        flash_off_triggerer.listen();

        let tone_sender = ToneSender::new(sink);
        let playing_state = Arc::new(Mutex::new(PlayingState::NotPlaying));
        let sequence_player = SequencePlayer::new(
            tokens.clone(),
            playing_state.clone(),
            tone_sender.clone(),
            event_sender.clone(),
            Duration::from_millis(config.playback.step_delay_ms),
        );

        let board = Self {
            tokens,
            layout,
            playing_state,
            sequence_player,
            tone_sender,
            walk_cancellation: CancellationToken::new(),
            flash_off_sender,
            flash_duration: Duration::from_millis(config.playback.flash_ms),
            event_sender,
        };

        (board, publisher)
    }

    /// Runs the command dispatch loop until every command sender is gone.
    pub fn listen(mut self, commands: Receiver<Command>) -> JoinHandle<()> {
        thread::spawn(move || {
            for command in commands.iter() {
                self.handle(command);
            }
        })
    }

    pub fn handle(&mut self, command: Command) {
        debug!("Received command: {:?}", command);
        match command {
            Command::CycleToken(index) => self.cycle_token(index),
            Command::PlaySequence => {
                self.play_sequence();
            }
            Command::Clear => self.clear_all(),
        }
    }

    /// Advances a token one step through the note cycle, moves it to the
    /// new staff position and sounds the new note.
    pub fn cycle_token(&mut self, index: usize) {
        let next = {
            let mut tokens = self.tokens.lock().unwrap();
            let token = match tokens.get_mut(index) {
                Some(token) => token,
                None => {
                    warn!("No token at index {}", index);
                    return;
                }
            };

            let next = token.note.next();
            token.note = next;
            token.top = self.layout.note_top(next);
            token.is_changing = true;

            next
        };

        self.flash_off_sender
            .send(FlashOffInstruction {
                token_index: index,
                time: SystemTime::now() + self.flash_duration,
            })
            .unwrap();
        self.event_sender
            .send(BoardEvent::NoteChanged {
                token_index: index,
                note: next,
                top: self.layout.note_top(next),
            })
            .ok();

        self.tone_sender.fire_note(next);
    }

    /// Auditions all tokens left to right. A no-op while a walk is
    /// already in flight.
    pub fn play_sequence(&mut self) -> Option<JoinHandle<()>> {
        let cancellation = CancellationToken::new();
        let handle = self.sequence_player.start(cancellation.clone());

        if handle.is_some() {
            self.walk_cancellation = cancellation;
            self.event_sender.send(BoardEvent::PlaybackStarted).ok();
        }

        handle
    }

    /// Resets every token to C at C's staff position and stops an
    /// in-flight walk at its next step boundary. Idempotent.
    pub fn clear_all(&mut self) {
        self.walk_cancellation.cancel();

        {
            let mut tokens = self.tokens.lock().unwrap();
            for token in tokens.iter_mut() {
                token.note = NoteName::default();
                token.top = self.layout.note_top(NoteName::default());
                token.is_playing = false;
            }
        }

        *self.playing_state.lock().unwrap() = PlayingState::NotPlaying;
        self.event_sender.send(BoardEvent::Cleared).ok();
    }

    /// Snapshot of the tokens for a polling presentation layer.
    pub fn tokens(&self) -> Vec<Token> {
        self.tokens.lock().unwrap().clone()
    }

    pub fn is_playing(&self) -> bool {
        matches!(*self.playing_state.lock().unwrap(), PlayingState::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingSink {
        notes: Mutex<Vec<NoteName>>,
    }

    impl RecordingSink {
        fn notes(&self) -> Vec<NoteName> {
            self.notes.lock().unwrap().clone()
        }
    }

    impl ToneSink for RecordingSink {
        fn fire(&self, note: NoteName) {
            self.notes.lock().unwrap().push(note);
        }
    }

    fn test_board(
        columns: usize,
        step_delay_ms: u64,
    ) -> (NoteBoard, EventPublisher, Arc<RecordingSink>) {
        let mut config = Config::default();
        config.staff.columns = columns;
        config.playback.step_delay_ms = step_delay_ms;

        let sink = Arc::new(RecordingSink::default());
        let (board, publisher) = NoteBoard::new(&config, Some(sink.clone()));

        (board, publisher, sink)
    }

    #[test]
    fn tokens_start_at_c_on_their_slots() {
        let (board, _publisher, _sink) = test_board(7, 400);

        let tokens = board.tokens();

        assert_eq!(tokens.len(), 7);
        for token in &tokens {
            assert_eq!(token.note, NoteName::C);
            assert_eq!(token.top, board.layout.note_top(NoteName::C));
        }
        assert!(tokens.windows(2).all(|pair| pair[0].left < pair[1].left));
    }

    #[test]
    fn initial_notes_from_config_fall_back_to_c() {
        let mut config = Config::default();
        config.staff.columns = 3;
        config.initial_notes = vec!["E".into(), "H".into()];

        let (board, _publisher) = NoteBoard::new(&config, None);

        let notes: Vec<_> = board.tokens().iter().map(|token| token.note).collect();

        assert_eq!(notes, vec![NoteName::E, NoteName::C, NoteName::C]);
    }

    #[test]
    fn cycling_a_token_seven_times_returns_it_home() {
        let (mut board, _publisher, sink) = test_board(7, 400);
        let original_top = board.tokens()[3].top;

        board.cycle_token(3);

        let token = board.tokens()[3].clone();
        assert_eq!(token.note, NoteName::D);
        assert_eq!(token.top, board.layout.note_top(NoteName::D));
        assert!(token.is_changing);

        for _ in 0..6 {
            board.cycle_token(3);
        }

        let token = board.tokens()[3].clone();
        assert_eq!(token.note, NoteName::C);
        assert_eq!(token.top, original_top);
        assert_eq!(
            sink.notes(),
            vec![
                NoteName::D,
                NoteName::E,
                NoteName::F,
                NoteName::G,
                NoteName::A,
                NoteName::B,
                NoteName::C
            ]
        );
    }

    #[test]
    fn cycling_publishes_note_changed_then_flash_ended() {
        let (mut board, mut publisher, _sink) = test_board(1, 400);
        board.flash_duration = Duration::from_millis(10);
        let events = publisher.get_receiver();
        publisher.listen();

        board.cycle_token(0);

        assert_eq!(
            events.recv_timeout(Duration::from_secs(1)).unwrap(),
            BoardEvent::NoteChanged {
                token_index: 0,
                note: NoteName::D,
                top: board.layout.note_top(NoteName::D),
            }
        );
        assert_eq!(
            events.recv_timeout(Duration::from_secs(1)).unwrap(),
            BoardEvent::FlashEnded { token_index: 0 }
        );
    }

    #[test]
    fn cycling_out_of_range_is_ignored() {
        let (mut board, _publisher, sink) = test_board(2, 400);
        let before = board.tokens();

        board.cycle_token(9);

        assert_eq!(board.tokens(), before);
        assert!(sink.notes().is_empty());
    }

    #[test]
    fn flash_clears_after_its_deadline() {
        let (mut board, _publisher, _sink) = test_board(1, 400);
        board.flash_duration = Duration::from_millis(20);

        board.cycle_token(0);
        assert!(board.tokens()[0].is_changing);

        std::thread::sleep(Duration::from_millis(100));

        assert!(!board.tokens()[0].is_changing);
    }

    #[test]
    fn play_sequence_audits_tokens_by_horizontal_position() {
        let (mut board, _publisher, sink) = test_board(3, 20);
        {
            let mut tokens = board.tokens.lock().unwrap();
            tokens[0].left = 10.0;
            tokens[0].note = NoteName::C;
            tokens[1].left = 5.0;
            tokens[1].note = NoteName::E;
            tokens[2].left = 20.0;
            tokens[2].note = NoteName::G;
        }

        let handle = board.play_sequence().unwrap();
        handle.join().unwrap();

        assert_eq!(sink.notes(), vec![NoteName::E, NoteName::C, NoteName::G]);
        assert!(!board.is_playing());
        assert!(board.tokens().iter().all(|token| !token.is_playing));
    }

    #[test]
    fn play_sequence_while_playing_is_a_no_op() {
        let (mut board, _publisher, sink) = test_board(3, 40);

        let handle = board.play_sequence().unwrap();
        assert!(board.is_playing());
        assert!(board.play_sequence().is_none());
        assert!(board.is_playing());

        handle.join().unwrap();

        assert_eq!(sink.notes().len(), 3);
        assert!(!board.is_playing());
    }

    #[test]
    fn play_sequence_with_no_tokens_is_a_no_op() {
        let (mut board, _publisher, sink) = test_board(0, 20);

        assert!(board.play_sequence().is_none());
        assert!(!board.is_playing());
        assert!(sink.notes().is_empty());
    }

    #[test]
    fn clear_resets_notes_and_forces_idle() {
        let (mut board, _publisher, _sink) = test_board(4, 400);
        board.cycle_token(0);
        board.cycle_token(0);
        board.cycle_token(2);

        board.clear_all();
        let cleared = board.tokens();

        for token in &cleared {
            assert_eq!(token.note, NoteName::C);
            assert_eq!(token.top, board.layout.note_top(NoteName::C));
            assert!(!token.is_playing);
        }
        assert!(!board.is_playing());

        board.clear_all();
        assert_eq!(board.tokens(), cleared);
    }

    #[test]
    fn clear_cancels_an_in_flight_walk() {
        let (mut board, _publisher, sink) = test_board(3, 150);
        board.cycle_token(0);
        let fired_while_cycling = sink.notes().len();

        let handle = board.play_sequence().unwrap();
        std::thread::sleep(Duration::from_millis(75));
        board.clear_all();

        for token in board.tokens() {
            assert_eq!(token.note, NoteName::C);
        }

        handle.join().unwrap();

        let fired_during_walk = sink.notes().len() - fired_while_cycling;
        assert!(fired_during_walk < 3);
        assert!(!board.is_playing());
    }
}
