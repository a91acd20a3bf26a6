use std::env;
use std::fs;
use std::io::{self, BufRead};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use note_board::{AudioOutput, Command, Config, NoteBoard, ToneSink};

fn main() {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let config = match env::args().nth(1) {
        Some(path) => {
            let yaml = fs::read_to_string(&path).expect("could not read config file");
            Config::from(&yaml).expect("could not parse config file")
        }
        None => Config::default(),
    };

    // Playback is best-effort: without an output device the board still
    // cycles and lays out, silently.
    let (_audio_output, sink): (Option<AudioOutput>, Option<Arc<dyn ToneSink>>) =
        match AudioOutput::new() {
            Ok(output) => {
                let handle = output.handle();
                (Some(output), Some(Arc::new(handle)))
            }
            Err(err) => {
                log::warn!("Audio output unavailable, playback disabled: {}", err);
                (None, None)
            }
        };

    let (board, mut publisher) = NoteBoard::new(&config, sink);

    let events = publisher.get_receiver();
    publisher.listen();
    thread::spawn(move || {
        for event in events.iter() {
            log::info!("{:?}", event);
        }
    });

    let (command_sender, command_receiver) = mpsc::channel();
    board.listen(command_receiver);

    println!("commands: cycle <index> | play | clear | quit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.unwrap();
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        match Command::parse(input) {
            Ok(command) => command_sender.send(command).unwrap(),
            Err(_) => println!("commands: cycle <index> | play | clear | quit"),
        }
    }
}
