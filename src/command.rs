use combine::{
    attempt, choice, many1,
    parser::char::{digit, spaces, string},
    Parser, Stream,
};

use crate::Result;

/// A user-triggered operation delivered to the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    CycleToken(usize),
    PlaySequence,
    Clear,
}

impl Command {
    pub fn parser<Input>() -> impl Parser<Input, Output = Self>
    where
        Input: Stream<Token = char>,
    {
        choice((
            attempt(string("play")).map(|_| Command::PlaySequence),
            attempt(string("clear")).map(|_| Command::Clear),
            (string("cycle"), spaces(), many1(digit()))
                .map(|(_, _, digits): (_, _, String)| {
                    Command::CycleToken(digits.parse().unwrap_or(usize::MAX))
                }),
        ))
    }

    pub fn parse(string: &str) -> Result<Self> {
        let (result, _) = Self::parser::<&str>().parse(string)?;

        Ok(result)
    }
}
