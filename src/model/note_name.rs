use crate::Result;
use combine::{choice, token, Parser, Stream};
use strum_macros::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    pub fn parser<Input>() -> impl Parser<Input, Output = Self>
    where
        Input: Stream<Token = char>,
    {
        choice((
            token('C').map(|_| NoteName::C),
            token('D').map(|_| NoteName::D),
            token('E').map(|_| NoteName::E),
            token('F').map(|_| NoteName::F),
            token('G').map(|_| NoteName::G),
            token('A').map(|_| NoteName::A),
            token('B').map(|_| NoteName::B),
        ))
    }

    pub fn parse(string: &str) -> Result<Self> {
        let (result, _) = Self::parser::<&str>().parse(string)?;

        Ok(result)
    }

    pub fn next(&self) -> Self {
        match self {
            NoteName::C => NoteName::D,
            NoteName::D => NoteName::E,
            NoteName::E => NoteName::F,
            NoteName::F => NoteName::G,
            NoteName::G => NoteName::A,
            NoteName::A => NoteName::B,
            NoteName::B => NoteName::C,
        }
    }

    /// Ascending pitch index on the staff: C is 0, B is 6.
    pub fn staff_index(&self) -> usize {
        match self {
            NoteName::C => 0,
            NoteName::D => 1,
            NoteName::E => 2,
            NoteName::F => 3,
            NoteName::G => 4,
            NoteName::A => 5,
            NoteName::B => 6,
        }
    }

    /// Fixed one-octave frequency table, C4 to B4.
    pub fn frequency(&self) -> f64 {
        match self {
            NoteName::C => 261.63,
            NoteName::D => 293.66,
            NoteName::E => 329.63,
            NoteName::F => 349.23,
            NoteName::G => 392.00,
            NoteName::A => 440.00,
            NoteName::B => 493.88,
        }
    }
}

impl Default for NoteName {
    fn default() -> Self {
        NoteName::C
    }
}
