use std::str::FromStr;

use shakmaty::{File, Rank, Square};
use thiserror::Error;

/// Literal that ends the session at any move prompt.
pub const EXIT_COMMAND: &str = "exit";

/// Error when parsing a move string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("expected 4 characters, found {0}")]
    Length(usize),
    #[error("invalid square notation: '{0}'")]
    Square(String),
}

/// A move as typed by a player: origin and destination, not yet checked
/// against the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInput {
    from: Square,
    to: Square,
}

impl MoveInput {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }
}

/// Parses `[a-h][1-8][a-h][1-8]`, lowercase only.
impl FromStr for MoveInput {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(ParseMoveError::Length(s.chars().count()));
        }
        let bad_square = || ParseMoveError::Square(s.to_owned());
        let from = parse_square(&bytes[..2]).ok_or_else(bad_square)?;
        let to = parse_square(&bytes[2..]).ok_or_else(bad_square)?;
        Ok(Self { from, to })
    }
}

/// One line of player input at a move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The player typed `exit`.
    Quit,
    /// Anything else, parsed as a move.
    Move(MoveInput),
}

impl FromStr for Command {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == EXIT_COMMAND {
            Ok(Command::Quit)
        } else {
            s.parse().map(Command::Move)
        }
    }
}

fn parse_square(pair: &[u8]) -> Option<Square> {
    match *pair {
        [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Some(Square::from_coords(
            File::new(u32::from(file - b'a')),
            Rank::new(u32::from(rank - b'1')),
        )),
        _ => None,
    }
}
