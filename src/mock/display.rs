use std::convert::Infallible;

use crate::GameDisplay;
use crate::board::Board;

/// One thing the session showed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Message(String),
    /// The rendered board grid.
    Board(String),
}

/// Display that records everything it is asked to show, for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    shown: Vec<Shown>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything shown, in order.
    #[inline]
    pub fn shown(&self) -> &[Shown] {
        &self.shown
    }

    /// Only the text messages, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|entry| match entry {
                Shown::Message(text) => Some(text.as_str()),
                Shown::Board(_) => None,
            })
            .collect()
    }

    /// Only the rendered boards, in order.
    pub fn boards(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|entry| match entry {
                Shown::Board(grid) => Some(grid.as_str()),
                Shown::Message(_) => None,
            })
            .collect()
    }

    /// The whole transcript as the console would print it.
    pub fn transcript(&self) -> String {
        self.shown
            .iter()
            .map(|entry| match entry {
                Shown::Message(text) => format!("{text}\n"),
                Shown::Board(grid) => grid.clone(),
            })
            .collect()
    }
}

impl GameDisplay for RecordingDisplay {
    type Error = Infallible;

    fn show_message(&mut self, message: &str) -> Result<(), Self::Error> {
        self.shown.push(Shown::Message(message.to_owned()));
        Ok(())
    }

    fn show_board(&mut self, board: &Board) -> Result<(), Self::Error> {
        self.shown.push(Shown::Board(board.render()));
        Ok(())
    }
}
