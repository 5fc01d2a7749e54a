use board::Board;

pub mod board;
pub mod config;
pub mod game_logic;
pub mod mock;
pub mod notation;
pub mod session;
pub mod terminal;

/// Trait for reading player input one line at a time.
///
/// Abstracts over the real console and scripted inputs, providing a
/// uniform interface for [`session::Session`].
pub trait LineSource {
    /// Error type for read failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, Self::Error>;
}

/// Trait for showing prompts, messages and the board to the players.
///
/// Mirrors [`LineSource`] on the output side.
pub trait GameDisplay {
    /// Error type for display update failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Show one line of text.
    fn show_message(&mut self, message: &str) -> Result<(), Self::Error>;

    /// Show the board grid.
    fn show_board(&mut self, board: &Board) -> Result<(), Self::Error>;
}
