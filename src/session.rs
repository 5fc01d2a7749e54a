use shakmaty::Color;
use thiserror::Error;

use crate::board::BoardError;
use crate::game_logic::{GameEngine, GameResult, color_name};
use crate::notation::Command;
use crate::{GameDisplay, LineSource};

const FIRST_PLAYER_PROMPT: &str = "First Player's name:";
const SECOND_PLAYER_PROMPT: &str = "Second Player's name:";
const FAREWELL: &str = "Bye!";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game reached a win or a stalemate.
    Finished(GameResult),
    /// A player typed `exit`.
    Quit,
}

impl Outcome {
    /// Process exit code. Completion and quitting both exit with 1.
    #[inline]
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Finished(_) | Outcome::Quit => 1,
        }
    }
}

/// Where the session is between calls to [`Session::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Player names not collected yet.
    Setup,
    /// Waiting for a move from the given color.
    AwaitingInput(Color),
    Finished(Outcome),
}

/// Errors that end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read input: {0}")]
    Input(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("failed to update display: {0}")]
    Display(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("input ended before the game finished")]
    EndOfInput,
    #[error("board bookkeeping failed: {0}")]
    Board(#[from] BoardError),
}

/// Player names, fixed once entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Players {
    white: String,
    black: String,
}

impl Players {
    pub fn new(white: impl Into<String>, black: impl Into<String>) -> Self {
        Self {
            white: white.into(),
            black: black.into(),
        }
    }

    /// Name of the player who moves `color`.
    #[inline]
    pub fn name(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

/// A console game: reads lines from `I`, writes to `D`, and drives the
/// [`GameEngine`] through setup, turns, and the final result.
#[derive(Debug)]
pub struct Session<I, D> {
    input: I,
    display: D,
    engine: GameEngine,
    players: Players,
    phase: Phase,
}

impl<I: LineSource, D: GameDisplay> Session<I, D> {
    #[inline]
    pub fn new(input: I, display: D) -> Self {
        Self::with_engine(input, display, GameEngine::new())
    }

    /// Start from an existing engine, e.g. a custom layout.
    pub fn with_engine(input: I, display: D, engine: GameEngine) -> Self {
        Self {
            input,
            display,
            engine,
            players: Players::default(),
            phase: Phase::Setup,
        }
    }

    #[inline]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[inline]
    pub fn players(&self) -> &Players {
        &self.players
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_parts(self) -> (I, D, GameEngine) {
        (self.input, self.display, self.engine)
    }

    /// Play until the game ends or a player quits.
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        loop {
            if let Phase::Finished(outcome) = self.step()? {
                log::info!("session finished after {} turns: {outcome:?}", self.engine.turn() - 1);
                return Ok(outcome);
            }
        }
    }

    /// Advance one phase: collect names, or play one full turn.
    ///
    /// A turn re-prompts the same player until a legal move or `exit` is
    /// entered.
    pub fn step(&mut self) -> Result<Phase, SessionError> {
        self.phase = match self.phase {
            Phase::Setup => {
                self.register_players()?;
                self.show_board()?;
                self.enter_turn()?
            }
            Phase::AwaitingInput(color) => self.take_turn(color)?,
            finished @ Phase::Finished(_) => finished,
        };
        Ok(self.phase)
    }

    fn register_players(&mut self) -> Result<(), SessionError> {
        self.say(FIRST_PLAYER_PROMPT)?;
        let white = self.read_line()?;
        self.say(SECOND_PLAYER_PROMPT)?;
        let black = self.read_line()?;

        log::info!("new game: {white} (white) vs {black} (black)");
        self.players = Players::new(white, black);
        Ok(())
    }

    /// Check for stalemate before the color to move is prompted.
    fn enter_turn(&mut self) -> Result<Phase, SessionError> {
        if self.engine.is_stalemate() {
            return self.finish(GameResult::Stalemate);
        }
        Ok(Phase::AwaitingInput(self.engine.active_color()))
    }

    fn take_turn(&mut self, color: Color) -> Result<Phase, SessionError> {
        let prompt = format!("{}'s turn:", self.players.name(color));
        let mv = loop {
            self.say(&prompt)?;
            let line = self.read_line()?;

            let command = match line.parse::<Command>() {
                Ok(Command::Quit) => {
                    log::info!("{} player quit", color_name(&color));
                    self.say(FAREWELL)?;
                    return Ok(Phase::Finished(Outcome::Quit));
                }
                Ok(Command::Move(typed)) => self.engine.validate_input(typed),
                Err(e) => Err(e.into()),
            };

            match command {
                Ok(mv) => break mv,
                Err(reason) => {
                    log::debug!("rejected {line:?} from {}: {reason:?}", color_name(&color));
                    self.say(&reason.to_string())?;
                }
            }
        };

        self.engine.apply(mv)?;
        self.show_board()?;

        match self.engine.outcome() {
            Some(result) => self.finish(result),
            None => self.enter_turn(),
        }
    }

    fn finish(&mut self, result: GameResult) -> Result<Phase, SessionError> {
        self.say(&result.to_string())?;
        self.say(FAREWELL)?;
        Ok(Phase::Finished(Outcome::Finished(result)))
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        self.input
            .read_line()
            .map_err(|e| SessionError::Input(Box::new(e)))?
            .ok_or(SessionError::EndOfInput)
    }

    fn say(&mut self, message: &str) -> Result<(), SessionError> {
        self.display
            .show_message(message)
            .map_err(|e| SessionError::Display(Box::new(e)))
    }

    fn show_board(&mut self) -> Result<(), SessionError> {
        self.display
            .show_board(self.engine.board())
            .map_err(|e| SessionError::Display(Box::new(e)))
    }
}
