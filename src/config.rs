use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::board::Board;
use crate::game_logic::GameEngine;

/// Two-player pawns-only chess on the console.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Start from a custom layout instead of the standard position,
    /// e.g. "8/BBBBBBBB/8/8/8/8/WWWWWWWW/8".
    #[arg(long, value_name = "LAYOUT")]
    pub position: Option<Board>,
}

impl Config {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Engine for the configured start position, White to move.
    pub fn into_engine(self) -> GameEngine {
        self.position.map_or_else(GameEngine::new, GameEngine::from_board)
    }
}
