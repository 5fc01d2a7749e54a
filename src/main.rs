use std::process::ExitCode;

use clap::Parser;
use pawn_duel::config::Config;
use pawn_duel::session::Session;
use pawn_duel::terminal::{ConsoleDisplay, ConsoleInput};

fn main() -> ExitCode {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .init();
    log::info!("Pawn Duel");

    let engine = config.into_engine();
    let mut session = Session::with_engine(ConsoleInput::stdin(), ConsoleDisplay::stdout(), engine);

    match session.run() {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            log::error!("session aborted: {e:?}");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
