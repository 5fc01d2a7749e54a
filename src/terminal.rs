use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::{GameDisplay, LineSource};

/// Error type for console operations.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("failed to read from terminal: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write to terminal: {0}")]
    Write(#[from] io::Error),
}

/// Line source reading player input from any buffered reader.
#[derive(Debug)]
pub struct ConsoleInput<R> {
    reader: R,
}

impl ConsoleInput<io::StdinLock<'static>> {
    /// Read from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ConsoleInput<R> {
    type Error = ConsoleError;

    fn read_line(&mut self) -> Result<Option<String>, Self::Error> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(ConsoleError::Read)?;
        if read == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Undecodable bytes become U+FFFD and fail move parsing like any typo.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Terminal display writing prompts and the board grid as plain text.
#[derive(Debug)]
pub struct ConsoleDisplay<W> {
    writer: W,
}

impl ConsoleDisplay<io::Stdout> {
    /// Write to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GameDisplay for ConsoleDisplay<W> {
    type Error = ConsoleError;

    fn show_message(&mut self, message: &str) -> Result<(), Self::Error> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn show_board(&mut self, board: &Board) -> Result<(), Self::Error> {
        write!(self.writer, "{board}")?;
        self.writer.flush()?;
        Ok(())
    }
}
