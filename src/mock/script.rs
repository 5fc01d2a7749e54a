use std::collections::VecDeque;
use std::convert::Infallible;

use crate::LineSource;

/// A scriptable line source that replays queued player input.
///
/// Returns lines in order and reports end of input once the queue is
/// empty. New lines can be appended at any time.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<String>,
}

impl ScriptedInput {
    /// Create with the given lines queued.
    pub fn new<L>(lines: impl IntoIterator<Item = L>) -> Self
    where
        L: Into<String>,
    {
        Self {
            pending: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Queue the lines of a multi-line script.
    ///
    /// Each line is trimmed. Blank lines and lines starting with `#` are
    /// skipped, so scripts can be written as indented string literals:
    ///
    /// ```text
    /// Alice
    /// Bob
    /// # opening
    /// e2e4
    /// ```
    pub fn push_script(&mut self, script: &str) {
        self.pending.extend(
            script
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_owned),
        );
    }

    /// Queue a single line verbatim.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.pending.push_back(line.into());
    }

    /// Lines not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl LineSource for ScriptedInput {
    type Error = Infallible;

    fn read_line(&mut self) -> Result<Option<String>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}
