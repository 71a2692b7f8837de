//! Overwrite confirmation.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::{MergeError, Result};

/// Asks whether an existing output file may be replaced.
pub trait ConfirmOverwrite {
    /// Return `true` to overwrite `path`, `false` to cancel the merge.
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool>;
}

impl<F> ConfirmOverwrite for F
where
    F: FnMut(&Path) -> bool,
{
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        Ok(self(path))
    }
}

/// Interactive yes/no prompt on the terminal.
///
/// Anything other than `y` or `yes` (in any case) declines.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout and read the answer from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    /// Prompt on `output` and read the answer from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ConfirmOverwrite for ConsolePrompt<R, W> {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        write!(
            self.output,
            "Output file '{}' already exists. Overwrite? [y/N]: ",
            path.display()
        )
        .and_then(|()| self.output.flush())
        .map_err(|source| MergeError::Prompt { source })?;

        let mut response = String::new();
        self.input
            .read_line(&mut response)
            .map_err(|source| MergeError::Prompt { source })?;

        let response = response.trim().to_lowercase();
        Ok(response == "y" || response == "yes")
    }
}
