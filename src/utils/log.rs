//! Append-only message log.
//!
//! Logging never fails from the caller's point of view: write errors are
//! reported on stderr and dropped.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Log file written by [`log_message`], in the crate directory.
pub const LOG_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/log.txt");

/// Append `message` and a newline to [`LOG_FILE`].
pub fn log_message(message: &str) {
    log_message_to(Path::new(LOG_FILE), message);
}

/// Append `message` and a newline to the file at `path`, creating it if
/// needed.
pub fn log_message_to(path: &Path, message: &str) {
    if let Err(err) = append_line(path, message) {
        eprintln!("Error writing to log file {}: {err}", path.display());
    }
}

fn append_line(path: &Path, message: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{message}")
}
