//! User-facing progress output.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};
