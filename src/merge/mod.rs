//! Merge orchestration.
//!
//! - [`document`]: the accumulating output document
//! - [`confirm`]: the overwrite confirmation capability
//! - [`merger`]: the sequential scan → read → accumulate → write driver

pub mod confirm;
pub mod document;
pub mod merger;

pub use confirm::{ConfirmOverwrite, ConsolePrompt};
pub use document::OutputDocument;
pub use merger::{FileOutcome, FileStatus, MergeOutcome, MergeReport, Merger};

use crate::config::Config;
use crate::error::Result;

/// Merge every PDF in `config.directory`, reporting progress according to
/// `config` and asking `confirm` before overwriting an existing output.
///
/// # Examples
///
/// ```no_run
/// use pdfmerge::config::Config;
/// use pdfmerge::merge::{self, MergeOutcome};
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::new("scans").with_output_name("all");
/// match merge::merge_directory(&config, &mut |_: &Path| true)? {
///     MergeOutcome::Merged(report) => {
///         println!("{} of {} files merged", report.succeeded(), report.attempted())
///     }
///     MergeOutcome::DryRun(_) | MergeOutcome::Cancelled { .. } => {}
/// }
/// # Ok(())
/// # }
/// ```
pub fn merge_directory<C>(config: &Config, confirm: &mut C) -> Result<MergeOutcome>
where
    C: ConfirmOverwrite + ?Sized,
{
    Merger::from_config(config).merge_directory(config, confirm)
}
