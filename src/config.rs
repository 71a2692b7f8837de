//! Configuration module for pdfmerge.
//!
//! The CLI arguments are turned into a [`Config`] that drives a single
//! directory merge. This module owns the defaults and the derivation of the
//! output path from the input directory and the requested file name.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{MergeError, Result};

/// Output file name used when none is given.
pub const DEFAULT_OUTPUT_NAME: &str = "merged_pdfs.pdf";

/// Extension every output file name ends with.
const PDF_SUFFIX: &str = ".pdf";

/// Compression level for the output PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// No compression - streams are written as read.
    None,
    /// Compress uncompressed streams.
    #[default]
    Standard,
    /// Compress streams and drop objects nothing refers to.
    Maximum,
}

impl FromStr for CompressionLevel {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "maximum" => Ok(Self::Maximum),
            _ => Err(MergeError::invalid_config(format!(
                "Invalid compression level: {s}. Must be one of: none, standard, maximum"
            ))),
        }
    }
}

/// What to do when the output file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Ask for confirmation before overwriting.
    #[default]
    Prompt,
    /// Overwrite without asking.
    Force,
    /// Never overwrite; fail instead.
    NoClobber,
}

/// Settings for one directory merge.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose PDF files are merged.
    pub directory: PathBuf,

    /// Requested output file name, relative to `directory`.
    pub output_name: Option<String>,

    /// Behaviour when the output already exists.
    pub overwrite_mode: OverwriteMode,

    /// Read every input and report, but write nothing.
    pub dry_run: bool,

    /// Show per-page progress and file details.
    pub verbose: bool,

    /// Suppress all non-error output.
    pub quiet: bool,

    /// Compression applied to the merged document.
    pub compression: CompressionLevel,
}

impl Config {
    /// Create a configuration for `directory` with every other setting at
    /// its default.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            output_name: None,
            overwrite_mode: OverwriteMode::default(),
            dry_run: false,
            verbose: false,
            quiet: false,
            compression: CompressionLevel::default(),
        }
    }

    /// Set the requested output file name.
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    /// Set the overwrite mode.
    pub fn with_overwrite_mode(mut self, mode: OverwriteMode) -> Self {
        self.overwrite_mode = mode;
        self
    }

    /// The normalized output file name.
    pub fn output_file_name(&self) -> String {
        normalize_output_name(self.output_name.as_deref())
    }

    /// The full path the merged document is written to.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfmerge::config::Config;
    /// use std::path::Path;
    ///
    /// let config = Config::new("docs").with_output_name("report");
    /// assert_eq!(config.output_path(), Path::new("docs/report.pdf"));
    /// ```
    pub fn output_path(&self) -> PathBuf {
        self.directory.join(self.output_file_name())
    }

    /// Check that the settings can be acted on.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::InvalidConfig`] if the output name is a path
    /// rather than a plain file name, or if quiet and verbose are both set.
    pub fn validate(&self) -> Result<()> {
        if self.quiet && self.verbose {
            return Err(MergeError::invalid_config(
                "Cannot be both quiet and verbose",
            ));
        }

        let name = self.output_file_name();
        let as_path = Path::new(&name);
        if as_path.file_name().map(|f| f != as_path.as_os_str()).unwrap_or(true) {
            return Err(MergeError::invalid_config(format!(
                "Output name must be a file name, not a path: {name}"
            )));
        }

        Ok(())
    }
}

/// Normalize a requested output name.
///
/// A missing or blank name becomes [`DEFAULT_OUTPUT_NAME`]. A name that does
/// not already end with `.pdf` (in any case) gets `.pdf` appended.
///
/// # Examples
///
/// ```
/// use pdfmerge::config::normalize_output_name;
///
/// assert_eq!(normalize_output_name(None), "merged_pdfs.pdf");
/// assert_eq!(normalize_output_name(Some("report")), "report.pdf");
/// assert_eq!(normalize_output_name(Some("report.PDF")), "report.PDF");
/// ```
pub fn normalize_output_name(name: Option<&str>) -> String {
    let name = match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return DEFAULT_OUTPUT_NAME.to_string(),
    };

    if has_pdf_suffix(name) {
        name.to_string()
    } else {
        format!("{name}{PDF_SUFFIX}")
    }
}

/// Case-insensitive check for a trailing `.pdf`.
pub(crate) fn has_pdf_suffix(name: &str) -> bool {
    name.len() >= PDF_SUFFIX.len()
        && name.is_char_boundary(name.len() - PDF_SUFFIX.len())
        && name[name.len() - PDF_SUFFIX.len()..].eq_ignore_ascii_case(PDF_SUFFIX)
}
