//! Error types for pdfmerge.
//!
//! Errors fall into three groups:
//!
//! - **Directory errors**: the input directory is missing, is not a directory,
//!   or holds no PDF files. These abort before any PDF is read.
//! - **Per-file errors**: one input could not be loaded. These are recorded
//!   against the file and the merge carries on with the rest.
//! - **Output errors**: the merged document could not be written. These are
//!   fatal for the whole operation.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfmerge operations.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Main error type for pdfmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The input directory does not exist.
    #[error("Directory not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The input path exists but is not a directory.
    #[error("Path is not a directory: {}", path.display())]
    NotADirectory {
        /// Offending path.
        path: PathBuf,
    },

    /// The directory holds no `.pdf` files.
    #[error("No PDF files found in directory: {}", directory.display())]
    NoPdfFiles {
        /// Directory that was scanned.
        directory: PathBuf,
    },

    /// A PDF could not be parsed.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason reported by the PDF library.
        reason: String,
    },

    /// A PDF is encrypted and could not be opened.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// Every input failed to load, so there is nothing to write.
    #[error("None of the {attempted} PDF file(s) could be read; no output was written")]
    NothingMerged {
        /// Number of files that were attempted.
        attempted: usize,
    },

    /// Output file already exists and overwriting is not allowed.
    #[error(
        "Output file already exists: {}\n  \
         Use --force to overwrite or choose a different output name",
        path.display()
    )]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// The output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Serializing the merged document failed.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading the answer to the overwrite prompt failed.
    #[error("Failed to read confirmation: {source}")]
    Prompt {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// The user interrupted the run.
    #[error("Merge cancelled by user")]
    Interrupted,

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

impl MergeError {
    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check if this error only affects a single input file.
    ///
    /// Recoverable errors are recorded against the file and the merge
    /// continues with the remaining inputs.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FailedToLoadPdf { .. } | Self::EncryptedPdf { .. }
        )
    }

    /// Check if this error came from writing the merged output.
    pub fn is_write_error(&self) -> bool {
        matches!(
            self,
            Self::FailedToCreateOutput { .. } | Self::FailedToWrite { .. }
        )
    }
}
