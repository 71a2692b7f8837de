//! pdfmerge - merge every PDF file in a directory into a single document.
//!
//! The library scans a directory for `.pdf` files, sorts them by name, loads
//! each one with `lopdf` and appends its pages to a fresh output document,
//! which is then written next to the inputs. Files that cannot be read are
//! skipped and reported rather than aborting the merge.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::config::{Config, OverwriteMode};
//! use pdfmerge::merge::{self, MergeOutcome};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new("invoices")
//!     .with_output_name("all-invoices")
//!     .with_overwrite_mode(OverwriteMode::Force);
//!
//! if let MergeOutcome::Merged(report) = merge::merge_directory(&config, &mut |_: &Path| true)? {
//!     for (path, error) in report.failures() {
//!         eprintln!("skipped {}: {error}", path.display());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The [`utils`] module carries a few unrelated helpers (email validation,
//! password checks, file logging).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod utils;
pub mod walker;

pub use config::Config;
pub use error::{MergeError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
