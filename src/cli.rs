//! CLI argument parsing for pdfmerge.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! let config = cli.to_config().expect("invalid arguments");
//! println!("Merging PDFs in {}", config.directory.display());
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{CompressionLevel, Config, DEFAULT_OUTPUT_NAME, OverwriteMode};
use crate::error::Result;

/// Merge all PDF files in a directory into a single PDF file.
///
/// Files are merged in byte order of their names. Files that cannot be read
/// are skipped with a warning.
#[derive(Parser, Debug)]
#[command(name = "pdfmerge")]
#[command(version)]
#[command(about = "Merge all PDF files in a directory into a single PDF file", long_about = None)]
#[command(after_help = "Examples:\n  \
    pdfmerge /path/to/pdfs\n  \
    pdfmerge /path/to/pdfs -o combined.pdf\n  \
    pdfmerge . -o report")]
pub struct Cli {
    /// Directory containing PDF files to merge
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Output file name for the merged PDF, created inside DIRECTORY
    ///
    /// A missing .pdf extension is added.
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_OUTPUT_NAME)]
    pub output: String,

    /// Overwrite an existing output file without confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Never overwrite an existing output file
    #[arg(long, conflicts_with = "force")]
    pub no_clobber: bool,

    /// Read and report every input without writing the output
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show every added page and details about each input
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print warnings and errors
    ///
    /// An existing output file is never overwritten in quiet mode unless
    /// --force is given.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Compression level for the output PDF
    #[arg(short, long, value_name = "LEVEL", default_value = "standard")]
    #[arg(value_parser = ["none", "standard", "maximum"])]
    pub compression: String,
}

impl Cli {
    /// Convert CLI arguments into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::MergeError::InvalidConfig`] if the compression level
    /// is unknown or the output name is a path.
    pub fn to_config(&self) -> Result<Config> {
        let compression = CompressionLevel::from_str(&self.compression)?;

        // Nobody is there to answer a prompt in quiet mode.
        let overwrite_mode = if self.force {
            OverwriteMode::Force
        } else if self.no_clobber || self.quiet {
            OverwriteMode::NoClobber
        } else {
            OverwriteMode::Prompt
        };

        let config = Config {
            directory: self.directory.clone(),
            output_name: Some(self.output.clone()),
            overwrite_mode,
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
            compression,
        };

        config.validate()?;
        Ok(config)
    }
}
