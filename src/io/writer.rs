//! PDF writing.
//!
//! Serializes a finished document to disk. By default the bytes go to a
//! hidden temporary file next to the target, which is then renamed over the
//! target, so an interrupted or failed write never leaves a half-written
//! output behind.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::io::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(mut doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let stats = PdfWriter::new().save(&mut doc, Path::new("merged.pdf"))?;
//! println!("Wrote {}", stats.format_file_size());
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::CompressionLevel;
use crate::error::{MergeError, Result};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Write to a temporary sibling and rename it into place.
    pub atomic: bool,

    /// Compression applied before serializing.
    pub compression: CompressionLevel,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compression: CompressionLevel::Standard,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Save `doc` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::FailedToCreateOutput`] if the file cannot be
    /// created and [`MergeError::FailedToWrite`] if serializing, flushing or
    /// renaming it fails.
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        match self.options.compression {
            CompressionLevel::None => {}
            CompressionLevel::Standard => doc.compress(),
            CompressionLevel::Maximum => {
                doc.prune_objects();
                doc.compress();
            }
        }

        if self.options.atomic {
            let temp_path = temp_path_for(path);
            if let Err(err) = self.write_to(doc, &temp_path, path) {
                let _ = fs::remove_file(&temp_path);
                return Err(err);
            }
            if let Err(source) = fs::rename(&temp_path, path) {
                let _ = fs::remove_file(&temp_path);
                return Err(MergeError::FailedToWrite {
                    path: path.to_path_buf(),
                    source,
                });
            }
        } else {
            self.write_to(doc, path, path)?;
        }

        let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: path.to_path_buf(),
        })
    }

    /// Serialize `doc` into `file`. Errors name `target`, the path the
    /// user asked for.
    fn write_to(&self, doc: &mut Document, file: &Path, target: &Path) -> Result<()> {
        let handle = File::create(file).map_err(|source| MergeError::FailedToCreateOutput {
            path: target.to_path_buf(),
            source,
        })?;

        let mut writer = BufWriter::with_capacity(self.options.buffer_size, handle);

        doc.save_to(&mut writer)
            .map_err(|err| MergeError::FailedToWrite {
                path: target.to_path_buf(),
                source: std::io::Error::other(err.to_string()),
            })?;

        writer.flush().map_err(|source| MergeError::FailedToWrite {
            path: target.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

/// Hidden sibling used for atomic writes: `dir/.name.partial`.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{name}.partial"))
}

/// Format a byte count as a human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
