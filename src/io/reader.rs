//! PDF reading.
//!
//! Wraps `lopdf` loading and maps its failures onto [`MergeError`] so that a
//! bad input can be recorded against its path.

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{MergeError, Result};

/// A loaded PDF document with some facts about it.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,
}

impl LoadedPdf {
    /// Width and height of the first page in points, when it carries its
    /// own MediaBox.
    pub fn first_page_size(&self) -> Option<(f32, f32)> {
        let (_, page_id) = self.document.get_pages().into_iter().next()?;
        let page = self.document.get_object(page_id).and_then(|o| o.as_dict()).ok()?;
        let mediabox = page.get(b"MediaBox").and_then(|o| o.as_array()).ok()?;
        if mediabox.len() < 4 {
            return None;
        }
        let width = mediabox[2].as_float().ok()?;
        let height = mediabox[3].as_float().ok()?;
        Some((width, height))
    }
}

/// Loads PDF files from disk.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::EncryptedPdf`] when the document needs a
    /// password it was not given, and [`MergeError::FailedToLoadPdf`]
    /// for anything else (unreadable file, bad header, broken xref, ...).
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let start = Instant::now();

        let document = Document::load(path).map_err(|err| {
            let reason = err.to_string();
            let lowered = reason.to_lowercase();
            if lowered.contains("encrypt") || lowered.contains("password") {
                MergeError::encrypted_pdf(path.to_path_buf())
            } else {
                MergeError::failed_to_load_pdf(path.to_path_buf(), reason)
            }
        })?;

        // lopdf keeps a document it cannot decrypt, minus its pages.
        if document.is_encrypted() && document.encryption_state.is_none() {
            return Err(MergeError::encrypted_pdf(path.to_path_buf()));
        }

        let page_count = document.get_pages().len();

        Ok(LoadedPdf {
            document,
            path: path.to_path_buf(),
            page_count,
            load_time: start.elapsed(),
        })
    }
}
