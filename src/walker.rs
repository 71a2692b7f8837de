//! Directory scanning.
//!
//! Finds the PDF files directly inside a directory and puts them in merge
//! order.

use globset::{GlobBuilder, GlobMatcher};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{MergeError, Result};

/// A PDF file discovered in the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    path: PathBuf,
}

impl InputFile {
    /// Path to the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, falling back to the full path.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Non-empty list of input files in merge order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    files: Vec<InputFile>,
}

impl FileList {
    /// Build a list from paths, sorted by their byte representation.
    ///
    /// Returns `None` when `paths` is empty.
    pub fn from_paths(paths: Vec<PathBuf>) -> Option<Self> {
        if paths.is_empty() {
            return None;
        }

        let mut files: Vec<InputFile> = paths.into_iter().map(|path| InputFile { path }).collect();
        files.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));

        Some(Self { files })
    }

    /// Drop `path` from the list, if present.
    ///
    /// Returns `None` if nothing would be left.
    pub fn without(self, path: &Path) -> Option<Self> {
        let files: Vec<InputFile> = self
            .files
            .into_iter()
            .filter(|file| file.path != path)
            .collect();

        if files.is_empty() {
            None
        } else {
            Some(Self { files })
        }
    }

    /// Number of files, always at least one.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over the files in merge order.
    pub fn iter(&self) -> std::slice::Iter<'_, InputFile> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a InputFile;
    type IntoIter = std::slice::Iter<'a, InputFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Scan `directory` for PDF files.
///
/// Only entries directly inside the directory are considered. An entry
/// qualifies when its name ends with `.pdf` in any case and it is a regular
/// file, or a symlink to one. The result is sorted by path bytes.
///
/// # Errors
///
/// - [`MergeError::NotFound`] if `directory` does not exist
/// - [`MergeError::NotADirectory`] if it is not a directory
/// - [`MergeError::NoPdfFiles`] if no entry qualifies
pub fn scan(directory: &Path) -> Result<FileList> {
    if !directory.try_exists()? {
        return Err(MergeError::NotFound {
            path: directory.to_path_buf(),
        });
    }

    if !directory.is_dir() {
        return Err(MergeError::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    let matcher = pdf_matcher()?;
    let mut paths = Vec::new();

    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            // An unreadable entry is not a regular PDF file.
            Err(err) if err.depth() > 0 => continue,
            Err(err) => return Err(walk_error(err)),
        };

        if matcher.is_match(entry.file_name()) && is_regular_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    FileList::from_paths(paths).ok_or_else(|| MergeError::NoPdfFiles {
        directory: directory.to_path_buf(),
    })
}

fn pdf_matcher() -> Result<GlobMatcher> {
    let glob = GlobBuilder::new("*.pdf")
        .case_insensitive(true)
        .literal_separator(true)
        .build()
        .map_err(|err| MergeError::invalid_config(err.to_string()))?;
    Ok(glob.compile_matcher())
}

/// Follows symlinks. Dangling links, loops and targets that cannot be
/// stat'ed are not regular files.
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

fn walk_error(err: walkdir::Error) -> MergeError {
    let message = err.to_string();
    match err.into_io_error() {
        Some(source) => MergeError::Io { source },
        None => MergeError::Io {
            source: io::Error::other(message),
        },
    }
}
