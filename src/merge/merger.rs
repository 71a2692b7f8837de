//! Merge orchestration.
//!
//! Drives scan → read → accumulate → write for one invocation. Inputs are
//! read strictly in order; a file that fails to load is recorded and skipped
//! so that one bad input never aborts the whole merge.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::{Config, OverwriteMode};
use crate::error::{MergeError, Result};
use crate::io::{LoadedPdf, PdfReader, PdfWriter, WriteOptions, WriteStatistics};
use crate::merge::confirm::ConfirmOverwrite;
use crate::merge::document::OutputDocument;
use crate::output::OutputFormatter;
use crate::walker::{self, FileList, InputFile};

/// What happened to one input file.
#[derive(Debug)]
pub enum FileStatus {
    /// All pages of the file were appended.
    Merged {
        /// Number of pages appended.
        pages: usize,
    },
    /// The file could not be read and was skipped.
    Failed {
        /// Why it was skipped.
        error: MergeError,
    },
}

/// Per-file result of a merge.
#[derive(Debug)]
pub struct FileOutcome {
    /// Path of the input file.
    pub path: PathBuf,

    /// Whether it was merged.
    pub status: FileStatus,
}

impl FileOutcome {
    /// True if the file's pages made it into the output.
    pub fn is_merged(&self) -> bool {
        matches!(self.status, FileStatus::Merged { .. })
    }
}

/// Result of a merge: one outcome per input, in merge order.
#[derive(Debug)]
pub struct MergeReport {
    /// Outcome of every attempted file.
    pub outcomes: Vec<FileOutcome>,

    /// Pages in the merged document.
    pub total_pages: usize,

    /// Where the merged document goes.
    pub output_path: PathBuf,

    /// Write statistics; `None` for a dry run.
    pub write: Option<WriteStatistics>,
}

impl MergeReport {
    /// Number of files whose pages were merged.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_merged()).count()
    }

    /// Number of files attempted.
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Files that were skipped, with the reason.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &MergeError)> {
        self.outcomes.iter().filter_map(|outcome| match &outcome.status {
            FileStatus::Failed { error } => Some((outcome.path.as_path(), error)),
            FileStatus::Merged { .. } => None,
        })
    }

    /// True if every attempted file was merged.
    pub fn is_complete(&self) -> bool {
        self.succeeded() == self.attempted()
    }
}

/// Result of merging a directory.
#[derive(Debug)]
pub enum MergeOutcome {
    /// The merged document was written.
    Merged(MergeReport),
    /// Inputs were read and reported; nothing was written.
    DryRun(MergeReport),
    /// The output existed and overwriting was declined; nothing was written.
    Cancelled {
        /// The output path that was left untouched.
        output: PathBuf,
    },
}

/// Sequential PDF merger.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    reader: PdfReader,
    writer: PdfWriter,
    formatter: OutputFormatter,
}

impl Merger {
    /// Create a merger with default reader, writer and formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a merger whose output and compression follow `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            reader: PdfReader::new(),
            writer: PdfWriter::with_options(WriteOptions {
                compression: config.compression,
                ..WriteOptions::default()
            }),
            formatter: OutputFormatter::from_config(config),
        }
    }

    /// Replace the progress formatter.
    pub fn with_formatter(mut self, formatter: OutputFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Replace the write options.
    pub fn with_write_options(mut self, options: WriteOptions) -> Self {
        self.writer = PdfWriter::with_options(options);
        self
    }

    /// Merge `files` in order and write the result to `output`.
    ///
    /// Every call starts from an empty document. Files that fail to load are
    /// recorded in the report and skipped.
    ///
    /// # Errors
    ///
    /// - [`MergeError::NothingMerged`] if no file could be read; nothing is
    ///   written in that case
    /// - [`MergeError::FailedToCreateOutput`] or [`MergeError::FailedToWrite`]
    ///   if the merged document cannot be saved
    pub fn merge(&self, files: &FileList, output: &Path) -> Result<MergeReport> {
        self.formatter
            .info(&format!("Starting to merge {} PDF files...", files.len()));

        let merge_start = Instant::now();
        let (document, outcomes) = self.collect(files);
        let total_pages = document.page_count();

        let succeeded = outcomes.iter().filter(|o| o.is_merged()).count();
        if succeeded == 0 {
            return Err(MergeError::NothingMerged {
                attempted: outcomes.len(),
            });
        }

        let mut merged = document.finish();
        let write = self.writer.save(&mut merged, output)?;

        self.formatter.blank_line();
        self.formatter.success("Merge completed successfully!");
        self.formatter.info(&format!(
            "Merged {succeeded} of {} PDF files ({total_pages} pages) into: {}",
            outcomes.len(),
            output.display()
        ));
        self.formatter.detail("Output size", &write.format_file_size());
        self.formatter.detail(
            "Merge time",
            &format!("{:.2}s", merge_start.elapsed().as_secs_f64()),
        );

        Ok(MergeReport {
            outcomes,
            total_pages,
            output_path: output.to_path_buf(),
            write: Some(write),
        })
    }

    /// Merge every PDF in `config.directory` into `config.output_path()`.
    ///
    /// The output file itself is never used as an input. If it already
    /// exists, `config.overwrite_mode` decides whether `confirm` is asked.
    ///
    /// # Errors
    ///
    /// Directory errors from [`walker::scan`], [`MergeError::OutputExists`]
    /// in no-clobber mode, and everything [`Merger::merge`] returns.
    pub fn merge_directory<C>(&self, config: &Config, confirm: &mut C) -> Result<MergeOutcome>
    where
        C: ConfirmOverwrite + ?Sized,
    {
        config.validate()?;

        let output = config.output_path();
        let files = walker::scan(&config.directory)?
            .without(&output)
            .ok_or_else(|| MergeError::NoPdfFiles {
                directory: config.directory.clone(),
            })?;

        self.formatter
            .info(&format!("Found {} PDF files to merge:", files.len()));
        for file in &files {
            self.formatter.list_item(&file.name());
        }
        self.formatter.blank_line();

        if config.dry_run {
            return self.plan(&files, &output).map(MergeOutcome::DryRun);
        }

        if output.try_exists()? {
            match config.overwrite_mode {
                OverwriteMode::Force => {}
                OverwriteMode::NoClobber => return Err(MergeError::output_exists(output)),
                OverwriteMode::Prompt => {
                    if !confirm.confirm_overwrite(&output)? {
                        self.formatter.info("Merge cancelled.");
                        return Ok(MergeOutcome::Cancelled { output });
                    }
                }
            }
        }

        self.merge(&files, &output).map(MergeOutcome::Merged)
    }

    /// Read every input and report what a merge would produce.
    ///
    /// Fails like [`Merger::merge`] when no input can be read.
    fn plan(&self, files: &FileList, output: &Path) -> Result<MergeReport> {
        let (document, outcomes) = self.collect(files);
        let total_pages = document.page_count();

        if !outcomes.iter().any(FileOutcome::is_merged) {
            return Err(MergeError::NothingMerged {
                attempted: outcomes.len(),
            });
        }

        self.formatter.blank_line();
        self.formatter.success("Dry run completed successfully");
        self.formatter.info(&format!(
            "  {total_pages} pages from {} of {} files would be written to: {}",
            outcomes.iter().filter(|o| o.is_merged()).count(),
            outcomes.len(),
            output.display()
        ));

        Ok(MergeReport {
            outcomes,
            total_pages,
            output_path: output.to_path_buf(),
            write: None,
        })
    }

    /// Load each file in order and append its pages to a fresh document.
    fn collect(&self, files: &FileList) -> (OutputDocument, Vec<FileOutcome>) {
        let mut document = OutputDocument::new();
        let mut outcomes = Vec::with_capacity(files.len());

        for (idx, file) in files.iter().enumerate() {
            self.formatter.info(&format!(
                "[{}/{}] Processing: {}",
                idx + 1,
                files.len(),
                file.name()
            ));

            let status = match self.reader.load(file.path()) {
                Ok(loaded) => {
                    let pages = self.append(&mut document, loaded);
                    self.formatter
                        .info(&format!("  Successfully processed {}", file.name()));
                    FileStatus::Merged { pages }
                }
                Err(error) => {
                    self.report_failure(file, &error);
                    FileStatus::Failed { error }
                }
            };

            outcomes.push(FileOutcome {
                path: file.path().to_path_buf(),
                status,
            });
        }

        (document, outcomes)
    }

    fn append(&self, document: &mut OutputDocument, loaded: LoadedPdf) -> usize {
        if self.formatter.is_verbose() {
            self.print_pdf_info(&loaded);
        }

        let first_page = document.page_count() + 1;
        let pages = document.append(loaded);
        for page in 0..pages {
            self.formatter.debug(&format!(
                "  Added page {} (output page {})",
                page + 1,
                first_page + page
            ));
        }
        pages
    }

    fn report_failure(&self, file: &InputFile, error: &MergeError) {
        self.formatter
            .warning(&format!("  Error processing {}: {error}", file.name()));
    }

    fn print_pdf_info(&self, loaded: &LoadedPdf) {
        self.formatter.detail("Version", &loaded.document.version);
        self.formatter
            .detail("Pages", &loaded.page_count.to_string());
        if let Some((width, height)) = loaded.first_page_size() {
            self.formatter
                .detail("Page size", &format!("{width:.1} x {height:.1} pts"));
        }
        self.formatter
            .detail("Objects", &loaded.document.objects.len().to_string());
        self.formatter.detail(
            "Load time",
            &format!("{:.3}s", loaded.load_time.as_secs_f64()),
        );
    }
}
