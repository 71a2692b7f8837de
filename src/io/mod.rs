//! PDF library adapter.
//!
//! All knowledge of the PDF format lives in `lopdf`; this module only loads
//! documents, hands out their pages and writes finished documents back out.

pub mod reader;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_pdf;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics, format_file_size};
