//! Shared helpers for the integration tests.
//!
//! Test PDFs are generated on the fly with `lopdf`. Every page carries a
//! `PdfMergeTag` string so tests can check the page order of a merged file.

use lopdf::{
    Document, EncryptionState, EncryptionVersion, Object, Permissions, Stream, dictionary,
};
use pdfmerge::config::Config;
use pdfmerge::merge::{MergeOutcome, MergeReport, Merger};
use pdfmerge::output::OutputFormatter;
use std::path::Path;

const TAG_KEY: &[u8] = b"PdfMergeTag";

/// Write a PDF with `pages` pages tagged `"{label}-1"` to `"{label}-{pages}"`.
pub fn create_test_pdf(path: &Path, label: &str, pages: u32) {
    let mut doc = build_test_pdf(label, pages);
    doc.save(path)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", path.display()));
}

fn build_test_pdf(label: &str, pages: u32) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for index in 1..=pages {
        let content_id = doc.add_object(Stream::new(dictionary! {}, b"q Q".to_vec()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            TAG_KEY => Object::string_literal(format!("{label}-{index}")),
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Write a one-page PDF that opens only with `user_password`.
pub fn create_locked_pdf(path: &Path, label: &str, user_password: &str) {
    let mut doc = build_test_pdf(label, 1);
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(b"pdfmerge-it-id".to_vec()),
            Object::string_literal(b"pdfmerge-it-id".to_vec()),
        ],
    );

    let state = EncryptionState::try_from(EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    })
    .expect("failed to derive encryption state");
    doc.encrypt(&state).expect("failed to encrypt test pdf");
    doc.save(path)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", path.display()));
}

/// Write bytes that are not a PDF.
pub fn create_corrupt_pdf(path: &Path) {
    std::fs::write(path, b"definitely not a pdf").expect("failed to write corrupt file");
}

/// Page tags of the PDF at `path`, in page order.
pub fn page_tags(path: &Path) -> Vec<String> {
    let doc = Document::load(path)
        .unwrap_or_else(|err| panic!("failed to load {}: {err}", path.display()));
    doc.get_pages()
        .into_values()
        .filter_map(|id| doc.get_object(id).and_then(Object::as_dict).ok())
        .filter_map(|page| page.get(TAG_KEY).and_then(Object::as_str).ok())
        .map(|tag| String::from_utf8_lossy(tag).into_owned())
        .collect()
}

/// A merger that prints nothing but warnings and errors.
pub fn quiet_merger() -> Merger {
    Merger::new().with_formatter(OutputFormatter::quiet())
}

/// Merge `config.directory`, answering every overwrite prompt with `answer`.
pub fn merge_answering(config: &Config, answer: bool) -> pdfmerge::Result<MergeOutcome> {
    quiet_merger().merge_directory(config, &mut |_: &Path| answer)
}

/// Unwrap a [`MergeOutcome::Merged`] report.
pub fn expect_merged(outcome: MergeOutcome) -> MergeReport {
    match outcome {
        MergeOutcome::Merged(report) => report,
        other => panic!("expected a merged outcome, got {other:?}"),
    }
}
