//! Minimal PDF generation for unit tests.

use lopdf::{
    Document, EncryptionState, EncryptionVersion, Object, Permissions, Stream, dictionary,
};
use std::path::Path;

/// Custom page key carrying `"{label}-{index}"`, used to check page order
/// after a merge.
pub(crate) const TAG_KEY: &[u8] = b"PdfMergeTag";

/// Build an in-memory document with `pages` pages tagged `label-1..=pages`.
pub(crate) fn build_test_pdf(label: &str, pages: u32) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let resources_id = doc.add_object(dictionary! {
        "ProcSet" => vec![Object::Name(b"PDF".to_vec())],
    });

    let mut kids = Vec::new();
    for index in 1..=pages {
        let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            "Resources" => resources_id,
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

/// Write a test document to `path`.
pub(crate) fn write_test_pdf(path: &Path, label: &str, pages: u32) -> anyhow::Result<()> {
    let mut doc = build_test_pdf(label, pages);
    doc.save(path)?;
    Ok(())
}

/// Write a one-page document encrypted with `user_password`.
///
/// An empty user password gives a file any reader can open.
pub(crate) fn write_locked_pdf(path: &Path, label: &str, user_password: &str) -> anyhow::Result<()> {
    let mut doc = build_test_pdf(label, 1);
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(b"pdfmerge-test-id".to_vec()),
            Object::string_literal(b"pdfmerge-test-id".to_vec()),
        ],
    );

    let state = EncryptionState::try_from(EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    })?;
    doc.encrypt(&state)?;
    doc.save(path)?;
    Ok(())
}

/// Read the tags of every page in `doc`, in page order.
pub(crate) fn page_tags(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .into_values()
        .filter_map(|id| doc.get_object(id).and_then(Object::as_dict).ok())
        .filter_map(|page| page.get(TAG_KEY).and_then(Object::as_str).ok())
        .map(|tag| String::from_utf8_lossy(tag).into_owned())
        .collect()
}
