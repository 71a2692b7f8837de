//! The merged output document.
//!
//! Pages are appended source by source. Each source document is renumbered
//! past the ids already in use, its objects are moved in, and its pages are
//! re-parented under a single fresh page tree root. The source catalog and
//! page tree nodes are left behind.

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::io::LoadedPdf;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic `Parent` chains in malformed files.
const MAX_TREE_DEPTH: usize = 64;

/// In-memory accumulation of pages destined for the merged output.
#[derive(Debug)]
pub struct OutputDocument {
    document: Document,
    pages_id: ObjectId,
    kids: Vec<ObjectId>,
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputDocument {
    /// Create an empty output document.
    pub fn new() -> Self {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        Self {
            document,
            pages_id,
            kids: Vec::new(),
        }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Append every page of `source`, in page order.
    ///
    /// Returns the number of pages appended.
    pub fn append(&mut self, source: LoadedPdf) -> usize {
        let mut doc = source.document;

        doc.renumber_objects_with(self.document.max_id + 1);

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        let inherited: Vec<(ObjectId, Vec<(Vec<u8>, Object)>)> = page_ids
            .iter()
            .map(|&id| (id, inherited_attributes(&doc, id)))
            .collect();

        if doc.version > self.document.version {
            self.document.version = doc.version.clone();
        }
        self.document.max_id = self.document.max_id.max(doc.max_id);

        for (id, object) in doc.objects {
            if !is_tree_node(&object) {
                self.document.objects.insert(id, object);
            }
        }

        for (page_id, attributes) in inherited {
            if let Ok(page) = self
                .document
                .get_object_mut(page_id)
                .and_then(Object::as_dict_mut)
            {
                for (key, value) in attributes {
                    page.set(key, value);
                }
                page.set("Parent", Object::Reference(self.pages_id));
            }
            self.kids.push(page_id);
        }

        page_ids.len()
    }

    /// Close the page tree and catalog, yielding a document ready to save.
    pub fn finish(mut self) -> Document {
        let count = self.kids.len() as i64;
        let kids: Vec<Object> = self.kids.into_iter().map(Object::Reference).collect();

        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Kids", Object::Array(kids));
        pages.set("Count", Object::Integer(count));
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(self.pages_id));
        let catalog_id = self.document.add_object(Object::Dictionary(catalog));
        self.document.trailer.set("Root", Object::Reference(catalog_id));

        self.document.renumber_objects();
        self.document
    }
}

/// Catalog and intermediate page tree nodes of a source document.
fn is_tree_node(object: &Object) -> bool {
    let Ok(dict) = object.as_dict() else {
        return false;
    };
    matches!(
        dict.get(b"Type").and_then(Object::as_name),
        Ok(b"Catalog") | Ok(b"Pages")
    )
}

/// Attributes the page does not set itself but inherits from an ancestor.
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(Vec<u8>, Object)> {
    let Ok(page) = doc.get_object(page_id).and_then(Object::as_dict) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for key in INHERITABLE {
        if page.has(key) {
            continue;
        }

        let mut node = page;
        for _ in 0..MAX_TREE_DEPTH {
            let Ok(parent) = node
                .get(b"Parent")
                .and_then(Object::as_reference)
                .and_then(|id| doc.get_object(id))
                .and_then(Object::as_dict)
            else {
                break;
            };
            if let Ok(value) = parent.get(key) {
                found.push((key.to_vec(), value.clone()));
                break;
            }
            node = parent;
        }
    }

    found
}
