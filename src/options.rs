use bson::{Bson, Document};

pub(crate) const ENCRYPTED_FIELDS: &str = "encryptedFields";

/// Options for creating a collection: an open mapping of create-command
/// options, possibly mixed with client-only fields that never reach the
/// wire (those are filtered at command-build time).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCollectionOptions {
    doc: Document,
}

impl CreateCollectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an arbitrary option key.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.doc.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn capped(self, size_bytes: i64) -> Self {
        self.set("capped", true).set("size", size_bytes)
    }

    #[must_use]
    pub fn clustered_index(self, index: Document) -> Self {
        self.set("clusteredIndex", index)
    }

    #[must_use]
    pub fn encrypted_fields(self, fields: Document) -> Self {
        self.set(ENCRYPTED_FIELDS, fields)
    }

    pub fn get(&self, key: &str) -> Option<&Bson> {
        self.doc.get(key)
    }

    /// The `encryptedFields` metadata, if present in these options.
    pub fn encrypted_fields_doc(&self) -> Option<&Document> {
        self.doc.get(ENCRYPTED_FIELDS).and_then(Bson::as_document)
    }

    /// Returns a copy of these options guaranteed to carry `encryptedFields`.
    /// The receiver is never modified; if it already carries the metadata the
    /// copy is identical.
    #[must_use]
    pub(crate) fn with_encrypted_fields(&self, fields: &Document) -> Self {
        let mut merged = self.clone();
        if merged.encrypted_fields_doc().is_none() {
            merged.doc.insert(ENCRYPTED_FIELDS, fields.clone());
        }
        merged
    }

    pub(crate) fn as_document(&self) -> &Document {
        &self.doc
    }
}
