use std::collections::HashMap;

use bson::{Bson, Document, doc};

use crate::options::CreateCollectionOptions;
use crate::types::Namespace;

/// Field the supporting index is built on after an encrypted collection is
/// created.
pub const SAFE_CONTENT_FIELD: &str = "__safeContent__";

/// Auto-encryption configuration registered on the client at startup.
///
/// The creation path only ever reads this; it is initialized externally and
/// never mutated by an in-flight operation.
#[derive(Debug, Clone, Default)]
pub struct AutoEncryptionOptions {
    /// Maps `<database>.<collection>` to that namespace's `encryptedFields`
    /// document.
    pub encrypted_fields_map: HashMap<String, Document>,
}

impl AutoEncryptionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn encrypted_fields(mut self, namespace: impl Into<String>, fields: Document) -> Self {
        self.encrypted_fields_map.insert(namespace.into(), fields);
        self
    }

    pub fn encrypted_fields_for(&self, namespace: &Namespace) -> Option<&Document> {
        self.encrypted_fields_map.get(&namespace.to_string())
    }
}

/// The three auxiliary state collections backing one encrypted collection,
/// in creation order: esc, ecc, ecoc. Each name can be overridden by the
/// metadata; otherwise the fixed `enxcol_` templates apply.
pub(crate) fn auxiliary_collection_names(encrypted_fields: &Document, name: &str) -> [String; 3] {
    [
        override_or_template(encrypted_fields, "escCollection", name, "esc"),
        override_or_template(encrypted_fields, "eccCollection", name, "ecc"),
        override_or_template(encrypted_fields, "ecocCollection", name, "ecoc"),
    ]
}

fn override_or_template(fields: &Document, key: &str, name: &str, suffix: &str) -> String {
    match fields.get(key).and_then(Bson::as_str) {
        Some(explicit) => explicit.to_string(),
        None => format!("enxcol_.{name}.{suffix}"),
    }
}

/// Forced options for auxiliary collections: clustered by `_id`, unique.
/// The primary collection's own options never leak into these.
pub(crate) fn auxiliary_collection_options() -> CreateCollectionOptions {
    CreateCollectionOptions::new().clustered_index(doc! { "key": { "_id": 1 }, "unique": true })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auxiliary_names_follow_templates() {
        let names = auxiliary_collection_names(&doc! { "fields": [] }, "orders");
        assert_eq!(
            names,
            ["enxcol_.orders.esc".to_string(), "enxcol_.orders.ecc".into(), "enxcol_.orders.ecoc".into()]
        );
    }

    #[test]
    fn auxiliary_names_respect_individual_overrides() {
        let fields = doc! { "eccCollection": "customEcc", "fields": [] };
        let names = auxiliary_collection_names(&fields, "orders");
        assert_eq!(names[0], "enxcol_.orders.esc");
        assert_eq!(names[1], "customEcc");
        assert_eq!(names[2], "enxcol_.orders.ecoc");
    }

    #[test]
    fn auxiliary_options_force_unique_id_clustering() {
        let opts = auxiliary_collection_options();
        let clustered = opts.get("clusteredIndex").and_then(Bson::as_document).unwrap();
        assert_eq!(clustered.get("key").and_then(Bson::as_document), Some(&doc! { "_id": 1 }));
        assert_eq!(clustered.get("unique").and_then(Bson::as_bool), Some(true));
    }

    #[test]
    fn registry_lookup_is_keyed_by_namespace() {
        let auto = AutoEncryptionOptions::new()
            .encrypted_fields("app.orders", doc! { "fields": [] });
        assert!(auto.encrypted_fields_for(&Namespace::new("app", "orders")).is_some());
        assert!(auto.encrypted_fields_for(&Namespace::new("app", "users")).is_none());
        assert!(auto.encrypted_fields_for(&Namespace::new("other", "orders")).is_none());
    }
}
