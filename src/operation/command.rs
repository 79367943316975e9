use std::collections::HashSet;

use bson::{Bson, Document, doc};
use once_cell::sync::Lazy;

use crate::options::CreateCollectionOptions;

/// Client-only option keys that must never be forwarded into the server's
/// `create` command: write-concern and read-preference settings, session
/// plumbing, BSON codec tuning, and factory hooks.
static ILLEGAL_COMMAND_FIELDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "w",
        "wtimeout",
        "j",
        "fsync",
        "autoIndexId",
        "pkFactory",
        "raw",
        "readPreference",
        "session",
        "readConcern",
        "writeConcern",
        "fieldsAsRaw",
        "useBigInt64",
        "promoteLongs",
        "promoteValues",
        "promoteBuffers",
        "bsonRegExp",
        "serializeFunctions",
        "ignoreUndefined",
        "enableUtf8Validation",
    ])
});

/// Whether an options key may appear in the `create` command document.
pub fn is_legal_command_field(key: &str) -> bool {
    !ILLEGAL_COMMAND_FIELDS.contains(key)
}

/// Builds the `create` command for `name` from an open options mapping.
/// Null values and client-only fields are dropped; the input is not mutated.
pub fn build_create_command(name: &str, options: &CreateCollectionOptions) -> Document {
    let mut cmd = doc! { "create": name };
    for (key, value) in options.as_document() {
        if matches!(value, Bson::Null) || !is_legal_command_field(key) {
            continue;
        }
        cmd.insert(key.clone(), value.clone());
    }
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn command_always_names_the_collection_first() {
        let cmd = build_create_command("orders", &CreateCollectionOptions::new());
        let (first_key, first_value) = cmd.iter().next().unwrap();
        assert_eq!(first_key, "create");
        assert_eq!(first_value.as_str(), Some("orders"));
        assert_eq!(cmd.len(), 1);
    }

    #[test]
    fn every_illegal_field_is_rejected() {
        for key in [
            "w", "wtimeout", "j", "fsync", "autoIndexId", "pkFactory", "raw", "readPreference",
            "session", "readConcern", "writeConcern", "fieldsAsRaw", "useBigInt64", "promoteLongs",
            "promoteValues", "promoteBuffers", "bsonRegExp", "serializeFunctions",
            "ignoreUndefined", "enableUtf8Validation",
        ] {
            assert!(!is_legal_command_field(key), "{key} should be illegal");
        }
        assert!(is_legal_command_field("capped"));
        assert!(is_legal_command_field("clusteredIndex"));
        assert!(is_legal_command_field("encryptedFields"));
    }

    #[test]
    fn illegal_and_null_values_never_reach_the_command() {
        let opts = CreateCollectionOptions::new()
            .capped(4096)
            .set("writeConcern", bson::doc! { "w": "majority" })
            .set("comment", Bson::Null)
            .set("session", "not-a-real-session");
        let cmd = build_create_command("orders", &opts);
        assert_eq!(cmd.get("create").and_then(Bson::as_str), Some("orders"));
        assert_eq!(cmd.get("capped").and_then(Bson::as_bool), Some(true));
        assert_eq!(cmd.get("size").and_then(Bson::as_i64), Some(4096));
        assert!(!cmd.contains_key("writeConcern"));
        assert!(!cmd.contains_key("comment"));
        assert!(!cmd.contains_key("session"));
    }

    #[test]
    fn input_options_are_not_mutated() {
        let opts = CreateCollectionOptions::new().set("w", 1).set("capped", true);
        let before = opts.clone();
        let _ = build_create_command("orders", &opts);
        assert_eq!(opts, before);
    }

    proptest! {
        #[test]
        fn prop_built_command_is_clean(
            entries in proptest::collection::hash_map("[a-zA-Z][a-zA-Z0-9]{0,10}", any::<i64>(), 0..8),
            null_keys in proptest::collection::hash_set("[a-zA-Z][a-zA-Z0-9]{0,10}", 0..4),
        ) {
            let mut opts = CreateCollectionOptions::new();
            for (key, value) in &entries {
                if key == "create" {
                    continue;
                }
                opts = opts.set(key.clone(), *value);
            }
            for key in &null_keys {
                if key == "create" {
                    continue;
                }
                opts = opts.set(key.clone(), Bson::Null);
            }
            // All illegal fields present and non-null, to prove filtering.
            opts = opts.set("writeConcern", 1).set("readPreference", 1).set("session", 1);

            let cmd = build_create_command("orders", &opts);

            prop_assert_eq!(cmd.get("create").and_then(Bson::as_str), Some("orders"));
            for (key, value) in &cmd {
                if key == "create" {
                    continue;
                }
                prop_assert!(is_legal_command_field(key));
                prop_assert!(!matches!(value, Bson::Null));
            }
            for (key, value) in &entries {
                if key != "create" && is_legal_command_field(key) && !null_keys.contains(key) {
                    prop_assert_eq!(cmd.get(key).and_then(Bson::as_i64), Some(*value));
                }
            }
        }
    }
}
