use crate::database::Database;
use crate::options::CreateCollectionOptions;
use crate::types::Namespace;

/// Handle to a collection, bound to the database it was created through, its
/// name, and the effective options the creation command carried. The handle
/// is not server-side proof of existence beyond the command's success.
#[derive(Debug, Clone)]
pub struct Collection {
    db: Database,
    name: String,
    options: CreateCollectionOptions,
}

impl Collection {
    pub(crate) fn new(db: Database, name: impl Into<String>, options: CreateCollectionOptions) -> Self {
        Self { db, name: name.into(), options }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Namespace {
        Namespace::new(self.db.name(), &self.name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// The options the creation command was built from, including any
    /// `encryptedFields` metadata injected by the bootstrap.
    pub fn options(&self) -> &CreateCollectionOptions {
        &self.options
    }
}
