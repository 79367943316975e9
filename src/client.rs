use std::sync::Arc;

use bson::Document;
use parking_lot::RwLock;

use crate::database::Database;
use crate::encryption::AutoEncryptionOptions;
use crate::types::Namespace;

/// Client-level configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub auto_encryption: Option<AutoEncryptionOptions>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn auto_encryption(mut self, auto: AutoEncryptionOptions) -> Self {
        self.auto_encryption = Some(auto);
        self
    }
}

/// Handle to a logical database client. Cheap to clone; configuration is
/// shared behind the handle.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    options: RwLock<ClientOptions>,
}

impl Client {
    pub fn new(options: ClientOptions) -> Self {
        Self { inner: Arc::new(ClientInner { options: RwLock::new(options) }) }
    }

    pub fn database(&self, name: &str) -> Database {
        Database::new(self.clone(), name)
    }

    /// Replaces the auto-encryption configuration. Expected to happen once,
    /// at startup, before operations run.
    pub fn set_auto_encryption(&self, auto: AutoEncryptionOptions) {
        self.inner.options.write().auto_encryption = Some(auto);
    }

    /// Registry read used by the creation bootstrap. Read-only.
    pub(crate) fn lookup_encrypted_fields(&self, namespace: &Namespace) -> Option<Document> {
        let options = self.inner.options.read();
        options
            .auto_encryption
            .as_ref()
            .and_then(|auto| auto.encrypted_fields_for(namespace))
            .cloned()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientOptions::default())
    }
}
