use crate::client::Client;
use crate::collection::Collection;
use crate::errors::DbError;
use crate::operation::CreateCollectionOperation;
use crate::options::CreateCollectionOptions;
use crate::session::ClientSession;
use crate::transport::{CommandExecutor, ServerDescription};

/// Handle to a named database on a client.
#[derive(Debug, Clone)]
pub struct Database {
    client: Client,
    name: String,
}

impl Database {
    pub(crate) fn new(client: Client, name: impl Into<String>) -> Self {
        Self { client, name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Creates a collection, bootstrapping encrypted-field state collections
    /// first when metadata applies. Every command of the sequence goes to
    /// `server` over `session`.
    pub async fn create_collection<E: CommandExecutor>(
        &self,
        executor: &E,
        server: &ServerDescription,
        session: &mut ClientSession,
        name: &str,
        options: CreateCollectionOptions,
    ) -> Result<Collection, DbError> {
        CreateCollectionOperation::new(self.clone(), name, options)
            .execute(executor, server, session)
            .await
    }
}
