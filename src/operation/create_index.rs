use bson::{Bson, Document, doc};

use crate::database::Database;
use crate::errors::DbError;
use crate::session::ClientSession;
use crate::transport::{CommandExecutor, ServerDescription};

/// Creates a single index on a collection. Collection creation drives this
/// for the safe-content index; it is also usable on its own.
#[derive(Debug, Clone)]
pub struct CreateIndexOperation {
    db: Database,
    collection: String,
    key: Document,
    options: Document,
}

impl CreateIndexOperation {
    pub fn new(
        db: Database,
        collection: impl Into<String>,
        key: Document,
        options: Document,
    ) -> Self {
        Self { db, collection: collection.into(), key, options }
    }

    /// Default server-side index name: `<field>_<direction>` pairs joined
    /// with underscores, unless the options carry an explicit `name`.
    fn index_name(&self) -> String {
        self.key
            .iter()
            .map(|(field, direction)| format!("{field}_{direction}"))
            .collect::<Vec<_>>()
            .join("_")
    }

    pub(crate) fn build_command(&self) -> Document {
        let name = self
            .options
            .get("name")
            .and_then(Bson::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| self.index_name());
        let mut index = doc! { "key": self.key.clone(), "name": name };
        for (key, value) in &self.options {
            if !index.contains_key(key) {
                index.insert(key.clone(), value.clone());
            }
        }
        doc! { "createIndexes": self.collection.clone(), "indexes": [index] }
    }

    pub async fn execute<E: CommandExecutor>(
        &self,
        executor: &E,
        server: &ServerDescription,
        session: &mut ClientSession,
    ) -> Result<(), DbError> {
        let command = self.build_command();
        log::debug!("createIndexes on {}.{}", self.db.name(), self.collection);
        session.advance();
        executor.execute(server, session, command).await?;
        Ok(())
    }
}
