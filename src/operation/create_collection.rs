use bson::{Document, doc};

use crate::collection::Collection;
use crate::database::Database;
use crate::encryption::{
    SAFE_CONTENT_FIELD, auxiliary_collection_names, auxiliary_collection_options,
};
use crate::errors::DbError;
use crate::operation::command::build_create_command;
use crate::operation::create_index::CreateIndexOperation;
use crate::options::CreateCollectionOptions;
use crate::session::ClientSession;
use crate::transport::{CommandExecutor, ServerDescription};
use crate::types::Namespace;

/// Orchestrates collection creation, including the queryable-encryption
/// bootstrap: the three auxiliary state collections first, then the primary
/// collection, then the supporting safe-content index.
///
/// Commands are strictly sequential; the first failure aborts the sequence
/// and propagates unchanged. Nothing already created is rolled back.
#[derive(Debug, Clone)]
pub struct CreateCollectionOperation {
    db: Database,
    name: String,
    options: CreateCollectionOptions,
}

impl CreateCollectionOperation {
    pub fn new(db: Database, name: impl Into<String>, options: CreateCollectionOptions) -> Self {
        Self { db, name: name.into(), options }
    }

    /// Runs the full creation sequence on one server/session pair.
    ///
    /// Encrypted-fields metadata is resolved by precedence: the explicit
    /// `encryptedFields` option first, else the client's auto-encryption
    /// registry for `<db>.<name>`. When metadata resolves, the auxiliary
    /// collections must exist before the primary collection's encrypted
    /// storage comes up, so their creation happens first, in fixed order.
    pub async fn execute<E: CommandExecutor>(
        &self,
        executor: &E,
        server: &ServerDescription,
        session: &mut ClientSession,
    ) -> Result<Collection, DbError> {
        let namespace = Namespace::new(self.db.name(), &self.name);
        let encrypted_fields = self
            .options
            .encrypted_fields_doc()
            .cloned()
            .or_else(|| self.db.client().lookup_encrypted_fields(&namespace));

        let options = match &encrypted_fields {
            Some(fields) => {
                for aux_name in auxiliary_collection_names(fields, &self.name) {
                    let aux = CreateCollectionOperation::new(
                        self.db.clone(),
                        aux_name,
                        auxiliary_collection_options(),
                    );
                    aux.execute_without_encrypted_fields_check(executor, server, session).await?;
                }
                self.options.with_encrypted_fields(fields)
            }
            None => self.options.clone(),
        };

        let collection = CreateCollectionOperation::new(self.db.clone(), &self.name, options)
            .execute_without_encrypted_fields_check(executor, server, session)
            .await?;

        if encrypted_fields.is_some() {
            CreateIndexOperation::new(
                self.db.clone(),
                &self.name,
                doc! { SAFE_CONTENT_FIELD: 1 },
                Document::new(),
            )
            .execute(executor, server, session)
            .await?;
        }

        Ok(collection)
    }

    /// Single-collection creation primitive: builds and sends exactly one
    /// `create` command, with the encrypted-fields bootstrap suppressed.
    async fn execute_without_encrypted_fields_check<E: CommandExecutor>(
        &self,
        executor: &E,
        server: &ServerDescription,
        session: &mut ClientSession,
    ) -> Result<Collection, DbError> {
        let command = build_create_command(&self.name, &self.options);
        log::debug!("create {}.{} on {}", self.db.name(), self.name, server.address);
        session.advance();
        executor.execute(server, session, command).await?;
        Ok(Collection::new(self.db.clone(), &self.name, self.options.clone()))
    }
}
