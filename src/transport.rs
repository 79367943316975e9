use bson::Document;
use serde::{Deserialize, Serialize};

use crate::errors::DbError;
use crate::session::ClientSession;

/// A server already selected by the caller. One top-level operation sends
/// every command of its sequence to the same server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDescription {
    pub address: String,
}

impl ServerDescription {
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into() }
    }
}

/// Command-execution boundary. An implementation sends one command document
/// to the given server over the given session and returns the raw reply.
/// Timeouts, cancellation and retries live behind this trait, not above it.
#[allow(async_fn_in_trait)]
pub trait CommandExecutor {
    async fn execute(
        &self,
        server: &ServerDescription,
        session: &mut ClientSession,
        command: Document,
    ) -> Result<Document, DbError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_description_serde_round_trip() {
        let server = ServerDescription::new("localhost:27017");
        let json = serde_json::to_string(&server).unwrap();
        assert_eq!(serde_json::from_str::<ServerDescription>(&json).unwrap(), server);
    }
}
