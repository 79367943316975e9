pub mod client;
pub mod collection;
pub mod database;
pub mod encryption;
pub mod errors;
pub mod logger;
pub mod operation;
pub mod options;
pub mod session;
pub mod transport;
pub mod types;

pub use crate::client::{Client, ClientOptions};
pub use crate::collection::Collection;
pub use crate::database::Database;
pub use crate::encryption::AutoEncryptionOptions;
pub use crate::errors::DbError;
pub use crate::options::CreateCollectionOptions;
pub use crate::session::ClientSession;
pub use crate::transport::{CommandExecutor, ServerDescription};

/// Initializes the driver's logging.
///
/// This function should be called once, before operations run.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    logger::init()?;
    Ok(())
}
