use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("BSON: {0}")]
    Bson(#[from] bson::error::Error),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error {code}: {message}")]
    Server { code: i32, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Collection not found: {0}")]
    NoSuchCollection(String),

    #[error("Collection already exists: {0}")]
    CollectionAlreadyExists(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}
