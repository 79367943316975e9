pub mod command;
pub mod create_collection;
pub mod create_index;

pub use create_collection::CreateCollectionOperation;
pub use create_index::CreateIndexOperation;
