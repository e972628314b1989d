//! Catalog persistence.
//!
//! The whole collection is loaded for every request and written back in one
//! piece after every mutation. There is no locking between callers.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use shelf_engine::Book;
use std::sync::Arc;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by catalog stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("lock poisoned: {0}")]
    LockPoisoned(&'static str),
}

/// Load/save capability over the full book collection.
pub trait CatalogStore: Send + Sync {
    /// Read every record, in stored order.
    fn load(&self) -> StoreResult<Vec<Book>>;

    /// Replace the stored collection with `books`.
    fn save(&self, books: &[Book]) -> StoreResult<()>;
}

/// Store handle shared across handlers.
pub type SharedStore = Arc<dyn CatalogStore>;
