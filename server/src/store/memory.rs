use std::sync::RwLock;

use shelf_engine::Book;

use super::{CatalogStore, StoreError, StoreResult};

/// In-memory store, useful in tests and for running without a data file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `books` already stored.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    fn lock_poisoned(tag: &'static str) -> StoreError {
        StoreError::LockPoisoned(tag)
    }
}

impl CatalogStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Book>> {
        let guard = self
            .books
            .read()
            .map_err(|_| Self::lock_poisoned("books"))?;
        Ok(guard.clone())
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        let mut guard = self
            .books
            .write()
            .map_err(|_| Self::lock_poisoned("books"))?;
        *guard = books.to_vec();
        Ok(())
    }
}
