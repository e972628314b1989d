//! Write handlers - create, update and delete books.

use crate::error::Result;
use crate::store::SharedStore;
use shelf_engine::{Book, BookDraft, BookId, Catalog, IdStrategy};

use super::run_blocking;

/// Append a new book and persist the catalog.
pub async fn handle_create(
    store: SharedStore,
    strategy: IdStrategy,
    draft: BookDraft,
) -> Result<Book> {
    run_blocking(move || {
        let mut catalog = Catalog::from_books(store.load()?);
        let book = catalog.create(draft, strategy)?;
        store.save(catalog.books())?;

        tracing::info!(id = book.id, title = %book.title, "created book");
        Ok(book)
    })
    .await
}

/// Replace every field but the id of an existing book.
pub async fn handle_update(store: SharedStore, id: BookId, draft: BookDraft) -> Result<Book> {
    run_blocking(move || {
        let mut catalog = Catalog::from_books(store.load()?);
        let book = catalog.update(id, draft)?;
        store.save(catalog.books())?;

        tracing::info!(id, "updated book");
        Ok(book)
    })
    .await
}

/// Remove a book and persist the catalog.
pub async fn handle_delete(store: SharedStore, id: BookId) -> Result<()> {
    run_blocking(move || {
        let mut catalog = Catalog::from_books(store.load()?);
        let removed = catalog.delete(id)?;
        store.save(catalog.books())?;

        tracing::info!(id, title = %removed.title, "deleted book");
        Ok(())
    })
    .await
}
