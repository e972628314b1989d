//! Library view - the client-side UI state.
//!
//! The view owns the currently displayed page of books, the create/edit form
//! and the list controls (page, sort key, sort order). Changing a list
//! control re-fetches the page. Books are transient copies and are replaced
//! on every fetch.

use crate::api::BookApi;
use crate::error::Result;
use crate::form::FormState;
use shelf_engine::{Book, BookId, Page, SortKey, SortOrder};

/// Question asked before a delete is sent.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this book?";

/// Interactive yes/no confirmation.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// UI state for listing and editing the catalog.
#[derive(Debug)]
pub struct LibraryView<A> {
    api: A,
    books: Vec<Book>,
    form: FormState,
    editing: Option<Book>,
    page: Page,
    sort_by: SortKey,
    sort_order: SortOrder,
}

impl<A: BookApi> LibraryView<A> {
    /// A view on page 1, sorted by title ascending, with an empty form.
    ///
    /// Nothing is fetched until [`mount`](Self::mount).
    pub fn new(api: A) -> Self {
        Self {
            api,
            books: Vec::new(),
            form: FormState::default(),
            editing: None,
            page: 1,
            sort_by: SortKey::Title,
            sort_order: SortOrder::Asc,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Books on the current page, as last fetched.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The record being edited, if any.
    pub fn editing(&self) -> Option<&Book> {
        self.editing.as_ref()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Initial fetch.
    pub async fn mount(&mut self) -> Result<()> {
        self.refresh().await
    }

    /// Re-fetch the current page and replace the displayed books.
    ///
    /// On failure the previously displayed books stay.
    pub async fn refresh(&mut self) -> Result<()> {
        let books = self
            .api
            .fetch_books(self.page, self.sort_by, self.sort_order)
            .await?;
        tracing::debug!(
            page = self.page,
            sort_by = %self.sort_by,
            sort_order = %self.sort_order,
            count = books.len(),
            "fetched books"
        );
        self.books = books;
        Ok(())
    }

    /// Move to `page` and fetch it. Setting the current page again is a no-op.
    pub async fn set_page(&mut self, page: Page) -> Result<()> {
        if page == self.page {
            return Ok(());
        }
        self.page = page;
        self.refresh().await
    }

    /// Whether the "previous" control is enabled.
    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    /// Go back one page. Returns `false` without fetching when already on
    /// the first page.
    pub async fn previous_page(&mut self) -> Result<bool> {
        if !self.can_go_previous() {
            return Ok(false);
        }
        self.set_page(self.page - 1).await?;
        Ok(true)
    }

    /// Go forward one page. There is no upper bound: past the last page the
    /// list is simply empty.
    pub async fn next_page(&mut self) -> Result<()> {
        self.set_page(self.page.saturating_add(1)).await
    }

    pub async fn set_sort_by(&mut self, sort_by: SortKey) -> Result<()> {
        if sort_by == self.sort_by {
            return Ok(());
        }
        self.sort_by = sort_by;
        self.refresh().await
    }

    pub async fn set_sort_order(&mut self, sort_order: SortOrder) -> Result<()> {
        if sort_order == self.sort_order {
            return Ok(());
        }
        self.sort_order = sort_order;
        self.refresh().await
    }

    /// Update one form input by name.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.form.set(name, value)
    }

    /// Load `book` into the form for editing.
    pub fn edit(&mut self, book: &Book) {
        self.form = FormState::from_book(book);
        self.editing = Some(book.clone());
    }

    /// Start editing a book from the current page. Returns `false` if it is
    /// not displayed.
    pub fn edit_displayed(&mut self, id: BookId) -> bool {
        match self.books.iter().find(|b| b.id == id).cloned() {
            Some(book) => {
                self.edit(&book);
                true
            }
            None => false,
        }
    }

    /// Clear the form and leave edit mode.
    pub fn cancel_edit(&mut self) {
        self.form = FormState::default();
        self.editing = None;
    }

    /// Send the form: update the edited book, or create a new one.
    ///
    /// On success the form is cleared and the page re-fetched. On failure
    /// the form and the displayed books are left as they were.
    pub async fn submit(&mut self) -> Result<Book> {
        let draft = self.form.to_draft()?;

        let saved = match &self.editing {
            Some(book) => self.api.update_book(book.id, &draft).await?,
            None => self.api.add_book(&draft).await?,
        };
        tracing::info!(id = saved.id, title = %saved.title, "saved book");

        self.cancel_edit();
        self.refresh().await?;
        Ok(saved)
    }

    /// Delete a book after asking for confirmation.
    ///
    /// Returns `false` when the user declined; nothing is sent then.
    pub async fn delete<C: Confirm>(&mut self, id: BookId, confirm: &mut C) -> Result<bool> {
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(false);
        }
        self.api.delete_book(id).await?;
        tracing::info!(id, "deleted book");

        self.refresh().await?;
        Ok(true)
    }
}
