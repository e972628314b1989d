//! Catalog API access.
//!
//! [`BookApi`] is the capability the UI state talks to. [`HttpBookApi`]
//! implements it against the catalog server's `/books` endpoints.

use crate::error::{ClientError, Result};
use shelf_engine::{Book, BookDraft, BookId, Page, SortKey, SortOrder};

/// Default catalog endpoint.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/books";

/// Operations the catalog server offers.
#[allow(async_fn_in_trait)]
pub trait BookApi {
    /// One sorted page of books.
    async fn fetch_books(
        &self,
        page: Page,
        sort_by: SortKey,
        sort_order: SortOrder,
    ) -> Result<Vec<Book>>;

    /// Create a book; the server assigns the id.
    async fn add_book(&self, draft: &BookDraft) -> Result<Book>;

    /// Replace every field but the id of book `id`.
    async fn update_book(&self, id: BookId, draft: &BookDraft) -> Result<Book>;

    async fn delete_book(&self, id: BookId) -> Result<()>;
}

/// [`BookApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBookApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookApi {
    /// Client for the `/books` collection at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn book_url(&self, id: BookId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Turn a non-success status into an error.
fn check(response: reqwest::Response, action: &'static str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!("{} failed with status {}", action, status);
        Err(ClientError::Status {
            status: status.as_u16(),
            action,
        })
    }
}

impl BookApi for HttpBookApi {
    async fn fetch_books(
        &self,
        page: Page,
        sort_by: SortKey,
        sort_order: SortOrder,
    ) -> Result<Vec<Book>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("page", page.to_string()),
                ("sortBy", sort_by.to_string()),
                ("sortOrder", sort_order.to_string()),
            ])
            .send()
            .await?;

        let books = check(response, "loading books")?.json().await?;
        Ok(books)
    }

    async fn add_book(&self, draft: &BookDraft) -> Result<Book> {
        let response = self.client.post(&self.base_url).json(draft).send().await?;

        let book = check(response, "adding book")?.json().await?;
        Ok(book)
    }

    async fn update_book(&self, id: BookId, draft: &BookDraft) -> Result<Book> {
        let response = self
            .client
            .patch(self.book_url(id))
            .json(draft)
            .send()
            .await?;

        let book = check(response, "updating book")?.json().await?;
        Ok(book)
    }

    async fn delete_book(&self, id: BookId) -> Result<()> {
        let response = self.client.delete(self.book_url(id)).send().await?;

        check(response, "deleting book")?;
        Ok(())
    }
}
