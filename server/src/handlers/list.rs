//! List handler - serves one sorted page of the catalog.

use crate::error::Result;
use crate::store::SharedStore;
use serde::Deserialize;
use shelf_engine::{Book, Catalog, ListQuery, Page};

use super::run_blocking;

/// Query parameters for listing books.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// `title`, `author` or `year` (default `title`)
    pub sort_by: Option<String>,
    /// `asc` or anything else for descending (default `asc`)
    pub sort_order: Option<String>,
}

impl ListParams {
    pub fn to_query(&self) -> ListQuery {
        ListQuery::from_params(
            self.page.as_deref().map(parse_page),
            self.sort_by.as_deref(),
            self.sort_order.as_deref(),
        )
    }
}

/// Page text that is not an integer selects no page.
fn parse_page(text: &str) -> Page {
    text.trim().parse().unwrap_or(0)
}

/// Return one page of the catalog.
pub async fn handle_list(store: SharedStore, params: ListParams) -> Result<Vec<Book>> {
    let query = params.to_query();

    run_blocking(move || {
        let catalog = Catalog::from_books(store.load()?);
        let page = catalog.list(&query);
        tracing::debug!(
            page = query.page,
            sort_by = ?query.sort_by,
            sort_order = %query.sort_order,
            returned = page.len(),
            total = catalog.len(),
            "listed books"
        );
        Ok(page)
    })
    .await
}
