//! List queries: sort key, sort order and pagination.

use crate::{Book, Page};
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

/// Number of records on one page of a list response.
pub const PAGE_SIZE: usize = 12;

/// Field a list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Title,
    Author,
    /// Accepted but has no comparator: lists keep their stored order.
    Year,
}

impl SortKey {
    /// Parse a `sortBy` query value.
    ///
    /// Returns `None` for unrecognised values, which list in stored order.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "title" => Some(SortKey::Title),
            "author" => Some(SortKey::Author),
            "year" => Some(SortKey::Year),
            _ => None,
        }
    }

    /// Query-string form of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Year => "year",
        }
    }

    /// The string field this key compares, if it has a comparator.
    fn field<'a>(&self, book: &'a Book) -> Option<&'a str> {
        match self {
            SortKey::Title => Some(&book.title),
            SortKey::Author => Some(&book.author),
            SortKey::Year => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a `sortOrder` query value. Anything but `asc` is descending.
    pub fn from_param(value: &str) -> Self {
        if value == "asc" {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for one page of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number
    pub page: Page,
    /// `None` keeps stored order
    pub sort_by: Option<SortKey>,
    pub sort_order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            sort_by: Some(SortKey::Title),
            sort_order: SortOrder::Asc,
        }
    }
}

impl ListQuery {
    pub fn new(page: Page, sort_by: Option<SortKey>, sort_order: SortOrder) -> Self {
        Self {
            page,
            sort_by,
            sort_order,
        }
    }

    /// Build a query from raw query-string values, applying the defaults
    /// (`page=1`, `sortBy=title`, `sortOrder=asc`) for missing ones.
    pub fn from_params(
        page: Option<Page>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Self {
        Self {
            page: page.unwrap_or(1),
            sort_by: sort_by.map_or(Some(SortKey::Title), SortKey::from_param),
            sort_order: sort_order.map_or(SortOrder::Asc, SortOrder::from_param),
        }
    }

    /// Compare two books under this query's key and order.
    ///
    /// Returns `Equal` for keys without a comparator so a stable sort leaves
    /// the input untouched.
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        let Some(key) = self.sort_by else {
            return Ordering::Equal;
        };
        match (key.field(a), key.field(b)) {
            (Some(left), Some(right)) => match self.sort_order {
                SortOrder::Asc => collate(left, right),
                SortOrder::Desc => collate(right, left),
            },
            _ => Ordering::Equal,
        }
    }
}

/// Case- and accent-aware string collation.
///
/// Uses the Unicode root collation at tertiary strength: letters compare
/// by base letter first (`Á` sorts with `A`), then accents, then case with
/// lowercase before uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

thread_local! {
    // Root collation data is compiled in. Byte order if it fails to load.
    static COLLATOR: Option<CollatorBorrowed<'static>> =
        Collator::try_new(Default::default(), CollatorOptions::default()).ok();
}

/// Index range of `page` within a list of `len` records.
///
/// Returns `None` when the page starts past the end or is below 1.
pub fn page_range(page: Page, len: usize) -> Option<Range<usize>> {
    if page < 1 {
        return None;
    }
    let start = usize::try_from(page - 1).ok()?.checked_mul(PAGE_SIZE)?;
    if start >= len {
        return None;
    }
    let end = start.saturating_add(PAGE_SIZE).min(len);
    Some(start..end)
}
