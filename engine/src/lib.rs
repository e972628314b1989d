//! # Shelf Engine
//!
//! Catalog logic for the Shelf library manager.
//!
//! This crate holds everything the catalog does in memory: the book record
//! model, the list query (sort key, sort order, page), stable collation-based
//! sorting, fixed-size pagination and id assignment. Loading and saving the
//! collection is left to the caller.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine never touches files or the network
//! - **Deterministic**: the same collection and query always give the same page
//! - **Testable**: pure functions over a `Vec<Book>`, no mocks needed
//!
//! ## Core Concepts
//!
//! ### Books
//!
//! A [`Book`] is a catalog record with a store-assigned [`BookId`]. Clients
//! send a [`BookDraft`] (every field except the id) when creating or
//! replacing a record.
//!
//! ### Listing
//!
//! A [`ListQuery`] selects a [`SortKey`], a [`SortOrder`] and a 1-based page.
//! Pages hold [`PAGE_SIZE`] records. Pages past the end are empty, never an
//! error.
//!
//! ### Id assignment
//!
//! [`IdStrategy::LastPlusOne`] gives a new record the id of the last stored
//! record plus one. This can hand out an id that is still in use once records
//! have been deleted out of order. [`IdStrategy::MaxPlusOne`] uses the
//! largest id instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use shelf_engine::{BookDraft, Catalog, IdStrategy, ListQuery, SortKey, SortOrder};
//!
//! let mut catalog = Catalog::new();
//!
//! let draft = BookDraft {
//!     title: "Dune".into(),
//!     author: "Frank Herbert".into(),
//!     year: 1965,
//!     genre: "Science Fiction".into(),
//!     pages: 412,
//!     available: true,
//! };
//!
//! let book = catalog.create(draft, IdStrategy::LastPlusOne).unwrap();
//! assert_eq!(book.id, 1);
//!
//! let page = catalog.list(&ListQuery::new(1, Some(SortKey::Title), SortOrder::Asc));
//! assert_eq!(page.len(), 1);
//! ```

pub mod book;
pub mod catalog;
pub mod error;
pub mod query;

// Re-export main types at crate root
pub use book::{Book, BookDraft};
pub use catalog::{Catalog, IdStrategy};
pub use error::Error;
pub use query::{collate, page_range, ListQuery, SortKey, SortOrder, PAGE_SIZE};

/// Type aliases for clarity
pub type BookId = i64;
pub type Page = i64;
