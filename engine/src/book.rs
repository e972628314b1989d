//! Book records stored in the catalog.

use crate::BookId;
use serde::{Deserialize, Serialize};

/// A catalog record.
///
/// Field names on the wire and on disk are exactly the struct field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned identifier
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Publication year
    pub year: i64,
    pub genre: String,
    /// Page count
    pub pages: i64,
    /// Whether the book can currently be lent out
    pub available: bool,
}

/// The client-supplied part of a book: every field except the id.
///
/// Used as the body of create and update requests. An `id` key in the
/// incoming JSON is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub genre: String,
    pub pages: i64,
    pub available: bool,
}

impl Default for BookDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            year: 0,
            genre: String::new(),
            pages: 0,
            available: true,
        }
    }
}

impl Book {
    /// Build a record from a draft and the id the catalog assigned to it.
    pub fn from_draft(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            year: draft.year,
            genre: draft.genre,
            pages: draft.pages,
            available: draft.available,
        }
    }

    /// Replace every field except the id.
    pub fn replace(&mut self, draft: BookDraft) {
        *self = Self::from_draft(self.id, draft);
    }

    /// Copy the editable fields out of this record.
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
            genre: self.genre.clone(),
            pages: self.pages,
            available: self.available,
        }
    }
}
