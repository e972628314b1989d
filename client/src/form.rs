//! Create/edit form state.
//!
//! Fields are kept as the text the user typed. They are converted to a
//! [`BookDraft`] only when the form is submitted.

use crate::error::{ClientError, Result};
use shelf_engine::{Book, BookDraft};

/// Names of the form inputs, in display order.
pub const FIELD_NAMES: [&str; 6] = ["title", "author", "year", "genre", "pages", "available"];

/// Draft book fields as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub pages: String,
    /// `"true"` or `"false"`
    pub available: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_draft(&BookDraft::default())
    }
}

impl FormState {
    pub fn from_draft(draft: &BookDraft) -> Self {
        Self {
            title: draft.title.clone(),
            author: draft.author.clone(),
            year: draft.year.to_string(),
            genre: draft.genre.clone(),
            pages: draft.pages.to_string(),
            available: bool_text(draft.available).to_string(),
        }
    }

    /// Copy a record's fields into the form.
    pub fn from_book(book: &Book) -> Self {
        Self::from_draft(&book.to_draft())
    }

    /// Set one input by its form name.
    ///
    /// `available` is stored as `"true"` when given exactly `true`, and
    /// `"false"` otherwise.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match name {
            "title" => self.title = value,
            "author" => self.author = value,
            "year" => self.year = value,
            "genre" => self.genre = value,
            "pages" => self.pages = value,
            "available" => self.available = bool_text(value == "true").to_string(),
            other => return Err(ClientError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Current text of an input.
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "title" => &self.title,
            "author" => &self.author,
            "year" => &self.year,
            "genre" => &self.genre,
            "pages" => &self.pages,
            "available" => &self.available,
            _ => return None,
        };
        Some(value)
    }

    pub fn is_available(&self) -> bool {
        self.available == "true"
    }

    /// Convert the entered text into a request payload.
    pub fn to_draft(&self) -> Result<BookDraft> {
        Ok(BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            year: parse_number("year", &self.year)?,
            genre: self.genre.clone(),
            pages: parse_number("pages", &self.pages)?,
            available: self.is_available(),
        })
    }
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn parse_number(field: &'static str, text: &str) -> Result<i64> {
    text.trim().parse().map_err(|_| ClientError::InvalidField {
        field,
        value: text.to_string(),
    })
}
