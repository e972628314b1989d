//! Plain-text rendering of the library view.

use crate::api::BookApi;
use crate::form::{FormState, FIELD_NAMES};
use crate::view::LibraryView;
use shelf_engine::Book;
use std::fmt;

/// A book rendered as a card.
pub struct BookCard<'a>(pub &'a Book);

impl fmt::Display for BookCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.0;
        writeln!(f, "#{} {} - {}", book.id, book.author, book.title)?;
        writeln!(f, "    Year: {}", book.year)?;
        writeln!(f, "    Genre: {}", book.genre)?;
        writeln!(f, "    Pages: {}", book.pages)?;
        write!(
            f,
            "    Available: {}",
            if book.available { "yes" } else { "no" }
        )
    }
}

/// The form inputs, one per line.
pub struct FormView<'a>(pub &'a FormState);

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in FIELD_NAMES.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "    {}: {}", name, self.0.get(name).unwrap_or_default())?;
        }
        Ok(())
    }
}

/// The whole view: controls, form, current page and pagination.
pub struct Screen<'a, A>(pub &'a LibraryView<A>);

impl<A: BookApi> fmt::Display for Screen<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "Library")?;
        writeln!(f, "Sort: {} ({})", view.sort_by(), view.sort_order())?;

        match view.editing() {
            Some(book) => writeln!(
                f,
                "Editing #{} [submit to update, cancel to stop]",
                book.id
            )?,
            None => writeln!(f, "New book [submit to add]")?,
        }
        writeln!(f, "{}", FormView(view.form()))?;
        writeln!(f)?;

        if view.books().is_empty() {
            writeln!(f, "(no books on this page)")?;
        }
        for book in view.books() {
            writeln!(f, "{}", BookCard(book))?;
        }

        let previous = if view.can_go_previous() {
            "< prev"
        } else {
            "  ----"
        };
        write!(f, "{} | Page: {} | next >", previous, view.page())
    }
}
