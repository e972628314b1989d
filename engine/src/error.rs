//! Error types for the Shelf engine.

use crate::BookId;
use thiserror::Error;

/// All possible errors from the Shelf engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    #[error("no id left after {0}")]
    IdExhausted(BookId),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::BookNotFound(7);
        assert_eq!(err.to_string(), "book not found: 7");

        let err = Error::IdExhausted(i64::MAX);
        assert_eq!(err.to_string(), format!("no id left after {}", i64::MAX));
    }
}
