//! Error types for the catalog client.

use thiserror::Error;

/// All possible errors from the catalog client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{action} failed with status {status}")]
    Status { status: u16, action: &'static str },

    #[error("invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("unknown form field: {0}")]
    UnknownField(String),
}

impl ClientError {
    /// HTTP status of a rejected request, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ClientError::Status {
            status: 404,
            action: "updating book",
        };
        assert_eq!(err.to_string(), "updating book failed with status 404");
        assert_eq!(err.status(), Some(404));

        let err = ClientError::InvalidField {
            field: "year",
            value: "nineteen".into(),
        };
        assert_eq!(err.to_string(), "invalid value for year: \"nineteen\"");
        assert_eq!(err.status(), None);
    }
}
