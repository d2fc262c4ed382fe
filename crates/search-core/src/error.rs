//! Search error types.

use thiserror::Error;

/// Errors that can occur while running a search.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Query was empty after trimming.
    #[error("Please enter a search term")]
    EmptyQuery,

    /// Query was shorter than the minimum length after trimming.
    #[error("Search term must be at least 2 characters")]
    TooShort,

    /// Network request could not complete.
    #[error("Connection error: {0}")]
    Transport(String),

    /// Catalog API answered with a non-success status.
    #[error("Catalog API returned status {status}")]
    Http { status: u16 },

    /// Response body did not match the expected shape.
    #[error("Malformed catalog response: {0}")]
    Parse(String),
}

impl SearchError {
    /// Whether this error came from local input validation.
    ///
    /// Validation errors are shown inline next to the input; everything
    /// else goes to the generic error display.
    pub fn is_validation(&self) -> bool {
        matches!(self, SearchError::EmptyQuery | SearchError::TooShort)
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::Parse(e.to_string())
    }
}
