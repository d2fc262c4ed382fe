//! Query validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Minimum query length after trimming.
const MIN_QUERY_LEN: usize = 2;

/// A validated, trimmed search query.
///
/// Can only be constructed through [`validate`], so holding a `Query`
/// means the length invariant already holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    /// The query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a raw query string.
///
/// Trims surrounding whitespace, then rejects empty and single-character
/// queries. Returns the trimmed text on success.
pub fn validate(raw: &str) -> Result<Query, SearchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return Err(SearchError::TooShort);
    }
    Ok(Query(trimmed.to_string()))
}
