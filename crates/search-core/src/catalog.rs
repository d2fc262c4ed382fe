//! Catalog API contract.
//!
//! The pure parts of the client live here: URL construction, status
//! classification, and envelope parsing. The actual HTTP send is behind
//! the [`Catalog`] trait, implemented by the host workload.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::product::{Product, SearchResultSet};
use crate::query::Query;

/// Asynchronous catalog search boundary.
///
/// `?Send` because the widget runs on a single-threaded WASM host.
#[async_trait(?Send)]
pub trait Catalog {
    /// Run one search and return the server-ordered result set.
    async fn search(&self, query: &Query) -> Result<SearchResultSet, SearchError>;
}

/// Wire envelope for the search endpoint.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    products: Vec<Product>,
    total: u64,
}

/// Build the search request URL: `{endpoint}?q={encoded}&limit={n}`.
pub fn search_url(config: &SearchConfig, query: &Query) -> String {
    format!(
        "{}?q={}&limit={}",
        config.endpoint,
        urlencoding_encode(query.as_str()),
        config.limit
    )
}

/// Interpret a raw catalog response.
///
/// Non-2xx statuses become [`SearchError::Http`]; a body that does not
/// match the `{products, total}` envelope becomes [`SearchError::Parse`].
/// Product ordering in the body is preserved exactly; it defines
/// relevance for this query.
pub fn parse_response(query: Query, status: u16, body: &[u8]) -> Result<SearchResultSet, SearchError> {
    if !(200..300).contains(&status) {
        return Err(SearchError::Http { status });
    }

    let envelope: SearchEnvelope = serde_json::from_slice(body)?;

    Ok(SearchResultSet {
        products: envelope.products,
        total: envelope.total,
        query,
    })
}

fn urlencoding_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}
