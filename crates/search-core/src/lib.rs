//! Domain types and logic for the product search widget.
//!
//! This crate holds everything that can run without a UI host or a
//! network:
//!
//! - **Query**: input validation into a trimmed, length-checked query
//! - **Catalog**: the search request/response contract, with the HTTP
//!   send abstracted behind a trait
//! - **Sort**: pure, stable reordering of a fetched result set
//! - **Controller**: the submit/sort/select/close flow over an explicit
//!   state value and a view boundary
//!
//! Rendering lives in `search-render`; the Spin host glue lives in the
//! `search-widget` workload.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod money;
pub mod product;
pub mod query;
pub mod sort;
pub mod state;

#[cfg(test)]
pub(crate) mod testutil;

pub use catalog::{parse_response, search_url, Catalog};
pub use config::SearchConfig;
pub use controller::{PendingSearch, ResultView, SearchController};
pub use error::SearchError;
pub use money::DisplayCurrency;
pub use product::{Product, Review, SearchResultSet};
pub use query::{validate, Query};
pub use sort::{sorted, SortOrder};
pub use state::{SearchState, ViewPhase};
