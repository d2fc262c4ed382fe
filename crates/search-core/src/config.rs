//! Widget configuration.

use serde::{Deserialize, Serialize};

use crate::money::DisplayCurrency;

/// Hard cap on results requested per search.
const MAX_RESULT_LIMIT: u32 = 50;

/// Configuration for the search widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Catalog search endpoint.
    pub endpoint: String,
    /// Maximum number of results requested per search.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Currency prices are displayed in.
    #[serde(default)]
    pub currency: DisplayCurrency,
}

fn default_limit() -> u32 {
    MAX_RESULT_LIMIT
}

impl SearchConfig {
    /// Create a configuration for a custom endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            limit: default_limit(),
            currency: DisplayCurrency::default(),
        }
    }

    /// Set the per-search result count, capped at 50.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.min(MAX_RESULT_LIMIT);
        self
    }

    /// Set the display currency.
    pub fn with_currency(mut self, currency: DisplayCurrency) -> Self {
        self.currency = currency;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new("https://dummyjson.com/products/search")
    }
}
