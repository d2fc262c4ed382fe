//! Product data models.

use serde::{Deserialize, Serialize};

use crate::query::Query;

/// A product record from the catalog API.
///
/// Immutable once fetched; sorting and rendering work on copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub availability_status: Option<String>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Rating with absent treated as zero.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Best image to show on a card: thumbnail first, then the first
    /// non-empty gallery image. `None` means the placeholder.
    pub fn primary_image(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                self.images
                    .iter()
                    .map(String::as_str)
                    .find(|url| !url.trim().is_empty())
            })
    }

    /// Gallery images with empty entries filtered out.
    pub fn valid_images(&self) -> Vec<&str> {
        self.images
            .iter()
            .map(String::as_str)
            .filter(|url| !url.trim().is_empty())
            .collect()
    }

    /// Pre-discount price, when the catalog reports a discount.
    pub fn original_price(&self) -> Option<f64> {
        let pct = self.discount_percentage?;
        if pct <= 0.0 || pct >= 100.0 {
            return None;
        }
        Some(self.price / (1.0 - pct / 100.0))
    }
}

/// A customer review attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub reviewer_name: String,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub date: String,
}

/// The full response to one search, as currently held by the widget.
///
/// Created on each successful fetch and replaced wholesale on the next
/// search; never merged or paginated. `products` keeps the server's
/// ordering, which defines relevance.
#[derive(Debug, Clone)]
pub struct SearchResultSet {
    pub products: Vec<Product>,
    pub total: u64,
    pub query: Query,
}

impl SearchResultSet {
    /// Whether the search matched nothing.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
