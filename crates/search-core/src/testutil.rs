//! Shared builders for unit tests.

use crate::product::{Product, SearchResultSet};
use crate::query::validate;

/// Minimal product with the fields the logic cares about.
pub(crate) fn product(id: u64, title: &str, price: f64, rating: Option<f64>) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: String::new(),
        price,
        rating,
        images: Vec::new(),
        thumbnail: None,
        brand: String::new(),
        category: String::new(),
        stock: 0,
        availability_status: None,
        discount_percentage: None,
        reviews: Vec::new(),
    }
}

/// Result set for a fixed query.
pub(crate) fn result_set(query: &str, products: Vec<Product>) -> SearchResultSet {
    let total = products.len() as u64;
    SearchResultSet {
        products,
        total,
        query: validate(query).unwrap(),
    }
}
