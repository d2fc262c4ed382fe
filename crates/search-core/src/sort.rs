//! Sorting of fetched results.
//!
//! Sorting always starts from the relevance-ordered set held by the
//! controller, never from an already-sorted list, so switching sort
//! modes repeatedly is idempotent.

use serde::{Deserialize, Serialize};

use crate::money::DisplayCurrency;
use crate::product::Product;

/// Sort order for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Server ordering for the query.
    #[default]
    Relevance,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first; missing ratings count as zero.
    RatingDesc,
}

impl SortOrder {
    /// All orders, in the order the sort control lists them.
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Relevance,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::RatingDesc,
    ];

    /// Parse the URL-parameter form; anything unknown is relevance.
    pub fn from_str(s: &str) -> Self {
        match s {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "rating" => Self::RatingDesc,
            _ => Self::Relevance,
        }
    }

    /// URL-parameter form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::RatingDesc => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::RatingDesc => "Customer Rating",
        }
    }
}

/// Return a copy of `products` in the requested order.
///
/// The input is never mutated. All comparisons use a stable sort, so
/// products with equal keys keep their relative (relevance) order.
/// Prices are converted to the display currency before comparison.
pub fn sorted(products: &[Product], order: SortOrder, currency: &DisplayCurrency) -> Vec<Product> {
    let mut out = products.to_vec();
    match order {
        SortOrder::Relevance => {}
        SortOrder::PriceAsc => {
            out.sort_by(|a, b| currency.convert(a.price).total_cmp(&currency.convert(b.price)));
        }
        SortOrder::PriceDesc => {
            out.sort_by(|a, b| currency.convert(b.price).total_cmp(&currency.convert(a.price)));
        }
        SortOrder::RatingDesc => {
            out.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::product;

    fn usd() -> DisplayCurrency {
        DisplayCurrency::default()
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_relevance_keeps_server_order() {
        let input = vec![
            product(1, "A", 10.0, Some(4.2)),
            product(2, "B", 5.0, Some(4.8)),
        ];
        assert_eq!(ids(&sorted(&input, SortOrder::Relevance, &usd())), [1, 2]);
    }

    #[test]
    fn test_canned_response_orderings() {
        // {products: [{id:1,title:"A",price:10,rating:4.2},
        //             {id:2,title:"B",price:5,rating:4.8}], total:2}
        let input = vec![
            product(1, "A", 10.0, Some(4.2)),
            product(2, "B", 5.0, Some(4.8)),
        ];
        assert_eq!(ids(&sorted(&input, SortOrder::PriceAsc, &usd())), [2, 1]);
        assert_eq!(ids(&sorted(&input, SortOrder::PriceDesc, &usd())), [1, 2]);
        assert_eq!(ids(&sorted(&input, SortOrder::RatingDesc, &usd())), [2, 1]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![
            product(1, "A", 10.0, None),
            product(2, "B", 5.0, None),
        ];
        let _ = sorted(&input, SortOrder::PriceAsc, &usd());
        assert_eq!(ids(&input), [1, 2]);
    }

    #[test]
    fn test_stable_on_equal_price() {
        let input = vec![
            product(1, "A", 9.99, None),
            product(2, "B", 9.99, None),
            product(3, "C", 9.99, None),
        ];
        assert_eq!(ids(&sorted(&input, SortOrder::PriceAsc, &usd())), [1, 2, 3]);
        assert_eq!(ids(&sorted(&input, SortOrder::PriceDesc, &usd())), [1, 2, 3]);
    }

    #[test]
    fn test_stable_on_equal_rating() {
        let input = vec![
            product(1, "A", 1.0, Some(4.0)),
            product(2, "B", 2.0, Some(4.0)),
            product(3, "C", 3.0, Some(5.0)),
        ];
        assert_eq!(ids(&sorted(&input, SortOrder::RatingDesc, &usd())), [3, 1, 2]);
    }

    #[test]
    fn test_missing_rating_sorts_last() {
        let input = vec![
            product(1, "A", 1.0, None),
            product(2, "B", 2.0, Some(0.5)),
        ];
        assert_eq!(ids(&sorted(&input, SortOrder::RatingDesc, &usd())), [2, 1]);
    }

    #[test]
    fn test_relevance_after_other_sort_restores_server_order() {
        let input = vec![
            product(1, "A", 10.0, Some(4.2)),
            product(2, "B", 5.0, Some(4.8)),
            product(3, "C", 7.5, Some(3.0)),
        ];
        // Re-deriving from the original set, as the controller does.
        let _displayed = sorted(&input, SortOrder::PriceAsc, &usd());
        assert_eq!(ids(&sorted(&input, SortOrder::Relevance, &usd())), [1, 2, 3]);
    }

    #[test]
    fn test_exchange_rate_does_not_change_order() {
        let input = vec![
            product(1, "A", 10.0, None),
            product(2, "B", 5.0, None),
        ];
        let eur = DisplayCurrency::new("EUR", "\u{20ac}", 0.9);
        assert_eq!(ids(&sorted(&input, SortOrder::PriceAsc, &eur)), [2, 1]);
    }

    #[test]
    fn test_from_str_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_str(order.as_str()), order);
        }
        assert_eq!(SortOrder::from_str("newest"), SortOrder::Relevance);
    }
}
