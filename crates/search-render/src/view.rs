//! HTML implementation of the controller's view boundary.

use search_core::{DisplayCurrency, Product, Query, ResultView, SearchResultSet, SortOrder};

use crate::card::render_grid;
use crate::detail::render_detail;
use crate::header::render_search_header;
use crate::states::{
    render_empty, render_error, render_idle, render_loading_skeleton, render_validation,
};

/// Collects the widget's HTML as the controller drives it.
///
/// Holds one body section (idle/loading/results/empty/error), an
/// optional inline validation message, and an optional detail overlay.
/// The host assembles them into the page with [`HtmlView::html`].
pub struct HtmlView {
    currency: DisplayCurrency,
    message: Option<String>,
    body: String,
    detail: Option<String>,
}

impl HtmlView {
    pub fn new(currency: DisplayCurrency) -> Self {
        Self {
            currency,
            message: None,
            body: render_idle(),
            detail: None,
        }
    }

    /// The assembled widget HTML.
    pub fn html(&self) -> String {
        let mut out = String::new();
        if let Some(message) = &self.message {
            out.push_str(message);
            out.push('\n');
        }
        out.push_str(&self.body);
        if let Some(detail) = &self.detail {
            out.push('\n');
            out.push_str(detail);
        }
        out
    }
}

impl ResultView for HtmlView {
    fn show_loading(&mut self) {
        self.message = None;
        self.detail = None;
        self.body = render_loading_skeleton();
    }

    fn show_results(&mut self, set: &SearchResultSet, displayed: &[Product], order: SortOrder) {
        self.body = format!(
            "{}\n{}",
            render_search_header(&set.query, set.total, order),
            render_grid(displayed, &self.currency)
        );
    }

    fn show_empty(&mut self, query: &Query) {
        self.body = render_empty(query);
    }

    fn show_error(&mut self, message: &str) {
        self.body = render_error(message);
    }

    fn show_validation(&mut self, message: &str) {
        self.message = Some(render_validation(message));
    }

    fn show_detail(&mut self, product: &Product) {
        self.detail = Some(render_detail(product, &self.currency));
    }

    fn close_detail(&mut self) {
        self.detail = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_core::validate;

    fn product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            price,
            rating: None,
            images: Vec::new(),
            thumbnail: None,
            brand: String::new(),
            category: String::new(),
            stock: 5,
            availability_status: None,
            discount_percentage: None,
            reviews: Vec::new(),
        }
    }

    fn set(query: &str, products: Vec<Product>) -> SearchResultSet {
        let total = products.len() as u64;
        SearchResultSet {
            products,
            total,
            query: validate(query).unwrap(),
        }
    }

    #[test]
    fn test_starts_idle() {
        let view = HtmlView::new(DisplayCurrency::default());
        assert!(view.html().contains("search-idle"));
    }

    #[test]
    fn test_results_replace_body() {
        let mut view = HtmlView::new(DisplayCurrency::default());
        view.show_loading();
        assert!(view.html().contains("skeleton"));

        let s = set("ab", vec![product(1, "A", 2.0)]);
        view.show_results(&s, &s.products, SortOrder::Relevance);
        let html = view.html();
        assert!(html.contains("search-header"));
        assert!(html.contains(r#"data-product-id="1""#));
        assert!(!html.contains("skeleton"));
    }

    #[test]
    fn test_loading_clears_message_and_detail() {
        let mut view = HtmlView::new(DisplayCurrency::default());
        view.show_validation("too short");
        view.show_detail(&product(1, "A", 2.0));
        view.show_loading();
        let html = view.html();
        assert!(!html.contains("input-error"));
        assert!(!html.contains("detail-overlay"));
    }

    #[test]
    fn test_detail_overlays_results() {
        let mut view = HtmlView::new(DisplayCurrency::default());
        let s = set("ab", vec![product(1, "A", 2.0)]);
        view.show_results(&s, &s.products, SortOrder::Relevance);
        view.show_detail(&s.products[0]);
        assert!(view.html().contains("detail-overlay"));

        view.close_detail();
        assert!(!view.html().contains("detail-overlay"));
    }
}
