//! Idle, loading, empty, and error displays.

use search_core::Query;

use crate::escape::escape_html;

/// Prompt shown before any search has run.
pub fn render_idle() -> String {
    r#"<section class="search-idle" data-section="results">
    <p>Search the catalog to see products.</p>
</section>"#
        .to_string()
}

/// Skeleton grid shown while a search is in flight.
pub fn render_loading_skeleton() -> String {
    let cards: String = (0..8)
        .map(|_| {
            r#"<div class="product-card skeleton">
        <div class="skeleton-image"></div>
        <div class="skeleton-text"></div>
        <div class="skeleton-text short"></div>
    </div>"#
        })
        .collect();

    format!(
        r#"<section class="search-results skeleton" data-section="results" aria-busy="true">
    <div class="product-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Shown when a search succeeded but matched nothing.
pub fn render_empty(query: &Query) -> String {
    format!(
        r#"<section class="search-empty" data-section="results">
    <h2>No results for &quot;{}&quot;</h2>
    <p>Try a different search term.</p>
</section>"#,
        escape_html(query.as_str())
    )
}

/// Generic error display for transport, HTTP, and parse failures.
pub fn render_error(message: &str) -> String {
    format!(
        r#"<section class="search-results error" data-section="results">
    <div class="error-state">
        <h2>Unable to load results</h2>
        <p>{}</p>
        <button onclick="location.reload()">Try Again</button>
    </div>
</section>"#,
        escape_html(message)
    )
}

/// Inline validation message next to the search input.
pub fn render_validation(message: &str) -> String {
    format!(
        r#"<p class="input-error" role="alert">{}</p>"#,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_core::validate;

    #[test]
    fn test_empty_echoes_query_escaped() {
        let q = validate("red <i>shoes</i>").unwrap();
        let html = render_empty(&q);
        assert!(html.contains("&lt;i&gt;shoes&lt;/i&gt;"));
        assert!(!html.contains("<i>shoes"));
    }

    #[test]
    fn test_error_includes_message() {
        let html = render_error("Catalog API returned status 500");
        assert!(html.contains("500"));
        assert!(html.contains("error-state"));
    }

    #[test]
    fn test_loading_is_marked_busy() {
        assert!(render_loading_skeleton().contains(r#"aria-busy="true""#));
    }

    #[test]
    fn test_validation_is_alert() {
        let html = render_validation("Please enter a search term");
        assert!(html.contains(r#"role="alert""#));
    }
}
