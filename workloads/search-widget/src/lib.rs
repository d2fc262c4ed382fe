//! Product search widget - Spin HTTP component.
//!
//! One GET request drives one pass through the widget: validate the
//! query, fetch from the catalog, sort, render. Interaction events
//! (submit, sort-change, select-product, close-detail) arrive as URL
//! parameters and reload the page.

mod params;
mod telemetry;

use async_trait::async_trait;
use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use search_core::{
    parse_response, search_url, Catalog, Query, SearchConfig, SearchController, SearchError,
    SearchResultSet, SearchState, ViewPhase,
};
use search_render::{escape_html, HtmlView};

use params::WidgetParams;
use telemetry::{LogLevel, RequestId, WidgetLogger};

/// Catalog client over the Spin outbound-HTTP host API.
struct SpinCatalog {
    config: SearchConfig,
}

#[async_trait(?Send)]
impl Catalog for SpinCatalog {
    async fn search(&self, query: &Query) -> Result<SearchResultSet, SearchError> {
        let url = search_url(&self.config, query);

        let req = spin_sdk::http::Request::builder()
            .method(Method::Get)
            .uri(&url)
            .header("accept", "application/json")
            .build();

        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        parse_response(query.clone(), *resp.status(), resp.body())
    }
}

/// Widget page handler.
#[http_component]
async fn handle_widget(req: IncomingRequest, response_out: ResponseOutparam) {
    if req.method() != Method::Get {
        let headers = Fields::from_list(&[]).unwrap();
        let response = OutgoingResponse::new(headers);
        response.set_status_code(405).unwrap();
        response_out.set(response);
        return;
    }

    let request_id = RequestId::generate();
    let logger = WidgetLogger::new(request_id.clone()).with_min_level(LogLevel::Info);

    let path_with_query = req.path_with_query().unwrap_or_default();
    let query_string = path_with_query.split('?').nth(1).unwrap_or("");
    let params = WidgetParams::from_query_string(query_string);

    logger
        .entry(LogLevel::Info, "widget request")
        .field("path", path_with_query.clone())
        .field("sort", params.sort.as_str())
        .emit();

    let config = SearchConfig::default();
    let currency = config.currency.clone();
    let controller = SearchController::new(SpinCatalog { config: config.clone() }, config);

    let mut state = SearchState::new();
    let mut view = HtmlView::new(currency);

    // Sort preference applies to the results of this request's search.
    state.sort = params.sort;

    if let Some(raw) = &params.q {
        controller.submit(&mut state, &mut view, raw).await;

        let level = if state.phase == ViewPhase::Failed {
            LogLevel::Warn
        } else {
            LogLevel::Info
        };
        logger
            .entry(level, "search finished")
            .field("phase", format!("{:?}", state.phase))
            .field(
                "total",
                state.current.as_ref().map(|s| s.total).unwrap_or(0),
            )
            .emit();

        if let Some(id) = params.product {
            controller.select_product(&mut state, &mut view, id);
        }
    }

    let page = render_page(&params, &view);
    logger.debug("page rendered");

    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), request_id.to_string().into()),
    ];
    let headers = Fields::from_list(&header_list).unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(200).unwrap();

    let mut body = response.take_body();
    response_out.set(response);

    if let Err(e) = body.send(page.into_bytes()).await {
        logger
            .entry(LogLevel::Error, "failed to send page")
            .field("error", e.to_string())
            .emit();
    }
}

/// Assemble the full page around the widget HTML.
fn render_page(params: &WidgetParams, view: &HtmlView) -> String {
    let query_attr = params
        .q
        .as_deref()
        .map(escape_html)
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Product Search</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>{styles}</style>
</head>
<body>
<header class="site-header">
    <form action="/" method="GET" class="search-form">
        <input type="search" name="q" value="{query_attr}" placeholder="Search products..." aria-label="Search">
        <button type="submit">Search</button>
    </form>
</header>
<main>
{widget}
</main>
{scripts}
</body>
</html>"#,
        styles = WIDGET_STYLES,
        query_attr = query_attr,
        widget = view.html(),
        scripts = widget_scripts(),
    )
}

fn widget_scripts() -> String {
    r#"<script>
function updateSort(value) {
    const url = new URL(window.location);
    url.searchParams.set('sort', value);
    url.searchParams.delete('product');
    window.location = url;
}

function openDetail(id) {
    const url = new URL(window.location);
    url.searchParams.set('product', id);
    window.location = url;
}

function closeDetail() {
    const url = new URL(window.location);
    url.searchParams.delete('product');
    window.location = url;
}

function swapImage(thumb) {
    const main = document.querySelector('.detail-image-main');
    if (main) {
        main.src = thumb.src;
    }
}

// Refocus the input when validation failed
const inputError = document.querySelector('.input-error');
if (inputError) {
    document.querySelector('input[name=q]')?.focus();
}
</script>"#
        .to_string()
}

const WIDGET_STYLES: &str = r##"
:root {
    --primary: #2563eb;
    --bg: #f8fafc;
    --card-bg: #ffffff;
    --text: #1e293b;
    --text-muted: #64748b;
    --border: #e2e8f0;
    --success: #22c55e;
    --warning: #f59e0b;
    --error: #ef4444;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.site-header {
    display: flex;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
}

.search-form {
    display: flex;
    flex: 1;
    max-width: 600px;
    margin: 0 auto;
}

.search-form input {
    flex: 1;
    padding: 0.75rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px 0 0 8px;
    font-size: 1rem;
}

.search-form button {
    padding: 0.75rem 1.5rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 0 8px 8px 0;
    cursor: pointer;
    font-weight: 500;
}

main {
    max-width: 1200px;
    margin: 0 auto;
    padding: 2rem;
}

.input-error {
    color: var(--error);
    margin-bottom: 1rem;
}

.search-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1.5rem;
    padding-bottom: 1rem;
    border-bottom: 1px solid var(--border);
}

.result-count { color: var(--text-muted); }

.sort-control select {
    padding: 0.5rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: var(--card-bg);
}

.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 1.5rem;
}

.product-card {
    background: var(--card-bg);
    border-radius: 12px;
    overflow: hidden;
    transition: box-shadow 0.2s;
}

.product-card:hover { box-shadow: 0 4px 12px rgba(0,0,0,0.1); }

.product-link {
    display: block;
    width: 100%;
    text-align: left;
    background: none;
    border: none;
    cursor: pointer;
    color: inherit;
    font: inherit;
}

.product-image, .image-placeholder {
    aspect-ratio: 1;
    overflow: hidden;
    background: #f1f5f9;
}

.product-image img { width: 100%; height: 100%; object-fit: contain; }

.product-info { padding: 1rem; }

.product-brand { color: var(--text-muted); font-size: 0.8125rem; }

.product-title {
    font-size: 1rem;
    font-weight: 500;
    margin-bottom: 0.5rem;
}

.stars { color: var(--warning); }
.rating-value { color: var(--text-muted); font-size: 0.875rem; margin-left: 0.25rem; }

.product-price { font-size: 1.25rem; font-weight: 700; }
.price-original { text-decoration: line-through; color: var(--text-muted); font-weight: 400; }
.discount-badge { color: var(--error); font-weight: 600; }

.product-stock { font-size: 0.875rem; }
.in-stock { color: var(--success); }
.low-stock { color: var(--warning); }
.out-of-stock { color: var(--error); }

.search-idle, .search-empty, .error-state {
    text-align: center;
    padding: 4rem 2rem;
    color: var(--text-muted);
}

.error-state h2 { color: var(--text); margin-bottom: 0.5rem; }

.error-state button {
    margin-top: 1rem;
    padding: 0.75rem 2rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 8px;
    cursor: pointer;
}

.skeleton .skeleton-image { aspect-ratio: 1; background: #e2e8f0; }

.skeleton .skeleton-text {
    height: 1rem;
    margin: 0.5rem 1rem;
    background: linear-gradient(90deg, #e2e8f0 25%, #f1f5f9 50%, #e2e8f0 75%);
    background-size: 200% 100%;
    animation: shimmer 1.5s infinite;
    border-radius: 4px;
}

.skeleton .skeleton-text.short { width: 40%; }

@keyframes shimmer {
    0% { background-position: 200% 0; }
    100% { background-position: -200% 0; }
}

.detail-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0,0,0,0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 2rem;
    z-index: 100;
}

.detail-modal {
    background: var(--card-bg);
    border-radius: 12px;
    max-width: 800px;
    max-height: 90vh;
    overflow-y: auto;
    padding: 2rem;
    position: relative;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
}

.detail-close {
    position: absolute;
    top: 0.75rem;
    right: 0.75rem;
    background: none;
    border: none;
    font-size: 1.5rem;
    cursor: pointer;
    color: var(--text-muted);
}

.detail-image-main { width: 100%; aspect-ratio: 1; object-fit: contain; background: #f1f5f9; }

.detail-thumbnails { display: flex; gap: 0.5rem; margin-top: 0.5rem; }

.detail-thumbnail {
    width: 56px;
    height: 56px;
    object-fit: contain;
    background: #f1f5f9;
    border: 1px solid var(--border);
    border-radius: 6px;
    cursor: pointer;
}

.detail-title { margin-bottom: 0.5rem; }
.detail-price { font-size: 1.5rem; font-weight: 700; margin: 0.5rem 0; }
.detail-availability { font-weight: 600; margin-bottom: 0.75rem; }
.detail-description { color: var(--text-muted); margin-bottom: 1rem; }

.detail-specs { width: 100%; border-collapse: collapse; margin-bottom: 1rem; }
.detail-specs th, .detail-specs td {
    text-align: left;
    padding: 0.375rem 0;
    border-bottom: 1px solid var(--border);
    font-size: 0.9375rem;
}
.detail-specs th { color: var(--text-muted); font-weight: 500; }

.detail-reviews h3 { margin-bottom: 0.75rem; }

.review {
    padding: 0.75rem 0;
    border-bottom: 1px solid var(--border);
}

.review-header { display: flex; gap: 0.75rem; font-size: 0.875rem; }
.review-stars { color: var(--warning); }
.review-author { font-weight: 600; }
.review-date { color: var(--text-muted); }
.review-body { margin-top: 0.25rem; font-size: 0.9375rem; }

@media (max-width: 640px) {
    .product-grid { grid-template-columns: repeat(2, 1fr); gap: 1rem; }
    .detail-modal { grid-template-columns: 1fr; }
}
"##;
