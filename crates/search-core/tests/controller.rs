//! Controller flow tests against a canned catalog and a recording view.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::executor::block_on;

use search_core::{
    parse_response, validate, Catalog, Product, Query, ResultView, SearchConfig, SearchController,
    SearchError, SearchResultSet, SearchState, SortOrder, ViewPhase,
};

fn product(id: u64, title: &str, price: f64, rating: Option<f64>) -> Product {
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

fn canned_set(query: &str, products: Vec<Product>) -> SearchResultSet {
    let total = products.len() as u64;
    SearchResultSet {
        products,
        total,
        query: validate(query).unwrap(),
    }
}

/// Catalog that replays queued responses in order.
struct CannedCatalog {
    responses: RefCell<VecDeque<Result<SearchResultSet, SearchError>>>,
}

impl CannedCatalog {
    fn new(responses: Vec<Result<SearchResultSet, SearchError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
        }
    }
}

#[async_trait(?Send)]
impl Catalog for CannedCatalog {
    async fn search(&self, _query: &Query) -> Result<SearchResultSet, SearchError> {
        self.responses
            .borrow_mut()
            .pop_front()
            .expect("catalog called more times than responses queued")
    }
}

/// View that records every call it receives.
#[derive(Default)]
struct RecordingView {
    calls: Vec<String>,
}

impl RecordingView {
    fn last(&self) -> &str {
        self.calls.last().map(String::as_str).unwrap_or("")
    }
}

impl ResultView for RecordingView {
    fn show_loading(&mut self) {
        self.calls.push("loading".to_string());
    }

    fn show_results(&mut self, _set: &SearchResultSet, displayed: &[Product], order: SortOrder) {
        let ids: Vec<String> = displayed.iter().map(|p| p.id.to_string()).collect();
        self.calls
            .push(format!("results:{}:{}", order.as_str(), ids.join(",")));
    }

    fn show_empty(&mut self, query: &Query) {
        self.calls.push(format!("empty:{}", query.as_str()));
    }

    fn show_error(&mut self, message: &str) {
        self.calls.push(format!("error:{}", message));
    }

    fn show_validation(&mut self, message: &str) {
        self.calls.push(format!("validation:{}", message));
    }

    fn show_detail(&mut self, product: &Product) {
        self.calls.push(format!("detail:{}", product.id));
    }

    fn close_detail(&mut self) {
        self.calls.push("close".to_string());
    }
}

fn controller(
    responses: Vec<Result<SearchResultSet, SearchError>>,
) -> SearchController<CannedCatalog> {
    SearchController::new(CannedCatalog::new(responses), SearchConfig::default())
}

#[test]
fn submit_reaches_results_in_relevance_order() {
    let set = canned_set(
        "ab",
        vec![product(1, "A", 10.0, Some(4.2)), product(2, "B", 5.0, Some(4.8))],
    );
    let ctrl = controller(vec![Ok(set)]);
    let mut state = SearchState::new();
    let mut view = RecordingView::default();

    block_on(ctrl.submit(&mut state, &mut view, "ab"));

    assert_eq!(state.phase, ViewPhase::Results);
    assert_eq!(view.calls, ["loading", "results:relevance:1,2"]);
    assert!(state.current.is_some());
}

#[test]
fn empty_results_reach_no_results_not_failed() {
    let ctrl = controller(vec![Ok(canned_set("ab", vec![]))]);
    let mut state = SearchState::new();
    let mut view = RecordingView::default();

    block_on(ctrl.submit(&mut state, &mut view, "ab"));

    assert_eq!(state.phase, ViewPhase::NoResults);
    assert_eq!(view.last(), "empty:ab");
}

#[test]
fn http_500_reaches_failed_with_status_in_message() {
    let ctrl = controller(vec![Err(SearchError::Http { status: 500 })]);
    let mut state = SearchState::new();
    let mut view = RecordingView::default();

    block_on(ctrl.submit(&mut state, &mut view, "ab"));

    assert_eq!(state.phase, ViewPhase::Failed);
    assert!(view.last().starts_with("error:"));
    assert!(view.last().contains("500"));
}

#[test]
fn wire_level_500_maps_to_http_error() {
    let err = parse_response(validate("ab").unwrap(), 500, b"server error").unwrap_err();
    assert!(matches!(err, SearchError::Http { status: 500 }));
}

#[test]
fn validation_failure_shows_inline_message_and_keeps_phase() {
    let ctrl = controller(vec![]);
    let mut state = SearchState::new();
    let mut view = RecordingView::default();

    block_on(ctrl.submit(&mut state, &mut view, "   "));
    assert_eq!(state.phase, ViewPhase::Idle);
    assert!(view.last().starts_with("validation:"));

    block_on(ctrl.submit(&mut state, &mut view, " x "));
    assert_eq!(state.phase, ViewPhase::Idle);
    assert_eq!(state.seq, 0, "no request issued for invalid input");
}

#[test]
fn resubmission_returns_to_loading_and_clears_selection() {
    let first = canned_set("ab", vec![product(1, "A", 1.0, None)]);
    let second = canned_set("cd", vec![product(2, "B", 2.0, None)]);
    let ctrl = controller(vec![Ok(first), Ok(second)]);
    let mut state = SearchState::new();
    let mut view = RecordingView::default();

    block_on(ctrl.submit(&mut state, &mut view, "ab"));
    ctrl.select_product(&mut state, &mut view, 1);
    assert_eq!(state.selected, Some(1));

    block_on(ctrl.submit(&mut state, &mut view, "cd"));
    assert_eq!(state.phase, ViewPhase::Results);
    assert_eq!(state.selected, None);
    assert_eq!(view.last(), "results:relevance:2");
}

#[test]
fn stale_response_is_discarded() {
    let ctrl = controller(vec![]);
    let mut state = SearchState::new();
    let mut view = RecordingView::default();

    // Two submissions race; the first response arrives last.
    let first = ctrl.begin_search(&mut state, &mut view, "ab").unwrap();
    let second = ctrl.begin_search(&mut state, &mut view, "cd").unwrap();
    assert!(second.seq > first.seq);

    ctrl.finish_search(
        &mut state,
        &mut view,
        second.seq,
        Ok(canned_set("cd", vec![product(2, "B", 2.0, None)])),
    );
    assert_eq!(state.phase, ViewPhase::Results);

    // The slow first response must not overwrite the newer display.
    ctrl.finish_search(
        &mut state,
        &mut view,
        first.seq,
        Ok(canned_set("ab", vec![product(1, "A", 1.0, None)])),
    );
    assert_eq!(state.phase, ViewPhase::Results);
    assert_eq!(view.last(), "results:relevance:2");
    let current = state.current.as_ref().unwrap();
    assert_eq!(current.query.as_str(), "cd");
}

#[test]
fn stale_error_is_also_discarded() {
    let ctrl = controller(vec![]);
    let mut state = SearchState::new();
    let mut view = RecordingView::default();

    let first = ctrl.begin_search(&mut state, &mut view, "ab").unwrap();
    let second = ctrl.begin_search(&mut state, &mut view, "cd").unwrap();

    ctrl.finish_search(
        &mut state,
        &mut view,
        second.seq,
        Ok(canned_set("cd", vec![product(2, "B", 2.0, None)])),
    );
    ctrl.finish_search(
        &mut state,
        &mut view,
        first.seq,
        Err(SearchError::Transport("timed out".into())),
    );

    assert_eq!(state.phase, ViewPhase::Results);
}

#[test]
fn sort_change_rerenders_without_phase_transition() {
    let set = canned_set(
        "ab",
        vec![product(1, "A", 10.0, Some(4.2)), product(2, "B", 5.0, Some(4.8))],
    );
    let ctrl = controller(vec![Ok(set)]);
    let mut state = SearchState::new();
    let mut view = RecordingView::default();

    block_on(ctrl.submit(&mut state, &mut view, "ab"));

    ctrl.change_sort(&mut state, &mut view, SortOrder::PriceAsc);
    assert_eq!(state.phase, ViewPhase::Results);
    assert_eq!(view.last(), "results:price_asc:2,1");

    ctrl.change_sort(&mut state, &mut view, SortOrder::RatingDesc);
    assert_eq!(view.last(), "results:rating:2,1");

    // Back to relevance restores the server order, not the displayed one.
    ctrl.change_sort(&mut state, &mut view, SortOrder::Relevance);
    assert_eq!(view.last(), "results:relevance:1,2");
}

#[test]
fn sort_change_outside_results_only_updates_preference() {
    let ctrl = controller(vec![]);
    let mut state = SearchState::new();
    let mut view = RecordingView::default();

    ctrl.change_sort(&mut state, &mut view, SortOrder::PriceDesc);
    assert_eq!(state.phase, ViewPhase::Idle);
    assert_eq!(state.sort, SortOrder::PriceDesc);
    assert!(view.calls.is_empty());
}

#[test]
fn sort_preference_applies_to_next_results() {
    let set = canned_set(
        "ab",
        vec![product(1, "A", 10.0, None), product(2, "B", 5.0, None)],
    );
    let ctrl = controller(vec![Ok(set)]);
    let mut state = SearchState::new();
    let mut view = RecordingView::default();

    ctrl.change_sort(&mut state, &mut view, SortOrder::PriceAsc);
    block_on(ctrl.submit(&mut state, &mut view, "ab"));

    assert_eq!(view.last(), "results:price_asc:2,1");
}

#[test]
fn select_and_close_detail() {
    let set = canned_set("ab", vec![product(1, "A", 10.0, None)]);
    let ctrl = controller(vec![Ok(set)]);
    let mut state = SearchState::new();
    let mut view = RecordingView::default();

    block_on(ctrl.submit(&mut state, &mut view, "ab"));

    ctrl.select_product(&mut state, &mut view, 1);
    assert_eq!(state.selected, Some(1));
    assert_eq!(view.last(), "detail:1");

    // Unknown id is ignored.
    ctrl.select_product(&mut state, &mut view, 99);
    assert_eq!(state.selected, Some(1));

    ctrl.close_detail(&mut state, &mut view);
    assert_eq!(state.selected, None);
    assert_eq!(view.last(), "close");
}

#[test]
fn transport_failure_keeps_widget_searchable() {
    let retry_set = canned_set("ab", vec![product(1, "A", 1.0, None)]);
    let ctrl = controller(vec![
        Err(SearchError::Transport("connection refused".into())),
        Ok(retry_set),
    ]);
    let mut state = SearchState::new();
    let mut view = RecordingView::default();

    block_on(ctrl.submit(&mut state, &mut view, "ab"));
    assert_eq!(state.phase, ViewPhase::Failed);

    block_on(ctrl.submit(&mut state, &mut view, "ab"));
    assert_eq!(state.phase, ViewPhase::Results);
}
