//! Search controller.
//!
//! Orchestrates validate -> fetch -> sort -> render. The controller owns
//! no display state of its own; everything lives in the [`SearchState`]
//! passed into each handler, and all output goes through the
//! [`ResultView`] boundary.

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::product::{Product, SearchResultSet};
use crate::query::{validate, Query};
use crate::sort::{sorted, SortOrder};
use crate::state::{SearchState, ViewPhase};

/// Presentation boundary.
///
/// The controller hands the view plain data and receives nothing back;
/// interaction events arrive through the controller's handlers instead.
pub trait ResultView {
    /// A search was submitted; clear any prior display.
    fn show_loading(&mut self);
    /// Display a non-empty result set. `displayed` is already in the
    /// requested order; `set` keeps the server order.
    fn show_results(&mut self, set: &SearchResultSet, displayed: &[Product], order: SortOrder);
    /// The search succeeded but matched nothing.
    fn show_empty(&mut self, query: &Query);
    /// The search failed; show the generic error display.
    fn show_error(&mut self, message: &str);
    /// Local validation failed; show an inline message and refocus the
    /// input. The display phase is untouched.
    fn show_validation(&mut self, message: &str);
    /// Open the detail view for a product.
    fn show_detail(&mut self, product: &Product);
    /// Close the detail view.
    fn close_detail(&mut self);
}

/// A submission that passed validation and was stamped with a sequence
/// number. The catalog response must be handed back to
/// [`SearchController::finish_search`] together with this number.
#[derive(Debug, Clone)]
pub struct PendingSearch {
    pub query: Query,
    pub seq: u64,
}

/// Orchestrates the widget over a catalog and a view.
pub struct SearchController<C> {
    catalog: C,
    config: SearchConfig,
}

impl<C: Catalog> SearchController<C> {
    pub fn new(catalog: C, config: SearchConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Handle a submit event end to end.
    pub async fn submit(&self, state: &mut SearchState, view: &mut dyn ResultView, raw: &str) {
        let Some(pending) = self.begin_search(state, view, raw) else {
            return;
        };
        let result = self.catalog.search(&pending.query).await;
        self.finish_search(state, view, pending.seq, result);
    }

    /// Validate the input and enter `Loading`.
    ///
    /// Returns `None` when validation fails; the inline message has
    /// already been shown and the display phase is unchanged.
    pub fn begin_search(
        &self,
        state: &mut SearchState,
        view: &mut dyn ResultView,
        raw: &str,
    ) -> Option<PendingSearch> {
        let query = match validate(raw) {
            Ok(q) => q,
            Err(e) => {
                view.show_validation(&e.to_string());
                return None;
            }
        };

        state.seq += 1;
        state.phase = ViewPhase::Loading;
        state.selected = None;
        view.show_loading();

        Some(PendingSearch {
            query,
            seq: state.seq,
        })
    }

    /// Apply a catalog response.
    ///
    /// A response whose sequence number is not the latest submission is
    /// stale: a newer search owns the display, so the response is
    /// dropped without touching state or view.
    pub fn finish_search(
        &self,
        state: &mut SearchState,
        view: &mut dyn ResultView,
        seq: u64,
        result: Result<SearchResultSet, SearchError>,
    ) {
        if seq != state.seq {
            return;
        }

        match result {
            Ok(set) if set.is_empty() => {
                let query = set.query.clone();
                state.current = Some(set);
                state.phase = ViewPhase::NoResults;
                view.show_empty(&query);
            }
            Ok(set) => {
                let displayed = sorted(&set.products, state.sort, &self.config.currency);
                view.show_results(&set, &displayed, state.sort);
                state.current = Some(set);
                state.phase = ViewPhase::Results;
            }
            Err(e) => {
                state.phase = ViewPhase::Failed;
                view.show_error(&e.to_string());
            }
        }
    }

    /// Handle a sort-change event.
    ///
    /// Always re-derives from the stored relevance-ordered set, never
    /// from the currently displayed order.
    pub fn change_sort(&self, state: &mut SearchState, view: &mut dyn ResultView, order: SortOrder) {
        state.sort = order;
        if state.phase != ViewPhase::Results {
            return;
        }
        if let Some(set) = &state.current {
            let displayed = sorted(&set.products, order, &self.config.currency);
            view.show_results(set, &displayed, order);
        }
    }

    /// Handle a select-product event. Unknown ids are ignored.
    pub fn select_product(&self, state: &mut SearchState, view: &mut dyn ResultView, id: u64) {
        let product = state
            .current
            .as_ref()
            .and_then(|set| set.products.iter().find(|p| p.id == id));

        if let Some(product) = product {
            view.show_detail(product);
            state.selected = Some(id);
        }
    }

    /// Handle a close-detail event.
    pub fn close_detail(&self, state: &mut SearchState, view: &mut dyn ResultView) {
        state.selected = None;
        view.close_detail();
    }
}
