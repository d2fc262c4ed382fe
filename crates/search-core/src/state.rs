//! Explicit widget state.
//!
//! The controller threads a [`SearchState`] value through every handler
//! instead of keeping ambient fields, so the whole search flow is
//! testable without a UI host.

use crate::product::SearchResultSet;
use crate::sort::SortOrder;

/// View-level display phase.
///
/// Submit enters `Loading`; exactly one of the three terminal phases is
/// entered per search. Sort changes never transition the phase, they
/// only re-render within `Results`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Nothing searched yet.
    Idle,
    /// A search is in flight.
    Loading,
    /// A non-empty result set is displayed.
    Results,
    /// The search succeeded but matched nothing.
    NoResults,
    /// The search failed; the error display is shown.
    Failed,
}

/// The widget's entire mutable state.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Current display phase.
    pub phase: ViewPhase,
    /// Last fetched result set, in server (relevance) order. Replaced
    /// wholesale on each successful fetch.
    pub current: Option<SearchResultSet>,
    /// Active sort order; persists across searches.
    pub sort: SortOrder,
    /// Product currently open in the detail view.
    pub selected: Option<u64>,
    /// Sequence number of the most recent submission. Responses tagged
    /// with an older number are stale and must be discarded.
    pub seq: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            phase: ViewPhase::Idle,
            current: None,
            sort: SortOrder::Relevance,
            selected: None,
            seq: 0,
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
