//! HTML rendering for the product search widget.
//!
//! Maps the domain types from `search-core` to presentational HTML:
//! cards, the detail overlay, and the idle/loading/empty/error states.
//! [`HtmlView`] ties it together behind the controller's `ResultView`
//! boundary.

mod availability;
mod card;
mod detail;
mod escape;
mod header;
mod states;
mod stars;
mod view;

pub use availability::Availability;
pub use card::{render_card, render_grid};
pub use detail::render_detail;
pub use escape::escape_html;
pub use header::render_search_header;
pub use states::{render_empty, render_error, render_idle, render_loading_skeleton, render_validation};
pub use stars::{render_rating, star_glyphs};
pub use view::HtmlView;
