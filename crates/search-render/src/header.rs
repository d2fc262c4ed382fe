//! Search header: query echo, result count, sort control.

use search_core::{Query, SortOrder};

use crate::escape::escape_html;

/// Render the header shown above a non-empty result grid.
pub fn render_search_header(query: &Query, total: u64, sort: SortOrder) -> String {
    let sort_html: String = SortOrder::ALL
        .iter()
        .map(|opt| {
            let selected = if *opt == sort { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                opt.as_str(),
                selected,
                opt.display_name()
            )
        })
        .collect();

    let result_text = if total == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", total)
    };

    format!(
        r#"<section class="search-header" data-section="search-header">
    <div class="search-info">
        <h1>Results for &quot;{}&quot;</h1>
        <p class="result-count">{}</p>
    </div>
    <div class="sort-control">
        <label for="sort">Sort by:</label>
        <select id="sort" name="sort" onchange="updateSort(this.value)">
            {}
        </select>
    </div>
</section>"#,
        escape_html(query.as_str()),
        result_text,
        sort_html
    )
}
