//! Star-glyph rating rendering.

/// Render a rating as a 5-glyph star string.
///
/// floor(rating) full stars, one half star when the fractional part is
/// at least 0.5, the rest empty. Ratings outside 0..=5 are clamped.
pub fn star_glyphs(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = if rating.fract() >= 0.5 { 1 } else { 0 };
    let empty = 5 - full - half;

    format!(
        "{}{}{}",
        "\u{2605}".repeat(full),
        if half > 0 { "\u{2be8}" } else { "" },
        "\u{2606}".repeat(empty)
    )
}

/// Stars plus the numeric value rounded to one decimal place.
pub fn render_rating(rating: f64) -> String {
    format!(
        r#"<span class="stars">{}</span><span class="rating-value">{:.1}</span>"#,
        star_glyphs(rating),
        rating
    )
}
