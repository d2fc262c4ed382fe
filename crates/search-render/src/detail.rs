//! Product detail view.

use search_core::{DisplayCurrency, Product, Review};

use crate::availability::Availability;
use crate::escape::escape_html;
use crate::stars::{render_rating, star_glyphs};

/// Render the detail view for an activated product.
pub fn render_detail(product: &Product, currency: &DisplayCurrency) -> String {
    let availability = Availability::classify(product.availability_status.as_deref());

    format!(
        r#"<div class="detail-overlay" data-section="detail">
    <div class="detail-modal" role="dialog" aria-modal="true" aria-label="{title}">
        <button class="detail-close" onclick="closeDetail()" aria-label="Close">&times;</button>
        {gallery}
        <div class="detail-body">
            <h2 class="detail-title">{title}</h2>
            <div class="detail-rating">{rating}</div>
            <div class="detail-price">{price}</div>
            <div class="detail-availability {availability_class}">{availability_label}</div>
            <p class="detail-description">{description}</p>
            {specs}
            {reviews}
        </div>
    </div>
</div>"#,
        title = escape_html(&product.title),
        gallery = render_gallery(product),
        rating = render_rating(product.rating_or_zero()),
        price = render_price(product, currency),
        availability_class = availability.css_class(),
        availability_label = availability.label(),
        description = escape_html(&product.description),
        specs = render_specs(product),
        reviews = render_reviews(&product.reviews),
    )
}

fn render_gallery(product: &Product) -> String {
    let images = product.valid_images();

    let main = match product.primary_image() {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" class="detail-image-main">"#,
            escape_html(url),
            escape_html(&product.title)
        ),
        None => r#"<div class="image-placeholder" aria-label="No image available"></div>"#
            .to_string(),
    };

    let thumbnails: String = images
        .iter()
        .take(5)
        .map(|url| {
            format!(
                r#"<img src="{}" alt="" class="detail-thumbnail" onclick="swapImage(this)">"#,
                escape_html(url)
            )
        })
        .collect();

    format!(
        r#"<div class="detail-gallery">
        {main}
        <div class="detail-thumbnails">{thumbnails}</div>
    </div>"#,
    )
}

fn render_price(product: &Product, currency: &DisplayCurrency) -> String {
    match product.original_price() {
        Some(original) => format!(
            r#"<span class="price-original">{}</span> <span class="price-current">{}</span> <span class="discount-badge">-{:.0}%</span>"#,
            currency.format(original),
            currency.format(product.price),
            product.discount_percentage.unwrap_or(0.0)
        ),
        None => format!(
            r#"<span class="price-current">{}</span>"#,
            currency.format(product.price)
        ),
    }
}

fn render_specs(product: &Product) -> String {
    let mut rows = Vec::new();
    if !product.brand.is_empty() {
        rows.push(("Brand", escape_html(&product.brand)));
    }
    if !product.category.is_empty() {
        rows.push(("Category", escape_html(&product.category)));
    }
    rows.push(("Stock", product.stock.to_string()));

    let rows_html: String = rows
        .into_iter()
        .map(|(name, value)| {
            format!(
                r#"<tr><th scope="row">{}</th><td>{}</td></tr>"#,
                name, value
            )
        })
        .collect();

    format!(
        r#"<table class="detail-specs"><tbody>{}</tbody></table>"#,
        rows_html
    )
}

fn render_reviews(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return r#"<p class="no-reviews">No reviews yet.</p>"#.to_string();
    }

    let items: String = reviews.iter().map(render_single_review).collect();

    format!(
        r#"<section class="detail-reviews">
        <h3>Customer Reviews</h3>
        <div class="reviews-list">{}</div>
    </section>"#,
        items
    )
}

fn render_single_review(review: &Review) -> String {
    format!(
        r#"<article class="review">
        <header class="review-header">
            <span class="review-stars">{stars}</span>
            <span class="review-author">{author}</span>
            <span class="review-date">{date}</span>
        </header>
        <p class="review-body">{comment}</p>
    </article>"#,
        stars = star_glyphs(review.rating as f64),
        author = escape_html(&review.reviewer_name),
        date = escape_html(&review.date),
        comment = escape_html(&review.comment),
    )
}
