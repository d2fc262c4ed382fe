//! Product card grid.

use search_core::{DisplayCurrency, Product};

use crate::escape::escape_html;
use crate::stars::render_rating;

/// Render the results grid.
pub fn render_grid(products: &[Product], currency: &DisplayCurrency) -> String {
    let cards: String = products.iter().map(|p| render_card(p, currency)).collect();

    format!(
        r#"<section class="search-results" data-section="results">
    <div class="product-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Render a single product card.
pub fn render_card(product: &Product, currency: &DisplayCurrency) -> String {
    let image = match product.primary_image() {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape_html(url),
            escape_html(&product.title)
        ),
        None => r#"<div class="image-placeholder" aria-label="No image available"></div>"#
            .to_string(),
    };

    let brand = if product.brand.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="product-brand">{}</p>"#, escape_html(&product.brand))
    };

    let price = match product.original_price() {
        Some(original) => format!(
            r#"<span class="price-original">{}</span> {}"#,
            currency.format(original),
            currency.format(product.price)
        ),
        None => currency.format(product.price),
    };

    let stock_class = if product.stock > 10 {
        "in-stock"
    } else if product.stock > 0 {
        "low-stock"
    } else {
        "out-of-stock"
    };

    let stock_text = if product.stock > 10 {
        "In Stock".to_string()
    } else if product.stock > 0 {
        format!("Only {} left", product.stock)
    } else {
        "Out of Stock".to_string()
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <button class="product-link" onclick="openDetail({id})">
        <div class="product-image">
            {image}
        </div>
        <div class="product-info">
            {brand}
            <h3 class="product-title">{title}</h3>
            <div class="product-rating">{rating}</div>
            <div class="product-price">{price}</div>
            <div class="product-stock {stock_class}">{stock_text}</div>
        </div>
    </button>
</article>"#,
        id = product.id,
        image = image,
        brand = brand,
        title = escape_html(&product.title),
        rating = render_rating(product.rating_or_zero()),
        price = price,
        stock_class = stock_class,
        stock_text = stock_text,
    )
}
