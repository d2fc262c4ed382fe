//! Availability classification for the detail view.

/// Stock availability buckets used for styling and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    InStock,
    LowStock,
    OutOfStock,
}

impl Availability {
    /// Classify free-form catalog availability text.
    ///
    /// Case-insensitive substring match; text that matches nothing (or
    /// a missing field) counts as in stock.
    pub fn classify(text: Option<&str>) -> Self {
        let text = match text {
            Some(t) => t.to_lowercase(),
            None => return Availability::InStock,
        };

        if text.contains("out of stock") {
            Availability::OutOfStock
        } else if text.contains("low stock") {
            Availability::LowStock
        } else {
            Availability::InStock
        }
    }

    /// CSS class for the status line.
    pub fn css_class(&self) -> &'static str {
        match self {
            Availability::InStock => "in-stock",
            Availability::LowStock => "low-stock",
            Availability::OutOfStock => "out-of-stock",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Availability::InStock => "In Stock",
            Availability::LowStock => "Low Stock",
            Availability::OutOfStock => "Out of Stock",
        }
    }
}
