//! Display-currency conversion and formatting.
//!
//! Catalog prices arrive in the source currency (USD for the reference
//! catalog). The widget displays them in a configured currency via a
//! fixed linear exchange rate. The conversion is presentation-only; it
//! never feeds back into the catalog.

use serde::{Deserialize, Serialize};

/// Currency the widget displays prices in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayCurrency {
    /// ISO code (e.g., "USD").
    pub code: String,
    /// Symbol prefixed to formatted amounts (e.g., "$").
    pub symbol: String,
    /// Multiplier from source currency to this currency.
    pub rate: f64,
}

impl DisplayCurrency {
    /// Create a display currency with an explicit exchange rate.
    pub fn new(code: impl Into<String>, symbol: impl Into<String>, rate: f64) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            rate,
        }
    }

    /// Convert an amount from the source currency.
    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.rate
    }

    /// Format a source-currency amount for display.
    pub fn format(&self, amount: f64) -> String {
        format!("{}{:.2}", self.symbol, self.convert(amount))
    }
}

impl Default for DisplayCurrency {
    fn default() -> Self {
        Self::new("USD", "$", 1.0)
    }
}
