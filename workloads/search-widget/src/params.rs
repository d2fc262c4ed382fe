//! URL parameter parsing.
//!
//! Interaction events reach the widget as query parameters: `q` for
//! submit, `sort` for sort-change, `product` for select-product
//! (its absence is close-detail).

use search_core::SortOrder;

/// Parameters for one widget request.
#[derive(Debug, Clone, Default)]
pub struct WidgetParams {
    /// Raw query text, unvalidated.
    pub q: Option<String>,
    /// Requested sort order.
    pub sort: SortOrder,
    /// Product open in the detail view.
    pub product: Option<u64>,
}

impl WidgetParams {
    /// Parse from a URL query string.
    pub fn from_query_string(qs: &str) -> Self {
        let mut params = WidgetParams::default();

        for pair in qs.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            let decoded = urlencoding_decode(value);

            match key {
                "q" => params.q = Some(decoded),
                "sort" => params.sort = SortOrder::from_str(&decoded),
                "product" => params.product = decoded.parse().ok(),
                _ => {}
            }
        }

        params
    }
}

/// Simple URL decoding.
///
/// `%XX` sequences are decoded byte-wise and the result is interpreted
/// as UTF-8, so multi-byte characters survive a decode/encode round
/// trip. Invalid sequences are replaced, not rejected.
fn urlencoding_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                bytes.push(byte);
            }
        } else if c == '+' {
            bytes.push(b' ');
        } else {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
