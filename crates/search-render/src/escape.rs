//! HTML escaping.

/// Escape text for safe insertion into HTML.
///
/// Every catalog- or user-supplied string goes through this before it
/// reaches the page; product titles and review comments are untrusted.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
