//! Shared text layout utilities.
//!
//! All helpers count `char`s rather than bytes, so titles with non-ASCII
//! characters are never split mid-codepoint.

/// Truncates `text` to at most `width` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use hnsearch::ui::helpers::truncate;
///
/// assert_eq!(truncate("Hacker News", 8), "Hacke...");
/// assert_eq!(truncate("HN", 8), "HN");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

/// Truncates or right-pads `text` to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let truncated = truncate(text, width);
    let len = truncated.chars().count();
    format!("{truncated}{}", " ".repeat(width.saturating_sub(len)))
}

/// Centers `text` within `width` characters, truncating if it doesn't fit.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let truncated = truncate(text, width);
    let len = truncated.chars().count();
    let left = width.saturating_sub(len) / 2;
    format!("{}{truncated}", " ".repeat(left))
}
