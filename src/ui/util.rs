use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest prefix of `s` that fits in `max_width` display columns.
/// Returns a borrowed slice; no allocation.
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Fit `s` into exactly `width` columns: truncate with an ellipsis, or pad on the right.
pub fn fit(s: &str, width: usize) -> String {
    if s.width() <= width {
        return format!("{}{}", s, " ".repeat(width - s.width()));
    }
    if width == 0 {
        return String::new();
    }
    let head = truncate_to_width(s, width - 1);
    format!("{}…{}", head, " ".repeat(width - 1 - head.width()))
}

/// Right-align `s` in `width` columns, truncating if needed.
pub fn fit_right(s: &str, width: usize) -> String {
    let head = truncate_to_width(s, width);
    format!("{}{}", " ".repeat(width - head.width()), head)
}
