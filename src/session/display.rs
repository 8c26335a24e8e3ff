//! Display helpers for session rows.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Turn a raw URL into a human-readable form for row display.
///
/// Strips the scheme and a leading `www.`, and drops a sole trailing slash.
/// Falls back to the raw string when stripping would leave nothing.
pub fn beautify_url(url: &str) -> String {
    let mut rest = url.trim();
    for scheme in ["https://", "http://"] {
        if let Some(stripped) = rest.strip_prefix(scheme) {
            rest = stripped;
            break;
        }
    }
    rest = rest.strip_prefix("www.").unwrap_or(rest);
    let rest = match rest.strip_suffix('/') {
        // Keep the slash when it is part of a path ("example.com/a/")
        Some(stripped) if !stripped.contains('/') => stripped,
        _ => rest,
    };

    if rest.is_empty() {
        url.to_string()
    } else {
        rest.to_string()
    }
}

/// Truncate `text` to at most `max_width` terminal cells, appending an
/// ellipsis when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
