//! Shared utility functions

use unicode_width::UnicodeWidthChar;

/// Truncate a string to at most `max_cols` terminal columns, appending an
/// ellipsis when anything was cut.
///
/// Column width is the rendered width (`unicode-width`), not the byte or
/// char count, so CJK and emoji don't overflow card cells or the toast.
pub fn truncate_to_width(s: &str, max_cols: usize) -> String {
    if max_cols == 0 {
        return String::new();
    }

    let total: usize = s.chars().filter_map(|c| c.width()).sum();
    if total <= max_cols {
        return s.to_string();
    }

    // Reserve one column for the ellipsis.
    let limit = max_cols.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn long_ascii_gets_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn wide_chars_count_double() {
        // Each CJK character occupies two columns.
        assert_eq!(truncate_to_width("日本語テスト", 5), "日本…");
    }

    #[test]
    fn zero_width_limit_yields_empty() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }
}
