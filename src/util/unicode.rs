use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Display width of a grapheme cluster
pub fn grapheme_display_width(g: &str) -> usize {
    UnicodeWidthStr::width(g)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…`
/// if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    if let Some((i, _)) = s[byte_offset..].grapheme_indices(true).nth(1) {
        return Some(byte_offset + i);
    }
    Some(s.len())
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    let prefix = &s[..byte_offset];
    let mut last_start = 0;
    for (i, _) in prefix.grapheme_indices(true) {
        last_start = i;
    }
    Some(last_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_mixed() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("hello你好"), 9);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_basic() {
        assert_eq!(truncate_to_width("hi", 10), "hi");
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello world", 8), "hello w\u{2026}");
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
    }

    #[test]
    fn truncate_respects_wide_graphemes() {
        // "你好世界" is 8 cells; truncating to 5 keeps "你好" (4) + "…" (1)
        assert_eq!(truncate_to_width("你好世界", 5), "你好\u{2026}");
        let result = truncate_to_width("你好世界", 4);
        assert!(display_width(&result) <= 4);
        assert!(result.ends_with('\u{2026}'));
    }

    #[test]
    fn grapheme_boundaries_ascii() {
        assert_eq!(next_grapheme_boundary("hello", 0), Some(1));
        assert_eq!(next_grapheme_boundary("hello", 4), Some(5));
        assert_eq!(next_grapheme_boundary("hello", 5), None);
        assert_eq!(prev_grapheme_boundary("hello", 5), Some(4));
        assert_eq!(prev_grapheme_boundary("hello", 1), Some(0));
        assert_eq!(prev_grapheme_boundary("hello", 0), None);
    }

    #[test]
    fn grapheme_boundaries_combining() {
        let s = "cafe\u{0301}!"; // café!
        // Graphemes: c(0), a(1), f(2), é(3..6), !(6)
        assert_eq!(next_grapheme_boundary(s, 3), Some(6));
        assert_eq!(prev_grapheme_boundary(s, 6), Some(3));
    }

    #[test]
    fn grapheme_boundaries_emoji() {
        let s = "a🎉b";
        assert_eq!(next_grapheme_boundary(s, 1), Some(5));
        assert_eq!(prev_grapheme_boundary(s, 5), Some(1));
    }
}
