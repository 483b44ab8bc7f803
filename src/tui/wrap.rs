//! Display-width word wrapping for card text.

use unicode_segmentation::UnicodeSegmentation;

use crate::util::unicode;

/// Word-wrap `text` into lines of at most `max_width` terminal cells.
///
/// Breaks at whitespace; a single word wider than the limit is split hard at
/// a grapheme boundary. Returns no lines for empty text.
pub fn wrap_width(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || text.trim().is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = unicode::display_width(word);
        let space = if current.is_empty() { 0 } else { 1 };

        if current_width + space + word_width <= max_width {
            if space == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += space + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            // Hard-split an oversized word
            for g in word.graphemes(true) {
                let gw = unicode::grapheme_display_width(g);
                if current_width + gw > max_width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push_str(g);
                current_width += gw;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
