//! Visible width of rendered text.

use emojis::get as emoji_get;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::escape_len;

const TAB_WIDTH: usize = 3;

pub fn grapheme_width(grapheme: &str) -> usize {
    match grapheme {
        "" => 0,
        "\t" => TAB_WIDTH,
        _ if emoji_get(grapheme).is_some() => 2,
        _ => grapheme
            .chars()
            .map(|ch| match ch {
                '\t' => TAB_WIDTH,
                _ => UnicodeWidthChar::width(ch).unwrap_or(0),
            })
            .sum(),
    }
}

/// Terminal cell width of a single line, ignoring escape sequences.
pub fn visible_width(line: &str) -> usize {
    strip_escapes(line).graphemes(true).map(grapheme_width).sum()
}

/// Width of the widest line in a rendered block.
pub fn block_width(block: &str) -> usize {
    block.lines().map(visible_width).max().unwrap_or(0)
}

pub(crate) fn strip_escapes(input: &str) -> String {
    let mut clean = String::with_capacity(input.len());
    let mut idx = 0;
    while idx < input.len() {
        if let Some(len) = escape_len(input, idx) {
            idx += len;
            continue;
        }
        let Some(ch) = input[idx..].chars().next() else {
            break;
        };
        clean.push(ch);
        idx += ch.len_utf8();
    }
    clean
}

#[cfg(test)]
mod tests {
    use super::{block_width, visible_width};

    #[test]
    fn escapes_do_not_count() {
        assert_eq!(visible_width("hi\x1b[31m!!\x1b[0m"), 4);
        assert_eq!(visible_width("\x1b]8;;https://example.com\x07link\x1b]8;;\x07"), 4);
    }

    #[test]
    fn wide_glyphs_count_twice() {
        assert_eq!(visible_width("😀"), 2);
        assert_eq!(visible_width("日本"), 4);
    }

    #[test]
    fn block_width_is_widest_line() {
        assert_eq!(block_width("a\nabc\nab"), 3);
        assert_eq!(block_width(""), 0);
    }
}
