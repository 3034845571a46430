//! Fitting lines to a width and stitching rendered blocks together.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::{escape_len, SGR_RESET};
use super::width::{block_width, grapheme_width, visible_width};

/// Pads or truncates `line` to exactly `width` cells.
///
/// Escape sequences are carried through untouched. When visible text is cut, a reset is emitted
/// before the padding so styling never bleeds into the fill.
pub fn fit_to_width(line: &str, width: usize) -> String {
    let current = visible_width(line);
    if current <= width {
        let mut fitted = String::with_capacity(line.len() + width - current);
        fitted.push_str(line);
        fitted.push_str(&" ".repeat(width - current));
        return fitted;
    }

    let mut fitted = String::with_capacity(line.len());
    let mut used = 0;
    let mut saw_escape = false;
    let mut idx = 0;
    while idx < line.len() {
        if let Some(len) = escape_len(line, idx) {
            fitted.push_str(&line[idx..idx + len]);
            saw_escape = true;
            idx += len;
            continue;
        }

        let end = next_escape_or_end(line, idx);
        let mut overflowed = false;
        for grapheme in line[idx..end].graphemes(true) {
            let cells = grapheme_width(grapheme);
            if used + cells > width {
                overflowed = true;
                break;
            }
            fitted.push_str(grapheme);
            used += cells;
        }
        if overflowed {
            break;
        }
        idx = end;
    }

    if saw_escape {
        fitted.push_str(SGR_RESET);
    }
    fitted.push_str(&" ".repeat(width - used));
    fitted
}

/// Pads every line of `block` to `width` cells, truncating longer lines.
pub fn pad_lines(block: &str, width: usize) -> Vec<String> {
    block.split('\n').map(|line| fit_to_width(line, width)).collect()
}

/// Stacks blocks top to bottom.
pub fn join_vertical<S: AsRef<str>>(blocks: &[S]) -> String {
    blocks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Places blocks side by side.
///
/// Each block is padded to its own widest line, and shorter blocks are extended with blank rows
/// so every output row has the same width.
pub fn join_horizontal<S: AsRef<str>>(blocks: &[S]) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let columns: Vec<Vec<String>> = blocks
        .iter()
        .map(|block| {
            let block = block.as_ref();
            pad_lines(block, block_width(block))
        })
        .collect();
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut line = String::new();
        for column in columns.iter() {
            match column.get(row) {
                Some(cell) => line.push_str(cell),
                None => {
                    let width = column.first().map(|first| visible_width(first)).unwrap_or(0);
                    line.push_str(&" ".repeat(width));
                }
            }
        }
        out.push(line);
    }
    out.join("\n")
}

fn next_escape_or_end(input: &str, mut idx: usize) -> usize {
    while idx < input.len() {
        if escape_len(input, idx).is_some() {
            break;
        }
        match input[idx..].chars().next() {
            Some(ch) => idx += ch.len_utf8(),
            None => break,
        }
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::{fit_to_width, join_horizontal, join_vertical};
    use crate::core::text::visible_width;

    #[test]
    fn fit_pads_short_lines() {
        assert_eq!(fit_to_width("hi", 4), "hi  ");
        assert_eq!(fit_to_width("", 2), "  ");
    }

    #[test]
    fn fit_truncates_long_lines() {
        assert_eq!(fit_to_width("hello", 3), "hel");
        assert_eq!(fit_to_width("hello", 0), "");
    }

    #[test]
    fn fit_keeps_escapes_and_resets_after_cut() {
        let fitted = fit_to_width("\x1b[31mhello\x1b[0m", 2);
        assert_eq!(fitted, "\x1b[31mhe\x1b[0m");
        assert_eq!(visible_width(&fitted), 2);
    }

    #[test]
    fn fit_never_splits_wide_glyphs() {
        let fitted = fit_to_width("a日本", 2);
        assert_eq!(fitted, "a ");
    }

    #[test]
    fn join_vertical_stacks_blocks() {
        assert_eq!(join_vertical(&["a", "b\nc"]), "a\nb\nc");
    }

    #[test]
    fn join_horizontal_pads_columns() {
        let joined = join_horizontal(&["ab\na", "x\ny\nz"]);
        assert_eq!(joined, "abx\na y\n  z");
    }

    #[test]
    fn join_horizontal_of_nothing_is_empty() {
        assert_eq!(join_horizontal::<&str>(&[]), "");
    }
}
