//! Escape-sequence scanning.

pub const SGR_RESET: &str = "\x1b[0m";

/// Byte length of the escape sequence starting at `pos`, if one starts there.
///
/// Recognizes CSI (`ESC [`), string-terminated OSC/APC/DCS (`ESC ]`, `ESC _`, `ESC P`, closed by
/// BEL or `ESC \`) and SS3 (`ESC O x`). Unterminated sequences are not treated as escapes.
pub fn escape_len(input: &str, pos: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    if pos + 1 >= bytes.len() || bytes[pos] != 0x1b {
        return None;
    }

    match bytes[pos + 1] {
        b'[' => bytes[pos + 2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map(|offset| offset + 3),
        b']' | b'_' | b'P' => {
            let mut idx = pos + 2;
            while idx < bytes.len() {
                if bytes[idx] == 0x07 {
                    return Some(idx + 1 - pos);
                }
                if bytes[idx] == 0x1b && bytes.get(idx + 1) == Some(&b'\\') {
                    return Some(idx + 2 - pos);
                }
                idx += 1;
            }
            None
        }
        b'O' if pos + 2 < bytes.len() => Some(3),
        _ => None,
    }
}

/// Wraps `text` in an SGR sequence built from `params`, resetting afterwards.
pub fn sgr_wrap(text: &str, params: &[String]) -> String {
    if params.is_empty() || text.is_empty() {
        return text.to_string();
    }
    format!("\x1b[{}m{text}{SGR_RESET}", params.join(";"))
}
