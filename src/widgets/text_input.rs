//! Single-line text input.

use unicode_segmentation::UnicodeSegmentation;

use crate::core::command::Cmd;
use crate::core::common::Common;
use crate::core::component::{Focusable, Model, Renderable, Sizeable};
use crate::core::keybindings::{KeyBinding, KeyMap};
use crate::core::message::{KeyMsg, Msg};
use crate::core::style::{Style, Styles};
use crate::core::text::{fit_to_width, visible_width};

/// Sent when an input takes focus, so the host can start blinking its cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorBlink;

/// Sent with the current value when the submit binding fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputKeyMap {
    pub cursor_left: KeyBinding,
    pub cursor_right: KeyBinding,
    pub line_start: KeyBinding,
    pub line_end: KeyBinding,
    pub delete_back: KeyBinding,
    pub delete_forward: KeyBinding,
    pub clear: KeyBinding,
    pub submit: KeyBinding,
}

impl Default for TextInputKeyMap {
    fn default() -> Self {
        Self {
            cursor_left: KeyBinding::new(["left", "ctrl+b"]).with_help("←", "left"),
            cursor_right: KeyBinding::new(["right", "ctrl+f"]).with_help("→", "right"),
            line_start: KeyBinding::new(["home", "ctrl+a"]).with_help("home", "start"),
            line_end: KeyBinding::new(["end", "ctrl+e"]).with_help("end", "end"),
            delete_back: KeyBinding::new(["backspace"]).with_help("⌫", "delete"),
            delete_forward: KeyBinding::new(["delete", "ctrl+d"]).with_help("del", "delete forward"),
            clear: KeyBinding::new(["ctrl+u"]).with_help("ctrl+u", "clear"),
            submit: KeyBinding::new(["enter"]).with_help("enter", "submit"),
        }
    }
}

impl KeyMap for TextInputKeyMap {
    fn named(&self) -> Vec<(&str, &KeyBinding)> {
        vec![
            ("cursor_left", &self.cursor_left),
            ("cursor_right", &self.cursor_right),
            ("line_start", &self.line_start),
            ("line_end", &self.line_end),
            ("delete_back", &self.delete_back),
            ("delete_forward", &self.delete_forward),
            ("clear", &self.clear),
            ("submit", &self.submit),
        ]
    }

    fn short_help(&self) -> Vec<&KeyBinding> {
        vec![&self.submit, &self.clear]
    }

    fn full_help(&self) -> Vec<Vec<&KeyBinding>> {
        vec![
            vec![
                &self.cursor_left,
                &self.cursor_right,
                &self.line_start,
                &self.line_end,
            ],
            vec![
                &self.delete_back,
                &self.delete_forward,
                &self.clear,
                &self.submit,
            ],
        ]
    }
}

/// One-row input with a prompt and horizontal scrolling. Edits only while focused.
///
/// The cursor is a byte offset that always sits on a grapheme boundary.
#[derive(Debug, Clone)]
pub struct TextInput {
    common: Common,
    value: String,
    cursor: usize,
    prompt: String,
    placeholder: String,
    placeholder_style: Style,
    cursor_style: Style,
    keymap: TextInputKeyMap,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            common: Common::new(Styles::default()),
            value: String::new(),
            cursor: 0,
            prompt: "> ".to_string(),
            placeholder: "Text here...".to_string(),
            placeholder_style: Style::new().faint(true),
            cursor_style: Style::new().reverse(true),
            keymap: TextInputKeyMap::default(),
        }
    }
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.common.set_styles(styles);
        self
    }

    /// Attributes for the placeholder and the cell under the cursor.
    pub fn with_text_styles(mut self, placeholder: Style, cursor: Style) -> Self {
        self.placeholder_style = placeholder;
        self.cursor_style = cursor;
        self
    }

    pub fn with_keymap(mut self, keymap: TextInputKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn keymap(&self) -> &TextInputKeyMap {
        &self.keymap
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value and moves the cursor to its end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into().replace(['\r', '\n'], "");
        self.cursor = self.value.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_styles(&mut self, styles: Styles) {
        self.common.set_styles(styles);
    }

    fn insert(&mut self, text: &str) {
        self.value.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .grapheme_indices(true)
            .last()
            .map(|(index, _)| index)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .graphemes(true)
            .next()
            .map(|grapheme| self.cursor + grapheme.len())
            .unwrap_or(self.cursor)
    }

    /// Text typed by `key`, if it is a printable key rather than a named one.
    fn typed_text(key: &KeyMsg) -> Option<&str> {
        if key.is("space") {
            return Some(" ");
        }
        let mut graphemes = key.raw().graphemes(true);
        match (graphemes.next(), graphemes.next()) {
            (Some(grapheme), None) if !grapheme.chars().any(char::is_control) => Some(grapheme),
            _ => None,
        }
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        let keys = &self.keymap;
        if keys.submit.matches(key) {
            return Some(Cmd::message(Msg::custom(Submitted(self.value.clone()))));
        }
        if keys.cursor_left.matches(key) {
            self.cursor = self.prev_boundary();
        } else if keys.cursor_right.matches(key) {
            self.cursor = self.next_boundary();
        } else if keys.line_start.matches(key) {
            self.cursor = 0;
        } else if keys.line_end.matches(key) {
            self.cursor = self.value.len();
        } else if keys.delete_back.matches(key) {
            let start = self.prev_boundary();
            self.value.replace_range(start..self.cursor, "");
            self.cursor = start;
        } else if keys.delete_forward.matches(key) {
            let end = self.next_boundary();
            self.value.replace_range(self.cursor..end, "");
        } else if keys.clear.matches(key) {
            self.value.clear();
            self.cursor = 0;
        } else if let Some(text) = Self::typed_text(key) {
            let text = text.to_string();
            self.insert(&text);
        }
        None
    }

    /// The value as shown in `width` cells: scrolled so the cursor stays visible, with the cursor
    /// cell highlighted while focused.
    fn visible_value(&self, width: usize) -> String {
        let graphemes: Vec<(usize, &str)> = self.value.grapheme_indices(true).collect();
        let cursor_index = graphemes
            .iter()
            .position(|(offset, _)| *offset >= self.cursor)
            .unwrap_or(graphemes.len());

        // Leave one cell for the cursor itself.
        let mut start = cursor_index;
        let mut used = 1;
        while start > 0 {
            let cell = visible_width(graphemes[start - 1].1);
            if used + cell > width {
                break;
            }
            used += cell;
            start -= 1;
        }

        let mut out = String::new();
        for (index, (_, grapheme)) in graphemes.iter().enumerate().skip(start) {
            if index == cursor_index && self.common.focused() {
                out.push_str(&self.cursor_style.render(grapheme));
            } else {
                out.push_str(grapheme);
            }
        }
        if cursor_index == graphemes.len() && self.common.focused() {
            out.push_str(&self.cursor_style.render(" "));
        }
        fit_to_width(&out, width)
    }
}

impl Sizeable for TextInput {
    fn set_width(&mut self, width: usize) {
        self.common.set_width(width);
    }

    /// Always one row tall; the offered height is ignored.
    fn set_height(&mut self, _height: usize) {}

    fn width(&self) -> usize {
        self.common.width()
    }

    /// Rendered rows: the input line plus the active frame.
    fn height(&self) -> usize {
        1 + self.common.active_style().vertical_frame_size()
    }
}

impl Renderable for TextInput {
    fn view(&mut self) -> String {
        let width = self.common.width();
        let prompt = fit_to_width(&self.prompt, width.min(visible_width(&self.prompt)));
        let room = width.saturating_sub(visible_width(&prompt));
        let body = if self.value.is_empty() && !self.common.focused() {
            self.placeholder_style
                .render(&fit_to_width(&self.placeholder, room))
        } else {
            self.visible_value(room)
        };
        self.common.render(&format!("{prompt}{body}"))
    }
}

impl Model for TextInput {
    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.common.focused() {
            return None;
        }
        self.handle_key(msg.as_key()?)
    }
}

impl Focusable for TextInput {
    fn focus(&mut self) -> Option<Cmd> {
        self.common.set_focused(true);
        Some(Cmd::message(Msg::custom(CursorBlink)))
    }

    fn blur(&mut self) {
        self.common.set_focused(false);
    }

    fn is_focused(&self) -> bool {
        self.common.focused()
    }
}
