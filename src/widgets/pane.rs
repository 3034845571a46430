//! Pane widget: a framed, scrollable block of text that takes focus.

use crate::core::command::Cmd;
use crate::core::common::Common;
use crate::core::component::{Focusable, Model, Renderable, Sizeable};
use crate::core::keybindings::{KeyBinding, KeyMap};
use crate::core::message::Msg;
use crate::core::style::Styles;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneKeyMap {
    pub line_up: KeyBinding,
    pub line_down: KeyBinding,
    pub top: KeyBinding,
    pub bottom: KeyBinding,
}

impl Default for PaneKeyMap {
    fn default() -> Self {
        Self {
            line_up: KeyBinding::new(["up", "k"]).with_help("↑/k", "up"),
            line_down: KeyBinding::new(["down", "j"]).with_help("↓/j", "down"),
            top: KeyBinding::new(["home", "g"]).with_help("g", "top"),
            bottom: KeyBinding::new(["end", "shift+g"]).with_help("G", "bottom"),
        }
    }
}

impl KeyMap for PaneKeyMap {
    fn named(&self) -> Vec<(&str, &KeyBinding)> {
        vec![
            ("line_up", &self.line_up),
            ("line_down", &self.line_down),
            ("top", &self.top),
            ("bottom", &self.bottom),
        ]
    }

    fn short_help(&self) -> Vec<&KeyBinding> {
        vec![&self.line_up, &self.line_down]
    }

    fn full_help(&self) -> Vec<Vec<&KeyBinding>> {
        vec![
            vec![&self.line_up, &self.line_down],
            vec![&self.top, &self.bottom],
        ]
    }
}

/// Growable text block that scrolls while focused and ignores input while blurred.
#[derive(Debug, Clone, Default)]
pub struct Pane {
    common: Common,
    lines: Vec<String>,
    offset: usize,
    keymap: PaneKeyMap,
}

impl Pane {
    pub fn new(content: impl AsRef<str>) -> Self {
        let mut pane = Self::default();
        pane.set_content(content);
        pane
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.common.set_styles(styles);
        self
    }

    pub fn with_keymap(mut self, keymap: PaneKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn keymap(&self) -> &PaneKeyMap {
        &self.keymap
    }

    pub fn set_content(&mut self, content: impl AsRef<str>) {
        self.lines = content.as_ref().split('\n').map(str::to_string).collect();
        self.clamp_offset();
    }

    pub fn set_styles(&mut self, styles: Styles) {
        self.common.set_styles(styles);
    }

    pub fn styles(&self) -> &Styles {
        self.common.styles()
    }

    pub fn scroll_offset(&self) -> usize {
        self.offset
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines);
        self.clamp_offset();
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.common.height())
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

impl Sizeable for Pane {
    fn set_width(&mut self, width: usize) {
        self.common.set_width(width);
    }

    fn set_height(&mut self, height: usize) {
        self.common.set_height(height);
        self.clamp_offset();
    }

    fn width(&self) -> usize {
        self.common.width()
    }

    fn height(&self) -> usize {
        self.common.height()
    }

    fn can_grow(&self) -> bool {
        true
    }
}

impl Renderable for Pane {
    fn view(&mut self) -> String {
        let visible: Vec<&str> = self
            .lines
            .iter()
            .skip(self.offset)
            .take(self.common.height())
            .map(String::as_str)
            .collect();
        self.common.render(&visible.join("\n"))
    }
}

impl Model for Pane {
    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.common.focused() {
            return None;
        }
        let key = msg.as_key()?;
        if self.keymap.line_up.matches(key) {
            self.scroll_up(1);
        } else if self.keymap.line_down.matches(key) {
            self.scroll_down(1);
        } else if self.keymap.top.matches(key) {
            self.offset = 0;
        } else if self.keymap.bottom.matches(key) {
            self.offset = self.max_offset();
        }
        None
    }
}

impl Focusable for Pane {
    fn focus(&mut self) -> Option<Cmd> {
        self.common.set_focused(true);
        None
    }

    fn blur(&mut self) {
        self.common.set_focused(false);
    }

    fn is_focused(&self) -> bool {
        self.common.focused()
    }
}

#[cfg(test)]
mod tests {
    use super::Pane;
    use crate::core::component::{Focusable, Model, Renderable, Sizeable};
    use crate::core::message::Msg;
    use crate::core::style::{Style, Styles};
    use pretty_assertions::assert_eq;

    fn plain() -> Styles {
        Styles::borderless()
    }

    #[test]
    fn content_size_excludes_the_border() {
        let mut pane = Pane::new("a");
        pane.set_size(10, 5);
        assert_eq!((pane.width(), pane.height()), (8, 3));
        assert!(pane.can_grow());
    }

    #[test]
    fn view_shows_the_scrolled_window() {
        let mut pane = Pane::new("1\n2\n3\n4").with_styles(plain());
        pane.set_size(1, 2);
        pane.focus();

        assert_eq!(pane.view(), "1\n2");
        pane.update(&Msg::key("down"));
        assert_eq!(pane.view(), "2\n3");
        pane.update(&Msg::key("end"));
        assert_eq!(pane.view(), "3\n4");
        pane.update(&Msg::key("down"));
        assert_eq!(pane.scroll_offset(), 2);
        pane.update(&Msg::key("g"));
        assert_eq!(pane.scroll_offset(), 0);
    }

    #[test]
    fn blurred_pane_ignores_keys() {
        let mut pane = Pane::new("1\n2\n3").with_styles(plain());
        pane.set_size(1, 1);
        pane.update(&Msg::key("down"));
        assert_eq!(pane.scroll_offset(), 0);
    }

    #[test]
    fn growing_clamps_the_offset() {
        let mut pane = Pane::new("1\n2\n3").with_styles(plain());
        pane.set_size(1, 1);
        pane.scroll_down(5);
        assert_eq!(pane.scroll_offset(), 2);
        pane.set_size(1, 3);
        assert_eq!(pane.scroll_offset(), 0);
    }

    #[test]
    fn focus_switches_template() {
        let styles = Styles {
            focused: Style::new().bold(true),
            blurred: Style::new(),
            no_border: Style::new(),
        };
        let mut pane = Pane::new("x").with_styles(styles);
        pane.set_size(1, 1);
        assert_eq!(pane.view(), "x");
        assert!(pane.focus().is_none());
        assert_eq!(pane.view(), "\x1b[1mx\x1b[0m");
        pane.blur();
        assert!(!pane.is_focused());
    }
}
