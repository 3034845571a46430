//! Size and style state shared by every framed widget.

use crate::core::style::{Style, Styles};

/// Content size plus the focused/blurred template pair.
///
/// Setters take an outer size and store the content size: the active template's frame is
/// subtracted first, then the result is written back into both templates so the next render
/// reflects it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Common {
    width: usize,
    height: usize,
    styles: Styles,
    focused: bool,
}

impl Common {
    pub fn new(styles: Styles) -> Self {
        Self {
            styles,
            ..Self::default()
        }
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width.saturating_sub(self.active_style().horizontal_frame_size());
        self.styles.focused = self.styles.focused.clone().width(self.width);
        self.styles.blurred = self.styles.blurred.clone().width(self.width);
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height.saturating_sub(self.active_style().vertical_frame_size());
        self.styles.focused = self.styles.focused.clone().height(self.height);
        self.styles.blurred = self.styles.blurred.clone().height(self.height);
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.set_width(width);
        self.set_height(height);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Replaces the template pair wholesale. The new templates carry no size until the next
    /// `set_size`.
    pub fn set_styles(&mut self, styles: Styles) {
        self.styles = styles;
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn active_style(&self) -> &Style {
        self.styles.active(self.focused)
    }

    /// Renders `content` in the template matching the current focus state.
    pub fn render(&self, content: &str) -> String {
        self.active_style().render(content)
    }
}
