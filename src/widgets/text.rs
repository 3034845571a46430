//! Text widget: a fixed-height block that sizes itself to its content.

use crate::core::component::{Renderable, Sizeable};
use crate::core::style::Style;

/// Static text, one rendered row per line. Never grows; lines wider than the content width are
/// cut. The reported height is the rendered height, frame included, so an enclosing layout
/// reserves every row the block draws.
#[derive(Debug, Clone, Default)]
pub struct Text {
    text: String,
    style: Style,
    width: usize,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }
}

impl Sizeable for Text {
    fn set_width(&mut self, width: usize) {
        self.width = width.saturating_sub(self.style.horizontal_frame_size());
    }

    /// Height follows the content; the offered height is ignored.
    fn set_height(&mut self, _height: usize) {}

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.text.split('\n').count() + self.style.vertical_frame_size()
    }
}

impl Renderable for Text {
    fn view(&mut self) -> String {
        self.style.clone().width(self.width).render(&self.text)
    }
}
