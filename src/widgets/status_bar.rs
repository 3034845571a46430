//! Status bar: one row with left, center and right segments.

use crate::core::component::{Renderable, Sizeable};
use crate::core::style::Style;
use crate::core::text::{fit_to_width, visible_width};

/// Left and right segments keep their own width; the center segment takes the cells in between,
/// one space away from each neighbour.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    left: String,
    center: String,
    right: String,
    style: Style,
    width: usize,
}

impl StatusBar {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            center: String::new(),
            right: right.into(),
            style: Style::new().reverse(true),
            width: 0,
        }
    }

    pub fn with_content(
        mut self,
        left: impl Into<String>,
        center: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        self.set_content(left, center, right);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn set_content(
        &mut self,
        left: impl Into<String>,
        center: impl Into<String>,
        right: impl Into<String>,
    ) {
        self.left = left.into();
        self.center = center.into();
        self.right = right.into();
    }

    pub fn set_left(&mut self, left: impl Into<String>) {
        self.left = left.into();
    }

    pub fn set_center(&mut self, center: impl Into<String>) {
        self.center = center.into();
    }

    pub fn set_right(&mut self, right: impl Into<String>) {
        self.right = right.into();
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn center(&self) -> &str {
        &self.center
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    fn line(&self) -> String {
        let edges = visible_width(&self.left) + visible_width(&self.right);
        if edges + 2 <= self.width {
            let center = fit_to_width(&self.center, self.width - edges - 2);
            return format!("{} {} {}", self.left, center, self.right);
        }
        // Too narrow: keep the segments in order and let the right end be cut.
        let segments: Vec<&str> = [&self.left, &self.center, &self.right]
            .into_iter()
            .map(String::as_str)
            .filter(|segment| !segment.is_empty())
            .collect();
        fit_to_width(&segments.join(" "), self.width)
    }
}

impl Sizeable for StatusBar {
    fn set_width(&mut self, width: usize) {
        self.width = width.saturating_sub(self.style.horizontal_frame_size());
    }

    fn set_height(&mut self, _height: usize) {}

    fn width(&self) -> usize {
        self.width
    }

    /// Rendered rows: the bar itself plus its frame.
    fn height(&self) -> usize {
        1 + self.style.vertical_frame_size()
    }
}

impl Renderable for StatusBar {
    fn view(&mut self) -> String {
        self.style.clone().width(self.width).render(&self.line())
    }
}
