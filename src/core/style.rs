//! Border, padding and text-attribute templates.
//!
//! A [`Style`] is a plain value. Components own their styles and re-derive them on every resize;
//! nothing here is shared between components by reference.

use crate::core::text::ansi::sgr_wrap;
use crate::core::text::{pad_lines, visible_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    /// Single line border (─ │ ┌ ┐ └ ┘).
    Normal,
    /// Rounded corners (─ │ ╭ ╮ ╰ ╯).
    Rounded,
    /// Heavy border (━ ┃ ┏ ┓ ┗ ┛).
    Thick,
    /// Double line border (═ ║ ╔ ╗ ╚ ╝).
    Double,
    /// Blank border: takes the same space as a visible one.
    Hidden,
}

struct BorderGlyphs {
    top: char,
    bottom: char,
    left: char,
    right: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
}

impl BorderKind {
    fn glyphs(self) -> BorderGlyphs {
        let (top, side, [top_left, top_right, bottom_left, bottom_right]) = match self {
            BorderKind::Normal => ('─', '│', ['┌', '┐', '└', '┘']),
            BorderKind::Rounded => ('─', '│', ['╭', '╮', '╰', '╯']),
            BorderKind::Thick => ('━', '┃', ['┏', '┓', '┗', '┛']),
            BorderKind::Double => ('═', '║', ['╔', '╗', '╚', '╝']),
            BorderKind::Hidden => (' ', ' ', [' ', ' ', ' ', ' ']),
        };
        BorderGlyphs {
            top,
            bottom: top,
            left: side,
            right: side,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }
}

/// Per-edge cell counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Spacing {
    pub fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same amount on the left and right, nothing above or below.
    pub fn horizontal(cells: usize) -> Self {
        Self::new(0, cells, 0, cells)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    border: Option<BorderKind>,
    border_fg: Option<u8>,
    padding: Spacing,
    width: Option<usize>,
    height: Option<usize>,
    fg: Option<u8>,
    bold: bool,
    faint: bool,
    underline: bool,
    reverse: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border(mut self, kind: BorderKind) -> Self {
        self.border = Some(kind);
        self
    }

    pub fn no_border(mut self) -> Self {
        self.border = None;
        self
    }

    /// 256-color index used for border glyphs.
    pub fn border_foreground(mut self, color: u8) -> Self {
        self.border_fg = Some(color);
        self
    }

    pub fn padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    /// Content width; lines are padded or truncated to it.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Content height; blocks are padded with blank lines or cut to it.
    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    /// 256-color index used for text.
    pub fn foreground(mut self, color: u8) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.bold = on;
        self
    }

    pub fn faint(mut self, on: bool) -> Self {
        self.faint = on;
        self
    }

    pub fn underline(mut self, on: bool) -> Self {
        self.underline = on;
        self
    }

    pub fn reverse(mut self, on: bool) -> Self {
        self.reverse = on;
        self
    }

    pub fn get_width(&self) -> Option<usize> {
        self.width
    }

    pub fn get_height(&self) -> Option<usize> {
        self.height
    }

    pub fn get_border(&self) -> Option<BorderKind> {
        self.border
    }

    pub fn get_padding(&self) -> Spacing {
        self.padding
    }

    /// Cells taken horizontally by border and padding.
    pub fn horizontal_frame_size(&self) -> usize {
        let border = if self.border.is_some() { 2 } else { 0 };
        self.padding.left + self.padding.right + border
    }

    /// Rows taken vertically by border and padding.
    pub fn vertical_frame_size(&self) -> usize {
        let border = if self.border.is_some() { 2 } else { 0 };
        self.padding.top + self.padding.bottom + border
    }

    fn text_params(&self) -> Vec<String> {
        let mut params = Vec::new();
        if self.bold {
            params.push("1".to_string());
        }
        if self.faint {
            params.push("2".to_string());
        }
        if self.underline {
            params.push("4".to_string());
        }
        if self.reverse {
            params.push("7".to_string());
        }
        if let Some(color) = self.fg {
            params.push(format!("38;5;{color}"));
        }
        params
    }

    fn border_params(&self) -> Vec<String> {
        self.border_fg
            .map(|color| vec![format!("38;5;{color}")])
            .unwrap_or_default()
    }

    /// Renders `content` inside this template.
    ///
    /// Lines are fit to the content width (or padded to the widest line when no width is set),
    /// the block is fit to the content height, then padding, text attributes and border are
    /// applied in that order.
    pub fn render(&self, content: &str) -> String {
        let inner_width = self.width.unwrap_or_else(|| {
            content
                .split('\n')
                .map(visible_width)
                .max()
                .unwrap_or(0)
        });
        let mut lines = pad_lines(content, inner_width);
        if let Some(height) = self.height {
            lines.resize(height, " ".repeat(inner_width));
        }

        let padded_width = inner_width + self.padding.left + self.padding.right;
        let left = " ".repeat(self.padding.left);
        let right = " ".repeat(self.padding.right);
        let blank = " ".repeat(padded_width);
        let text_params = self.text_params();

        let mut body = Vec::with_capacity(lines.len() + self.padding.top + self.padding.bottom);
        body.extend(std::iter::repeat(blank.clone()).take(self.padding.top));
        for line in lines {
            body.push(format!("{left}{line}{right}"));
        }
        body.extend(std::iter::repeat(blank).take(self.padding.bottom));
        let body: Vec<String> = body
            .into_iter()
            .map(|line| sgr_wrap(&line, &text_params))
            .collect();

        let Some(kind) = self.border else {
            return body.join("\n");
        };

        let glyphs = kind.glyphs();
        let border_params = self.border_params();
        let horizontal = |ch: char| ch.to_string().repeat(padded_width);
        let mut framed = Vec::with_capacity(body.len() + 2);
        framed.push(sgr_wrap(
            &format!("{}{}{}", glyphs.top_left, horizontal(glyphs.top), glyphs.top_right),
            &border_params,
        ));
        let left_edge = sgr_wrap(&glyphs.left.to_string(), &border_params);
        let right_edge = sgr_wrap(&glyphs.right.to_string(), &border_params);
        for line in body {
            framed.push(format!("{left_edge}{line}{right_edge}"));
        }
        framed.push(sgr_wrap(
            &format!(
                "{}{}{}",
                glyphs.bottom_left,
                horizontal(glyphs.bottom),
                glyphs.bottom_right
            ),
            &border_params,
        ));
        framed.join("\n")
    }
}

/// The template pair every focusable widget switches between, plus a borderless passthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    pub focused: Style,
    pub blurred: Style,
    pub no_border: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            focused: Style::new()
                .border(BorderKind::Rounded)
                .border_foreground(62),
            blurred: Style::new()
                .border(BorderKind::Rounded)
                .border_foreground(240),
            no_border: Style::new(),
        }
    }
}

impl Styles {
    /// All three templates without a frame.
    pub fn borderless() -> Self {
        Self {
            focused: Style::new(),
            blurred: Style::new(),
            no_border: Style::new(),
        }
    }

    pub fn active(&self, focused: bool) -> &Style {
        if focused {
            &self.focused
        } else {
            &self.blurred
        }
    }
}

/// Tab navigation bar decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStyles {
    pub bar: Style,
    pub selected: Style,
    pub unselected: Style,
    pub separator: String,
}

impl Default for NavStyles {
    fn default() -> Self {
        Self {
            bar: Style::new(),
            selected: Style::new()
                .bold(true)
                .reverse(true)
                .padding(Spacing::horizontal(1)),
            unselected: Style::new()
                .faint(true)
                .padding(Spacing::horizontal(1)),
            separator: "│".to_string(),
        }
    }
}

impl NavStyles {
    /// Renders one tab title in its selected or unselected decoration.
    pub fn title(&self, title: &str, selected: bool) -> String {
        let style = if selected {
            &self.selected
        } else {
            &self.unselected
        };
        style.render(title)
    }

    /// Rows the rendered bar occupies.
    pub fn height(&self) -> usize {
        1 + self.bar.vertical_frame_size()
    }
}
