//! Key help: one line of short help, or columns of full help.

use crate::core::component::{Renderable, Sizeable};
use crate::core::keybindings::{Help, KeyBinding, KeyMap};
use crate::core::style::Style;
use crate::core::text::{fit_to_width, join_horizontal, visible_width};

/// Renders the enabled bindings of one or more key maps.
///
/// Short mode draws `key desc • key desc …` on a single row. With `show_all` set, every column of
/// the full help is drawn side by side, keys aligned within a column. The reported height is the
/// number of rows the current mode renders.
#[derive(Debug, Clone)]
pub struct HelpBar {
    short: Vec<Help>,
    full: Vec<Vec<Help>>,
    show_all: bool,
    separator: String,
    column_separator: String,
    key_style: Style,
    desc_style: Style,
    width: usize,
}

impl Default for HelpBar {
    fn default() -> Self {
        Self {
            short: Vec::new(),
            full: Vec::new(),
            show_all: false,
            separator: " • ".to_string(),
            column_separator: "    ".to_string(),
            key_style: Style::new().foreground(245),
            desc_style: Style::new().faint(true),
            width: 0,
        }
    }
}

fn enabled_help(bindings: Vec<&KeyBinding>) -> Vec<Help> {
    bindings
        .into_iter()
        .filter(|binding| binding.enabled())
        .map(|binding| binding.help().clone())
        .collect()
}

impl HelpBar {
    pub fn new(keymap: &dyn KeyMap) -> Self {
        let mut bar = Self::default();
        bar.set_keymap(keymap);
        bar
    }

    /// Snapshot the enabled bindings of `keymap`; later keymap changes need another call.
    pub fn set_keymap(&mut self, keymap: &dyn KeyMap) {
        self.short.clear();
        self.full.clear();
        self.extend_keymap(keymap);
    }

    /// Appends the enabled bindings of another key map after the current ones.
    pub fn extend_keymap(&mut self, keymap: &dyn KeyMap) {
        self.short.extend(enabled_help(keymap.short_help()));
        self.full.extend(
            keymap
                .full_help()
                .into_iter()
                .map(enabled_help)
                .filter(|column| !column.is_empty()),
        );
    }

    pub fn entries(&self) -> &[Help] {
        &self.short
    }

    pub fn columns(&self) -> &[Vec<Help>] {
        &self.full
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_column_separator(mut self, separator: impl Into<String>) -> Self {
        self.column_separator = separator.into();
        self
    }

    pub fn with_styles(mut self, key_style: Style, desc_style: Style) -> Self {
        self.key_style = key_style;
        self.desc_style = desc_style;
        self
    }

    fn entry(&self, key: &str, desc: &str) -> String {
        format!(
            "{} {}",
            self.key_style.render(key),
            self.desc_style.render(desc)
        )
    }

    fn short_view(&self) -> String {
        let line = self
            .short
            .iter()
            .map(|help| self.entry(&help.key, &help.desc))
            .collect::<Vec<_>>()
            .join(self.separator.as_str());
        fit_to_width(&line, self.width)
    }

    fn full_view(&self) -> String {
        let rows = self.full.iter().map(Vec::len).max().unwrap_or(0);
        let separator = vec![self.column_separator.as_str(); rows].join("\n");
        let mut blocks = Vec::with_capacity(self.full.len() * 2);
        for (index, column) in self.full.iter().enumerate() {
            if index > 0 {
                blocks.push(separator.clone());
            }
            let key_width = column
                .iter()
                .map(|help| visible_width(&help.key))
                .max()
                .unwrap_or(0);
            let rows: Vec<String> = column
                .iter()
                .map(|help| self.entry(&fit_to_width(&help.key, key_width), &help.desc))
                .collect();
            blocks.push(rows.join("\n"));
        }

        join_horizontal(&blocks)
            .split('\n')
            .map(|line| fit_to_width(line, self.width))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(&self) -> String {
        if self.show_all && !self.full.is_empty() {
            self.full_view()
        } else {
            self.short_view()
        }
    }
}

impl Sizeable for HelpBar {
    fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    fn set_height(&mut self, _height: usize) {}

    fn width(&self) -> usize {
        self.width
    }

    /// Rows of the current rendering.
    fn height(&self) -> usize {
        self.render().split('\n').count()
    }
}

impl Renderable for HelpBar {
    fn view(&mut self) -> String {
        self.render()
    }
}
