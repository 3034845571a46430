//! Table widget: a header row over selectable data rows.

use crate::core::command::Cmd;
use crate::core::common::Common;
use crate::core::component::{Focusable, Model, Renderable, Sizeable};
use crate::core::keybindings::{KeyBinding, KeyMap};
use crate::core::message::Msg;
use crate::core::style::{Style, Styles};
use crate::core::text::fit_to_width;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableKeyMap {
    pub row_up: KeyBinding,
    pub row_down: KeyBinding,
    pub first: KeyBinding,
    pub last: KeyBinding,
}

impl Default for TableKeyMap {
    fn default() -> Self {
        Self {
            row_up: KeyBinding::new(["up", "k"]).with_help("↑/k", "up"),
            row_down: KeyBinding::new(["down", "j"]).with_help("↓/j", "down"),
            first: KeyBinding::new(["home", "g"]).with_help("g", "first"),
            last: KeyBinding::new(["end", "shift+g"]).with_help("G", "last"),
        }
    }
}

impl KeyMap for TableKeyMap {
    fn named(&self) -> Vec<(&str, &KeyBinding)> {
        vec![
            ("row_up", &self.row_up),
            ("row_down", &self.row_down),
            ("first", &self.first),
            ("last", &self.last),
        ]
    }

    fn short_help(&self) -> Vec<&KeyBinding> {
        vec![&self.row_up, &self.row_down]
    }

    fn full_help(&self) -> Vec<Vec<&KeyBinding>> {
        vec![
            vec![&self.row_up, &self.row_down],
            vec![&self.first, &self.last],
        ]
    }
}

/// Growable table. Column widths are percentages of the content width; columns without an
/// explicit percentage share the width evenly.
#[derive(Debug, Clone)]
pub struct Table {
    common: Common,
    columns: Vec<String>,
    rel_widths: Vec<usize>,
    rows: Vec<Vec<String>>,
    selected: usize,
    offset: usize,
    header_style: Style,
    selected_style: Style,
    keymap: TableKeyMap,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            common: Common::new(Styles::default()),
            columns: columns.into_iter().map(Into::into).collect(),
            rel_widths: Vec::new(),
            rows: Vec::new(),
            selected: 0,
            offset: 0,
            header_style: Style::new().bold(true),
            selected_style: Style::new().reverse(true),
            keymap: TableKeyMap::default(),
        }
    }

    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Column widths as percentages of the content width, in column order.
    pub fn with_rel_widths(mut self, percentages: impl IntoIterator<Item = usize>) -> Self {
        self.set_rel_widths(percentages);
        self
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.common.set_styles(styles);
        self
    }

    pub fn with_row_styles(mut self, header: Style, selected: Style) -> Self {
        self.header_style = header;
        self.selected_style = selected;
        self
    }

    pub fn with_keymap(mut self, keymap: TableKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn keymap(&self) -> &TableKeyMap {
        &self.keymap
    }

    pub fn set_rel_widths(&mut self, percentages: impl IntoIterator<Item = usize>) {
        self.rel_widths = percentages.into_iter().collect();
    }

    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
        self.scroll_to_selection();
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&[String]> {
        self.rows.get(self.selected).map(Vec::as_slice)
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.rows.len().saturating_sub(1));
        self.scroll_to_selection();
    }

    pub fn set_styles(&mut self, styles: Styles) {
        self.common.set_styles(styles);
    }

    /// Width of each column for the current content width.
    pub fn column_widths(&self) -> Vec<usize> {
        let width = self.common.width();
        let count = self.columns.len();
        if count == 0 {
            return Vec::new();
        }
        let even = 100 / count;
        (0..count)
            .map(|index| {
                let percent = self.rel_widths.get(index).copied().unwrap_or(even);
                width * percent / 100
            })
            .collect()
    }

    /// Data rows that fit under the header.
    fn body_rows(&self) -> usize {
        self.common.height().saturating_sub(1)
    }

    fn scroll_to_selection(&mut self) {
        let window = self.body_rows().max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + window {
            self.offset = self.selected + 1 - window;
        }
    }

    fn render_row(&self, cells: &[String], widths: &[usize]) -> String {
        let line: String = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = cells.get(index).map(String::as_str).unwrap_or("");
                fit_to_width(cell, *width)
            })
            .collect();
        fit_to_width(&line, self.common.width())
    }
}

impl Sizeable for Table {
    fn set_width(&mut self, width: usize) {
        self.common.set_width(width);
    }

    fn set_height(&mut self, height: usize) {
        self.common.set_height(height);
        self.scroll_to_selection();
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

impl Renderable for Table {
    fn view(&mut self) -> String {
        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(self.body_rows() + 1);
        lines.push(
            self.header_style
                .render(&self.render_row(&self.columns, &widths)),
        );
        for (index, row) in self
            .rows
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.body_rows())
        {
            let line = self.render_row(row, &widths);
            if index == self.selected {
                lines.push(self.selected_style.render(&line));
            } else {
                lines.push(line);
            }
        }
        self.common.render(&lines.join("\n"))
    }
}

impl Model for Table {
    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.common.focused() {
            return None;
        }
        let key = msg.as_key()?;
        let last = self.rows.len().saturating_sub(1);
        if self.keymap.row_up.matches(key) {
            self.select(self.selected.saturating_sub(1));
        } else if self.keymap.row_down.matches(key) {
            self.select(self.selected + 1);
        } else if self.keymap.first.matches(key) {
            self.select(0);
        } else if self.keymap.last.matches(key) {
            self.select(last);
        }
        None
    }
}

impl Focusable for Table {
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
