//! Horizontal row container.

use crate::core::component::{Placeable, Renderable, Shared, Sizeable};
use crate::core::text::join_horizontal;
use crate::widgets::layout::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Splits a fixed width across its items, left to right.
///
/// Widths are assigned at render time: each column gets `width / n` and the last one also takes
/// the remainder. Heights are left alone; every item keeps the height it was last given.
pub struct Tile {
    items: Vec<Shared<dyn Placeable>>,
    width: usize,
    height: usize,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Shared<dyn Placeable>>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn push<T: Placeable + 'static>(&mut self, item: Shared<T>) {
        self.items.push(item);
    }

    /// Appends `item` and returns the tile for chaining.
    pub fn add_item<T: Placeable + 'static>(&mut self, item: Shared<T>) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn items(&self) -> &[Shared<dyn Placeable>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Column widths for the current width: even split, remainder on the last column.
    pub fn column_widths(&self) -> Vec<usize> {
        let count = self.items.len();
        if count == 0 {
            return Vec::new();
        }
        let per_item = self.width / count;
        let remainder = self.width - per_item * count;
        let mut widths = vec![per_item; count];
        widths[count - 1] += remainder;
        widths
    }
}

impl Sizeable for Tile {
    fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn can_grow(&self) -> bool {
        true
    }
}

impl Renderable for Tile {
    fn view(&mut self) -> String {
        let widths = self.column_widths();
        let blocks: Vec<String> = self
            .items
            .iter()
            .zip(widths)
            .map(|(item, width)| {
                let mut item = item.borrow_mut();
                item.set_width(width);
                item.view()
            })
            .collect();
        join_horizontal(&blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::Tile;
    use crate::core::component::{shared, Renderable, Sizeable};
    use pretty_assertions::assert_eq;

    struct Column {
        fill: char,
        width: usize,
        height: usize,
    }

    impl Column {
        fn new(fill: char, height: usize) -> Self {
            Self {
                fill,
                width: 0,
                height,
            }
        }
    }

    impl Sizeable for Column {
        fn set_width(&mut self, width: usize) {
            self.width = width;
        }

        fn set_height(&mut self, height: usize) {
            self.height = height;
        }

        fn width(&self) -> usize {
            self.width
        }

        fn height(&self) -> usize {
            self.height
        }
    }

    impl Renderable for Column {
        fn view(&mut self) -> String {
            vec![self.fill.to_string().repeat(self.width); self.height].join("\n")
        }
    }

    #[test]
    fn last_column_absorbs_the_remainder() {
        let a = shared(Column::new('a', 1));
        let b = shared(Column::new('b', 1));
        let c = shared(Column::new('c', 1));
        let mut tile = Tile::new();
        tile.push(a.clone());
        tile.push(b.clone());
        tile.push(c.clone());
        tile.set_size(11, 5);

        assert_eq!(tile.view(), "aaabbbccccc");
        assert_eq!(a.borrow().width(), 3);
        assert_eq!(b.borrow().width(), 3);
        assert_eq!(c.borrow().width(), 5);
    }

    #[test]
    fn heights_are_not_redistributed() {
        let a = shared(Column::new('a', 2));
        let b = shared(Column::new('b', 1));
        let mut tile = Tile::new();
        tile.push(a.clone());
        tile.push(b.clone());
        tile.set_size(4, 9);
        tile.view();

        assert_eq!(a.borrow().height(), 2);
        assert_eq!(b.borrow().height(), 1);
        assert_eq!(tile.height(), 9);
    }

    #[test]
    fn shorter_columns_are_padded() {
        let a = shared(Column::new('a', 2));
        let b = shared(Column::new('b', 1));
        let mut tile = Tile::new();
        tile.push(a);
        tile.push(b);
        tile.set_size(4, 2);

        assert_eq!(tile.view(), "aabb\naa  ");
    }

    #[test]
    fn unsized_tile_splits_the_default_width() {
        let a = shared(Column::new('a', 1));
        let b = shared(Column::new('b', 1));
        let mut tile = Tile::new();
        tile.add_item(a.clone()).add_item(b.clone());

        assert_eq!(tile.column_widths(), vec![40, 40]);
        assert_eq!(tile.height(), 25);
    }

    #[test]
    fn empty_tile_renders_nothing() {
        let mut tile = Tile::new();
        tile.set_size(10, 1);
        assert!(tile.column_widths().is_empty());
        assert_eq!(tile.view(), "");
        assert!(tile.can_grow());
    }
}
