//! Vertical stack container.

use tracing::trace;

use crate::core::component::{Placeable, Renderable, Shared, Sizeable};
use crate::core::style::Style;
use crate::core::text::join_vertical;

/// Size a layout reports before its first `set_size`.
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 25;

/// Stacks items top to bottom.
///
/// Every item gets the full inner width. Extra height is split evenly between the items that
/// report `can_grow()`; fixed items (headers, status bars) keep whatever height they report, and
/// that height must count every row they render, frame included. The integer remainder of the
/// split is not handed out.
pub struct Layout {
    items: Vec<Shared<dyn Placeable>>,
    style: Style,
    width: usize,
    height: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            style: Style::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Shared<dyn Placeable>>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Container template; its frame is subtracted before items are sized.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn push<T: Placeable + 'static>(&mut self, item: Shared<T>) {
        self.items.push(item);
    }

    pub fn push_shared(&mut self, item: Shared<dyn Placeable>) {
        self.items.push(item);
    }

    /// Appends `item` and returns the layout for chaining.
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

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Replaces the container template. Takes effect on the next `set_size`.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }
}

impl Sizeable for Layout {
    fn set_width(&mut self, width: usize) {
        self.width = width.saturating_sub(self.style.horizontal_frame_size());
        self.style = self.style.clone().width(self.width);
        for item in self.items.iter() {
            item.borrow_mut().set_width(self.width);
        }
    }

    fn set_height(&mut self, height: usize) {
        self.height = height.saturating_sub(self.style.vertical_frame_size());
        self.style = self.style.clone().height(self.height);

        let mut fixed_height = 0;
        let mut growable = Vec::new();
        for item in self.items.iter() {
            let item_ref = item.borrow();
            if item_ref.can_grow() {
                growable.push(item);
            } else {
                fixed_height += item_ref.height();
            }
        }

        let grow_height = match growable.len() {
            0 => 0,
            n => self.height.saturating_sub(fixed_height) / n,
        };
        for item in growable {
            item.borrow_mut().set_size(self.width, grow_height);
        }

        trace!(
            width = self.width,
            height = self.height,
            fixed_height,
            grow_height,
            "layout resized"
        );
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

impl Renderable for Layout {
    fn view(&mut self) -> String {
        let blocks: Vec<String> = self
            .items
            .iter()
            .map(|item| item.borrow_mut().view())
            .collect();
        self.style.render(&join_vertical(&blocks))
    }
}

#[cfg(test)]
mod tests {
    use super::{Layout, DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use crate::core::component::{shared, Renderable, Sizeable};
    use crate::core::style::{BorderKind, Style, Styles};
    use crate::widgets::pane::Pane;
    use crate::widgets::status_bar::StatusBar;
    use crate::widgets::text::Text;
    use pretty_assertions::assert_eq;

    struct Block {
        width: usize,
        height: usize,
        grows: bool,
    }

    impl Block {
        fn fixed(height: usize) -> Self {
            Self {
                width: 0,
                height,
                grows: false,
            }
        }

        fn growable() -> Self {
            Self {
                width: 0,
                height: 0,
                grows: true,
            }
        }
    }

    impl Sizeable for Block {
        fn set_width(&mut self, width: usize) {
            self.width = width;
        }

        fn set_height(&mut self, height: usize) {
            if self.grows {
                self.height = height;
            }
        }

        fn width(&self) -> usize {
            self.width
        }

        fn height(&self) -> usize {
            self.height
        }

        fn can_grow(&self) -> bool {
            self.grows
        }
    }

    impl Renderable for Block {
        fn view(&mut self) -> String {
            vec!["#".repeat(self.width); self.height].join("\n")
        }
    }

    #[test]
    fn header_keeps_height_and_body_takes_the_rest() {
        let header = shared(Block::fixed(3));
        let body = shared(Block::growable());
        let mut layout = Layout::new();
        layout.push(header.clone());
        layout.push(body.clone());

        layout.set_size(80, 25);

        assert_eq!(header.borrow().height(), 3);
        assert_eq!(body.borrow().height(), 22);
        assert_eq!(header.borrow().width(), 80);
        assert_eq!(body.borrow().width(), 80);
    }

    #[test]
    fn remainder_height_is_not_distributed() {
        let first = shared(Block::growable());
        let second = shared(Block::growable());
        let mut layout = Layout::new();
        layout.push(first.clone());
        layout.push(second.clone());

        layout.set_size(10, 7);

        assert_eq!(first.borrow().height(), 3);
        assert_eq!(second.borrow().height(), 3);
    }

    #[test]
    fn no_growable_items_is_not_a_fault() {
        let header = shared(Block::fixed(2));
        let mut layout = Layout::new();
        layout.push(header.clone());

        layout.set_size(10, 7);

        assert_eq!(header.borrow().height(), 2);
        assert_eq!(layout.height(), 7);
    }

    #[test]
    fn fixed_items_taller_than_the_layout_leave_zero_for_growth() {
        let header = shared(Block::fixed(9));
        let body = shared(Block::growable());
        let mut layout = Layout::new();
        layout.push(header);
        layout.push(body.clone());

        layout.set_size(10, 4);

        assert_eq!(body.borrow().height(), 0);
    }

    #[test]
    fn container_frame_is_subtracted_first() {
        let body = shared(Block::growable());
        let mut layout = Layout::new().with_style(Style::new().border(BorderKind::Normal));
        layout.push(body.clone());

        layout.set_size(10, 6);

        assert_eq!((layout.width(), layout.height()), (8, 4));
        assert_eq!((body.borrow().width(), body.borrow().height()), (8, 4));
    }

    #[test]
    fn view_stacks_items_without_resizing() {
        let header = shared(Block::fixed(1));
        let body = shared(Block::growable());
        let mut layout = Layout::new();
        layout.push(header);
        layout.push(body.clone());
        layout.set_size(3, 3);

        assert_eq!(layout.view(), "###\n###\n###");

        body.borrow_mut().set_width(1);
        assert_eq!(layout.view(), "###\n#  \n#  ");
    }

    #[test]
    fn resizing_twice_is_idempotent() {
        let header = shared(Block::fixed(1));
        let body = shared(Block::growable());
        let mut layout = Layout::new().with_style(Style::new().border(BorderKind::Rounded));
        layout.push(header);
        layout.push(body);

        layout.set_size(12, 8);
        let first = (layout.width(), layout.height(), layout.view());
        layout.set_size(12, 8);
        assert_eq!((layout.width(), layout.height(), layout.view()), first);
    }

    #[test]
    fn unsized_layout_reports_the_default_terminal() {
        let mut layout = Layout::new();
        layout
            .add_item(shared(Block::fixed(1)))
            .add_item(shared(Block::growable()));

        assert_eq!(layout.len(), 2);
        assert_eq!((layout.width(), layout.height()), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn framed_header_and_status_bar_stay_on_screen() {
        let framed = Style::new().border(BorderKind::Normal);
        let header = shared(Text::new("TITLE").with_style(framed.clone()));
        let body = shared(Pane::new("body").with_styles(Styles::borderless()));
        let status = shared(StatusBar::new("LEFT", "RIGHT").with_style(framed));

        let mut layout = Layout::new();
        layout
            .add_item(header.clone())
            .add_item(body.clone())
            .add_item(status.clone());
        layout.set_size(20, 10);

        assert_eq!(header.borrow().height(), 3);
        assert_eq!(status.borrow().height(), 3);
        assert_eq!(body.borrow().height(), 4);

        let view = layout.view();
        let lines: Vec<&str> = view.split('\n').collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "│TITLE             │");
        assert_eq!(lines[3], "body                ");
        assert_eq!(lines[8], "│LEFT         RIGHT│");
        assert_eq!(lines[9], format!("└{}┘", "─".repeat(18)));
    }
}
