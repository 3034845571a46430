//! Focus ring over peer widgets.

use tracing::debug;

use crate::core::command::Cmd;
use crate::core::component::{Focusable, Model, Placeable, Renderable, Shared, Sizeable};
use crate::core::keybindings::GroupKeyMap;
use crate::core::message::Msg;
use crate::error::{check_index, LayoutError, Result};
use crate::widgets::layout::Layout;

const CONTAINER: &str = "group";

/// A set of focusable widgets where exactly one is current, plus the layout that sizes and
/// renders them.
///
/// Items are in tab order. The layout may hold more than the focus ring (a header or status bar
/// that never takes focus).
pub struct Group {
    items: Vec<Shared<dyn Focusable>>,
    layout: Layout,
    current: usize,
    focused: bool,
    keymap: GroupKeyMap,
}

impl Group {
    pub fn builder() -> GroupBuilder {
        GroupBuilder::default()
    }

    pub fn items(&self) -> &[Shared<dyn Focusable>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the current item.
    pub fn focus_index(&self) -> usize {
        self.current
    }

    /// The current item.
    ///
    /// # Panics
    /// Panics if the group has no items.
    pub fn current(&self) -> &Shared<dyn Focusable> {
        assert!(
            !self.items.is_empty(),
            "Group::current called on a group with no items"
        );
        &self.items[self.current]
    }

    pub fn try_current(&self) -> Result<&Shared<dyn Focusable>> {
        self.items
            .get(self.current)
            .ok_or(LayoutError::Empty { container: CONTAINER })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    pub fn keymap(&self) -> &GroupKeyMap {
        &self.keymap
    }

    pub fn set_keymap(&mut self, keymap: GroupKeyMap) {
        self.keymap = keymap;
    }

    /// Moves focus to the next item, wrapping around. Returns the new item's focus action.
    pub fn focus_next(&mut self) -> Option<Cmd> {
        let count = self.items.len();
        if count == 0 {
            return None;
        }
        self.move_focus((self.current + 1) % count)
    }

    /// Moves focus to the previous item, wrapping around. Returns the new item's focus action.
    pub fn focus_prev(&mut self) -> Option<Cmd> {
        let count = self.items.len();
        if count == 0 {
            return None;
        }
        self.move_focus((self.current + count - 1) % count)
    }

    /// Moves focus to `index`.
    pub fn set_focus_index(&mut self, index: usize) -> Result<Option<Cmd>> {
        check_index(CONTAINER, index, self.items.len())?;
        Ok(self.move_focus(index))
    }

    fn move_focus(&mut self, index: usize) -> Option<Cmd> {
        let from = self.current;
        self.items[from].borrow_mut().blur();
        self.current = index;
        debug!(container = CONTAINER, from, to = index, "focus moved");
        self.items[index].borrow_mut().focus()
    }
}

impl Model for Group {
    /// Runs every item's init, then focuses the group and its current item.
    fn init(&mut self) -> Option<Cmd> {
        let mut cmds: Vec<Option<Cmd>> = self
            .items
            .iter()
            .map(|item| item.borrow_mut().init())
            .collect();
        cmds.push(self.focus());
        Cmd::sequence(cmds)
    }

    /// Handles the group's focus keys; everything else goes to every item.
    ///
    /// Focus keys are honoured whether or not the group itself is focused. Ignoring input while
    /// blurred is left to the leaves.
    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(key) = msg.as_key() {
            if self.keymap.focus_next.matches(key) {
                return self.focus_next();
            }
            if self.keymap.focus_prev.matches(key) {
                return self.focus_prev();
            }
        }

        Cmd::batch(self.items.iter().map(|item| item.borrow_mut().update(msg)))
    }
}

impl Focusable for Group {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        let item = self.items.get(self.current)?;
        item.borrow_mut().focus()
    }

    /// Marks the group blurred. The current item keeps its own focus state.
    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Sizeable for Group {
    fn set_width(&mut self, width: usize) {
        self.layout.set_width(width);
    }

    fn set_height(&mut self, height: usize) {
        self.layout.set_height(height);
    }

    fn set_size(&mut self, width: usize, height: usize) {
        self.layout.set_size(width, height);
    }

    fn width(&self) -> usize {
        self.layout.width()
    }

    fn height(&self) -> usize {
        self.layout.height()
    }

    fn can_grow(&self) -> bool {
        true
    }
}

impl Renderable for Group {
    fn view(&mut self) -> String {
        self.layout.view()
    }
}

/// Builds a [`Group`]. Later calls override earlier ones.
#[derive(Default)]
pub struct GroupBuilder {
    items: Vec<Shared<dyn Focusable>>,
    default_layout: Vec<Shared<dyn Placeable>>,
    layout: Option<Layout>,
    keymap: Option<GroupKeyMap>,
    initial_focus: usize,
}

impl GroupBuilder {
    /// Appends a focusable item to the ring. Unless an explicit layout is given, it is also
    /// stacked in the group's layout.
    pub fn item<T: Focusable + 'static>(mut self, item: Shared<T>) -> Self {
        self.default_layout.push(item.clone());
        self.items.push(item);
        self
    }

    /// Uses `layout` for sizing and rendering instead of a plain stack of the items.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn keymap(mut self, keymap: GroupKeyMap) -> Self {
        self.keymap = Some(keymap);
        self
    }

    pub fn initial_focus(mut self, index: usize) -> Self {
        self.initial_focus = index;
        self
    }

    /// Fails when `initial_focus` is out of range for a non-empty item list.
    pub fn build(self) -> Result<Group> {
        let GroupBuilder {
            items,
            default_layout,
            layout,
            keymap,
            initial_focus,
        } = self;

        let current = if items.is_empty() {
            0
        } else {
            check_index(CONTAINER, initial_focus, items.len())?;
            initial_focus
        };

        Ok(Group {
            items,
            layout: layout.unwrap_or_else(|| Layout::with_items(default_layout)),
            current,
            focused: false,
            keymap: keymap.unwrap_or_default(),
        })
    }
}
