//! Focus ring over whole pages, with a navigation bar.

use tracing::debug;

use crate::core::command::Cmd;
use crate::core::common::Common;
use crate::core::component::{Focusable, Model, Renderable, Sizeable};
use crate::core::keybindings::TabKeyMap;
use crate::core::message::Msg;
use crate::core::style::{NavStyles, Styles};
use crate::core::text::join_vertical;
use crate::error::{check_index, LayoutError, Result};

const CONTAINER: &str = "tab group";
const UNTITLED: &str = "Tab Item";

/// One page of a [`TabGroup`].
///
/// `active` is stored as given and never consulted for rendering; the tab group's index decides
/// which page is shown. The two can disagree, and callers decide what the flag means.
pub struct TabItem {
    title: String,
    page: Box<dyn Focusable>,
    active: bool,
}

impl TabItem {
    pub fn new(title: impl Into<String>, page: impl Focusable + 'static) -> Self {
        Self {
            title: title.into(),
            page: Box::new(page),
            active: false,
        }
    }

    /// A page titled `"Tab Item"`.
    pub fn untitled(page: impl Focusable + 'static) -> Self {
        Self::new(UNTITLED, page)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn page(&self) -> &dyn Focusable {
        self.page.as_ref()
    }

    pub fn page_mut(&mut self) -> &mut dyn Focusable {
        self.page.as_mut()
    }
}

/// Pages shown one at a time under a bar of titles.
///
/// Without a frame the tab group's content size is the size it was given. With one, the frame of
/// the active template is subtracted first and the bar and page are drawn inside it.
pub struct TabGroup {
    tabs: Vec<TabItem>,
    current: usize,
    common: Common,
    framed: bool,
    keymap: TabKeyMap,
    nav: NavStyles,
}

impl TabGroup {
    pub fn builder() -> TabGroupBuilder {
        TabGroupBuilder::default()
    }

    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut [TabItem] {
        &mut self.tabs
    }

    pub fn titles(&self) -> Vec<&str> {
        self.tabs.iter().map(TabItem::title).collect()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Index of the page being shown.
    pub fn tab_index(&self) -> usize {
        self.current
    }

    /// The page being shown.
    ///
    /// # Panics
    /// Panics if the tab group has no tabs.
    pub fn current(&self) -> &TabItem {
        assert!(
            !self.tabs.is_empty(),
            "TabGroup::current called on a tab group with no items"
        );
        &self.tabs[self.current]
    }

    /// # Panics
    /// Panics if the tab group has no tabs.
    pub fn current_mut(&mut self) -> &mut TabItem {
        assert!(
            !self.tabs.is_empty(),
            "TabGroup::current_mut called on a tab group with no items"
        );
        &mut self.tabs[self.current]
    }

    pub fn try_current(&self) -> Result<&TabItem> {
        self.tabs
            .get(self.current)
            .ok_or(LayoutError::Empty { container: CONTAINER })
    }

    pub fn keymap(&self) -> &TabKeyMap {
        &self.keymap
    }

    pub fn set_keymap(&mut self, keymap: TabKeyMap) {
        self.keymap = keymap;
    }

    pub fn nav_styles(&self) -> &NavStyles {
        &self.nav
    }

    /// Replaces the bar decoration and re-fits every page under it.
    pub fn set_nav_styles(&mut self, nav: NavStyles) {
        self.nav = nav;
        self.resize_pages();
    }

    /// Frame templates, when the tab group draws one.
    pub fn styles(&self) -> Option<&Styles> {
        self.framed.then(|| self.common.styles())
    }

    /// Draws a frame around bar and page. Takes effect on the next `set_size`.
    pub fn set_styles(&mut self, styles: Styles) {
        self.common.set_styles(styles);
        self.framed = true;
    }

    /// Shows the next page, wrapping around.
    pub fn next_tab(&mut self) -> Option<Cmd> {
        let count = self.tabs.len();
        if count == 0 {
            return None;
        }
        self.switch_to((self.current + 1) % count)
    }

    /// Shows the previous page, wrapping around.
    pub fn prev_tab(&mut self) -> Option<Cmd> {
        let count = self.tabs.len();
        if count == 0 {
            return None;
        }
        self.switch_to((self.current + count - 1) % count)
    }

    /// Shows the page at `index`.
    pub fn select_tab(&mut self, index: usize) -> Result<Option<Cmd>> {
        check_index(CONTAINER, index, self.tabs.len())?;
        Ok(self.switch_to(index))
    }

    fn switch_to(&mut self, index: usize) -> Option<Cmd> {
        let from = self.current;
        let focused = self.common.focused();
        if focused {
            self.tabs[from].page.blur();
        }
        self.current = index;
        debug!(
            container = CONTAINER,
            from,
            to = index,
            title = self.tabs[index].title.as_str(),
            "tab switched"
        );

        // The page may have been resized while hidden.
        self.resize_page(index);
        if focused {
            self.tabs[index].page.focus()
        } else {
            None
        }
    }

    fn page_height(&self) -> usize {
        self.common.height().saturating_sub(self.nav.height())
    }

    fn resize_page(&mut self, index: usize) {
        let (width, height) = (self.common.width(), self.page_height());
        if let Some(tab) = self.tabs.get_mut(index) {
            tab.page.set_size(width, height);
        }
    }

    fn resize_pages(&mut self) {
        let (width, height) = (self.common.width(), self.page_height());
        for tab in self.tabs.iter_mut() {
            tab.page.set_size(width, height);
        }
    }

    fn render_nav(&self) -> String {
        let mut bar = String::new();
        for (index, tab) in self.tabs.iter().enumerate() {
            bar.push_str(&self.nav.title(&tab.title, index == self.current));
            bar.push_str(&self.nav.separator);
        }
        let bar = bar.strip_suffix(self.nav.separator.as_str()).unwrap_or(&bar);
        self.nav.bar.render(bar)
    }
}

impl Model for TabGroup {
    /// Runs every page's init, leaves only the current page focused, then focuses the group.
    fn init(&mut self) -> Option<Cmd> {
        let mut cmds: Vec<Option<Cmd>> = self.tabs.iter_mut().map(|tab| tab.page.init()).collect();
        let current = self.current;
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            if index != current {
                tab.page.blur();
            }
        }
        cmds.push(self.focus());
        Cmd::sequence(cmds)
    }

    /// Handles tab keys, then forwards the message to every page, hidden or not.
    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let mut cmds = Vec::with_capacity(self.tabs.len() + 1);
        if let Some(key) = msg.as_key() {
            if self.keymap.tab_next.matches(key) {
                cmds.push(self.next_tab());
            } else if self.keymap.tab_prev.matches(key) {
                cmds.push(self.prev_tab());
            }
        }

        for tab in self.tabs.iter_mut() {
            cmds.push(tab.page.update(msg));
        }
        Cmd::batch(cmds)
    }
}

impl Focusable for TabGroup {
    fn focus(&mut self) -> Option<Cmd> {
        self.common.set_focused(true);
        let tab = self.tabs.get_mut(self.current)?;
        tab.page.focus()
    }

    /// Marks the tab group blurred. The current page keeps its own focus state.
    fn blur(&mut self) {
        self.common.set_focused(false);
    }

    fn is_focused(&self) -> bool {
        self.common.focused()
    }
}

/// Every page is sized, shown or hidden, since hidden pages still receive messages.
impl Sizeable for TabGroup {
    fn set_width(&mut self, width: usize) {
        self.common.set_width(width);
        self.resize_pages();
    }

    fn set_height(&mut self, height: usize) {
        self.common.set_height(height);
        self.resize_pages();
    }

    fn set_size(&mut self, width: usize, height: usize) {
        self.common.set_size(width, height);
        self.resize_pages();
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

impl Renderable for TabGroup {
    fn view(&mut self) -> String {
        let nav = self.render_nav();
        let body = match self.tabs.get_mut(self.current) {
            Some(tab) => join_vertical(&[nav, tab.page.view()]),
            None => nav,
        };
        if self.framed {
            self.common.render(&body)
        } else {
            body
        }
    }
}

/// Builds a [`TabGroup`]. Later calls override earlier ones.
#[derive(Default)]
pub struct TabGroupBuilder {
    tabs: Vec<TabItem>,
    keymap: Option<TabKeyMap>,
    nav: Option<NavStyles>,
    styles: Option<Styles>,
    initial_tab: usize,
}

impl TabGroupBuilder {
    pub fn tab(mut self, title: impl Into<String>, page: impl Focusable + 'static) -> Self {
        self.tabs.push(TabItem::new(title, page));
        self
    }

    /// Appends a page with its informational `active` flag set.
    pub fn active_tab(mut self, title: impl Into<String>, page: impl Focusable + 'static) -> Self {
        self.tabs.push(TabItem::new(title, page).with_active(true));
        self
    }

    pub fn item(mut self, item: TabItem) -> Self {
        self.tabs.push(item);
        self
    }

    pub fn keymap(mut self, keymap: TabKeyMap) -> Self {
        self.keymap = Some(keymap);
        self
    }

    pub fn nav_styles(mut self, nav: NavStyles) -> Self {
        self.nav = Some(nav);
        self
    }

    /// Frames bar and page with `styles`; the frame is subtracted before pages are sized.
    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn initial_tab(mut self, index: usize) -> Self {
        self.initial_tab = index;
        self
    }

    /// Fails when `initial_tab` is out of range for a non-empty tab list.
    pub fn build(self) -> Result<TabGroup> {
        let current = if self.tabs.is_empty() {
            0
        } else {
            check_index(CONTAINER, self.initial_tab, self.tabs.len())?;
            self.initial_tab
        };

        let framed = self.styles.is_some();
        let common = Common::new(self.styles.unwrap_or_else(Styles::borderless));

        Ok(TabGroup {
            tabs: self.tabs,
            current,
            common,
            framed,
            keymap: self.keymap.unwrap_or_default(),
            nav: self.nav.unwrap_or_default(),
        })
    }
}
