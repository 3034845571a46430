//! Layout and focus composition for terminal UIs.
//!
//! Widgets are sized, focused and rendered through a handful of small capability traits.
//! Containers build on those traits to arrange heterogeneous widgets inside a bounded grid of
//! character cells and to route input to exactly one focused leaf.
//!
//! # Public API Overview
//! - Capabilities: [`Sizeable`], [`Renderable`], [`Placeable`], [`Model`], [`Focusable`].
//! - Containers: [`Layout`] (vertical stack), [`Tile`] (horizontal row), [`Group`] (focus ring
//!   over widgets), [`TabGroup`] (focus ring over pages with a navigation bar).
//! - Leaves: [`Text`], [`StatusBar`], [`HelpBar`], [`Pane`], [`TextInput`], [`Table`].
//! - Deferred work: [`Cmd`] values returned from `init`/`update`/`focus`, run by the host, whose
//!   results come back as [`Msg`]s.
//! - Styling: [`Style`], [`Styles`] (focused/blurred pair) and [`Common`] for widgets that
//!   convert outer size into content size.
//!
//! The whole tree is driven from a single thread: the host delivers one message at a time and
//! every resize or focus change completes within that call.

#![allow(clippy::new_without_default, clippy::len_without_is_empty)]

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod widgets;

/// Capability traits and shared handles.
pub use crate::core::component::{
    shared, Focusable, Model, Placeable, Renderable, Shared, Sizeable,
};

/// Deferred actions and messages.
pub use crate::core::command::Cmd;
pub use crate::core::message::{KeyMsg, Msg};

/// Key bindings and help.
pub use crate::core::keybindings::{
    Bindings, GroupKeyMap, Help, KeyBinding, KeyId, KeyMap, TabKeyMap,
};

/// Styling and per-widget size state.
pub use crate::core::common::Common;
pub use crate::core::style::{BorderKind, NavStyles, Spacing, Style, Styles};

/// Containers and leaf widgets.
pub use crate::widgets::{
    CursorBlink, Group, GroupBuilder, HelpBar, Layout, Pane, PaneKeyMap, StatusBar, Submitted,
    TabGroup, TabGroupBuilder, TabItem, Table, TableKeyMap, Text, TextInput, TextInputKeyMap, Tile,
};

pub use crate::config::EnvConfig;
pub use crate::error::{LayoutError, Result};

/// ANSI-aware width and block helpers.
pub use crate::core::text::{fit_to_width, join_horizontal, join_vertical, visible_width};
