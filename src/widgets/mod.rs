//! Containers and reference leaf widgets.

pub mod group;
pub mod help;
pub mod layout;
pub mod pane;
pub mod status_bar;
pub mod tab_group;
pub mod table;
pub mod text;
pub mod text_input;
pub mod tile;

pub use group::{Group, GroupBuilder};
pub use help::HelpBar;
pub use layout::{Layout, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use pane::{Pane, PaneKeyMap};
pub use status_bar::StatusBar;
pub use tab_group::{TabGroup, TabGroupBuilder, TabItem};
pub use table::{Table, TableKeyMap};
pub use text::Text;
pub use text_input::{CursorBlink, Submitted, TextInput, TextInputKeyMap};
pub use tile::Tile;
