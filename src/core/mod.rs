//! Core contracts and plumbing: capability traits, messages, deferred actions, key bindings,
//! styles and text measurement.

pub mod command;
pub mod common;
pub mod component;
pub mod keybindings;
pub mod message;
pub mod style;
pub mod text;
