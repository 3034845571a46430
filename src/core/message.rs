//! Messages delivered to components by the host event loop.

use std::any::Any;
use std::fmt;

/// A key press, identified by a normalized key id such as `"tab"`, `"shift+tab"` or `"ctrl+l"`.
///
/// Parsing raw terminal bytes into key ids is the host's job; components only match ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    key_id: String,
    raw: String,
}

impl KeyMsg {
    pub fn new(key_id: impl Into<String>) -> Self {
        let raw = key_id.into();
        Self {
            key_id: raw.to_ascii_lowercase(),
            raw,
        }
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// The id as the host sent it. Text inputs read typed characters from here, so `"A"` stays
    /// upper case.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether this key press is the given key id (case-insensitive).
    pub fn is(&self, key_id: &str) -> bool {
        self.key_id.eq_ignore_ascii_case(key_id)
    }
}

/// Message delivered to `Model::update`.
///
/// Notes:
/// - `Resize` carries the terminal size in character cells.
/// - `Custom` carries completion results of deferred actions; containers forward it opaquely.
pub enum Msg {
    Key(KeyMsg),
    Resize { columns: u16, rows: u16 },
    Custom(Box<dyn Any + Send>),
}

impl Msg {
    pub fn key(key_id: impl Into<String>) -> Self {
        Msg::Key(KeyMsg::new(key_id))
    }

    pub fn custom<T: Any + Send>(value: T) -> Self {
        Msg::Custom(Box::new(value))
    }

    pub fn as_key(&self) -> Option<&KeyMsg> {
        match self {
            Msg::Key(key) => Some(key),
            _ => None,
        }
    }

    /// Borrows the payload of a `Custom` message if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Msg::Custom(payload) => payload.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Debug for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Msg::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Msg::Resize { columns, rows } => f
                .debug_struct("Resize")
                .field("columns", columns)
                .field("rows", rows)
                .finish(),
            Msg::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
