//! Capability traits shared by widgets and containers.
//!
//! Containers depend only on the narrowest capability they need: layouts take [`Placeable`]
//! items, focus rings take [`Focusable`] items.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::command::Cmd;
use crate::core::message::Msg;

/// Handle for a component owned jointly by a container and its parent.
///
/// A group keeps the same leaf both in its focus ring and in its layout, so leaves are shared
/// rather than moved into one container.
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Something that accepts an outer size and reports its content size.
pub trait Sizeable {
    /// Set the outer width; implementations subtract their own frame.
    fn set_width(&mut self, width: usize);

    /// Set the outer height; implementations subtract their own frame.
    fn set_height(&mut self, height: usize);

    fn set_size(&mut self, width: usize, height: usize) {
        self.set_width(width);
        self.set_height(height);
    }

    /// Content width (frame already subtracted).
    fn width(&self) -> usize;

    /// Content height (frame already subtracted).
    fn height(&self) -> usize;

    /// Whether an enclosing vertical layout may hand this component extra height.
    fn can_grow(&self) -> bool {
        false
    }
}

/// Something that renders its current state to a text block.
pub trait Renderable {
    /// Render the current state. Never fails; sizing must already have happened.
    fn view(&mut self) -> String;
}

/// Anything that can be sized and rendered: the unit a layout arranges.
pub trait Placeable: Sizeable + Renderable {}

impl<T: Sizeable + Renderable> Placeable for T {}

/// Message handling.
pub trait Model {
    /// Startup action, run once by the host before the first message.
    fn init(&mut self) -> Option<Cmd> {
        None
    }

    /// Handle one message. Components that only react while focused must check that themselves.
    fn update(&mut self, _msg: &Msg) -> Option<Cmd> {
        None
    }
}

/// A placeable component that can hold input focus.
pub trait Focusable: Placeable + Model {
    /// Take focus, returning any startup action (cursor blink, refresh).
    fn focus(&mut self) -> Option<Cmd>;

    /// Drop focus. Synchronous.
    fn blur(&mut self);

    fn is_focused(&self) -> bool;
}
