#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tape_layout::{shared, Cmd, Focusable, Model, Msg, Renderable, Shared, Sizeable};

/// Focusable stand-in that records what happened to it.
#[derive(Default)]
pub struct Recorder {
    pub name: &'static str,
    pub focused: bool,
    pub grows: bool,
    pub width: usize,
    pub height: usize,
    pub focus_calls: usize,
    pub received: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            grows: true,
            ..Self::default()
        }
    }

    pub fn shared(name: &'static str) -> Shared<Recorder> {
        shared(Self::new(name))
    }
}

impl Sizeable for Recorder {
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
        self.grows
    }
}

impl Renderable for Recorder {
    fn view(&mut self) -> String {
        let marker = if self.focused { ">" } else { " " };
        format!("{marker}{}", self.name)
    }
}

impl Model for Recorder {
    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let entry = match msg {
            Msg::Key(key) => key.key_id().to_string(),
            Msg::Resize { columns, rows } => format!("resize {columns}x{rows}"),
            Msg::Custom(_) => "custom".to_string(),
        };
        self.received.borrow_mut().push(entry);
        None
    }
}

impl Focusable for Recorder {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        self.focus_calls += 1;
        let name = self.name;
        Some(Cmd::message(Msg::custom(name)))
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Name carried by the last message a focus action produced.
pub fn focus_tag(cmd: Option<Cmd>) -> Option<&'static str> {
    cmd?.into_messages()
        .iter()
        .rev()
        .find_map(|msg| msg.downcast_ref::<&'static str>().copied())
}
