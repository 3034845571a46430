//! Deferred actions.
//!
//! A [`Cmd`] is work a component wants done outside the update cycle (a fetch, a timer, a
//! cursor blink). The host runs it and feeds the produced message back through `update`.

use std::fmt;

use crate::core::message::Msg;

pub type CmdFn = Box<dyn FnOnce() -> Option<Msg> + Send>;

pub enum Cmd {
    /// A single action producing at most one message.
    Run(CmdFn),
    /// Actions with no ordering guarantee between them.
    Batch(Vec<Cmd>),
    /// Actions whose messages must be delivered in order.
    Sequence(Vec<Cmd>),
}

impl Cmd {
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> Option<Msg> + Send + 'static,
    {
        Cmd::Run(Box::new(action))
    }

    /// A command that immediately yields `msg`.
    pub fn message(msg: Msg) -> Self {
        Cmd::new(move || Some(msg))
    }

    /// Combines commands without ordering. `None` entries are dropped; a single survivor is
    /// returned as-is and an empty list yields `None`.
    pub fn batch<I>(cmds: I) -> Option<Cmd>
    where
        I: IntoIterator<Item = Option<Cmd>>,
    {
        Self::collect(cmds, Cmd::Batch)
    }

    /// Combines commands that must run in order. Same collapsing rules as [`Cmd::batch`].
    pub fn sequence<I>(cmds: I) -> Option<Cmd>
    where
        I: IntoIterator<Item = Option<Cmd>>,
    {
        Self::collect(cmds, Cmd::Sequence)
    }

    fn collect<I>(cmds: I, wrap: fn(Vec<Cmd>) -> Cmd) -> Option<Cmd>
    where
        I: IntoIterator<Item = Option<Cmd>>,
    {
        let mut cmds: Vec<Cmd> = cmds.into_iter().flatten().collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(wrap(cmds)),
        }
    }

    /// Runs the whole command tree on the calling thread, depth first, and returns the messages
    /// it produced in execution order.
    pub fn into_messages(self) -> Vec<Msg> {
        let mut out = Vec::new();
        self.run_into(&mut out);
        out
    }

    fn run_into(self, out: &mut Vec<Msg>) {
        match self {
            Cmd::Run(action) => out.extend(action()),
            Cmd::Batch(cmds) | Cmd::Sequence(cmds) => {
                for cmd in cmds {
                    cmd.run_into(out);
                }
            }
        }
    }
}

impl fmt::Debug for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cmd::Run(_) => f.write_str("Run(..)"),
            Cmd::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Cmd::Sequence(cmds) => f.debug_tuple("Sequence").field(cmds).finish(),
        }
    }
}
