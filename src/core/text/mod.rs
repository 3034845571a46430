//! Text helpers (ANSI skipping, visible width, fitting and joining rendered blocks).
//!
//! Everything here is pure (string in/string out) so styles and containers can measure and
//! stitch rendered blocks without knowing which widget produced them.

pub mod ansi;
pub mod join;
pub mod width;

pub use join::{fit_to_width, join_horizontal, join_vertical, pad_lines};
pub use width::{block_width, visible_width};
