//! Game rules
//!
//! Plain five-in-a-row on a 15x15 board: no captures, no forbidden moves,
//! overlines win.

pub mod win;

pub use win::{find_five_line_at_pos, has_five_at_pos, WIN_LENGTH};
