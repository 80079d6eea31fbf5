//! Terminal presentation for Treasure Quest.
//!
//! The board is drawn into a small framebuffer by [`BoardView`] and printed
//! by [`TerminalRenderer`], either with crossterm color commands or as plain
//! text. [`narrate`] turns move outcomes into the story lines printed between
//! boards.

pub mod board_view;
pub mod fb;
pub mod narrate;
pub mod renderer;

pub use treasure_quest_core as core;
pub use treasure_quest_input as input;
pub use treasure_quest_types as types;

pub use board_view::BoardView;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_lines_into, encode_plain_into, TerminalRenderer};
