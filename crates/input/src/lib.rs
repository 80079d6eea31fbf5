//! Player input module (game-facing).
//!
//! Everything the game asks the player goes through a [`Prompter`]: integer
//! wagers, yes/no questions and moves typed with the player's
//! [`ControlScheme`]. Prompts read whole lines, so any `BufRead` works and the
//! tests drive them with in-memory buffers.

pub mod controls;
pub mod prompt;

pub use treasure_quest_core as core;
pub use treasure_quest_types as types;

pub use controls::{ControlError, ControlScheme, KeyPool, USABLE_KEYS};
pub use prompt::{parse_int, Prompter};
