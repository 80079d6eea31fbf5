//! Treasure Quest (workspace facade crate).
//!
//! Re-exports the workspace crates as `treasure_quest::{core,input,term,types}`
//! and holds the binary's configuration so it can be tested.

pub mod config;

pub use treasure_quest_core as core;
pub use treasure_quest_input as input;
pub use treasure_quest_term as term;
pub use treasure_quest_types as types;
