//! Snapshot module - a plain copy of the session for drawing
//!
//! [`GameState::snapshot`](crate::GameState::snapshot) fills one of these so
//! the presentation layer never borrows the board or the player.

use crate::game_state::GameStatus;
use crate::types::{Coord, COLS, ROWS};

/// Plain copy of what the presentation layer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Current glyph of every cell, indexed `[row][col]` (row 0 is the south edge)
    pub glyphs: [[char; COLS as usize]; ROWS as usize],
    pub position: Coord,
    pub strength: u32,
    pub keys: u32,
    pub moves: u32,
    pub status: GameStatus,
}
