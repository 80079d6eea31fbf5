//! Board module - the grid of spaces and player movement
//!
//! The board is a 6x6 grid stored as a flat row-major arena of [`Space`]s.
//! Adjacency is never stored: [`Board::neighbor`] computes the eight compass
//! offsets with bounds checking, so links are always symmetric and can never
//! dangle.
//!
//! Coordinates: row 0 holds the first `COLS` characters of the layout. North
//! is increasing row index, so [`Board`]'s `Display` prints the highest row
//! first.

use std::fmt;
use std::ops::Index;

use arrayvec::ArrayVec;
use tracing::debug;

use crate::combat::WagerSource;
use crate::error::BoardError;
use crate::player::Player;
use crate::rng::RandomSource;
use crate::space::{Space, Visit};
use crate::template::Template;
use crate::types::{glyph, Coord, Direction, CELL_COUNT, COLS, ROWS, TELEPORT_COUNT};

/// A successful move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    /// Where the player now stands
    pub position: Coord,
    /// True when a teleporter carried the player to its partner
    pub teleported: bool,
    pub visit: Visit,
}

/// Result of asking the board to move the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move would leave the board; nothing changed
    OffEdge,
    /// A mountain at `at` blocks the way; nothing changed
    Blocked { at: Coord },
    Arrived(Arrival),
}

impl MoveOutcome {
    /// The player's position after this move, given where they started
    pub fn position_from(&self, current: Coord) -> Coord {
        match self {
            MoveOutcome::Arrived(arrival) => arrival.position,
            MoveOutcome::OffEdge | MoveOutcome::Blocked { .. } => current,
        }
    }

    pub fn is_rejected(&self) -> bool {
        !matches!(self, MoveOutcome::Arrived(_))
    }
}

/// The game board - owns every space
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of spaces, row-major order (row * COLS + col)
    spaces: Vec<Space>,
    start: Coord,
}

impl Board {
    /// Scatter markers onto a template and build the board
    pub fn generate<R: RandomSource>(template: &Template, rng: &mut R) -> Result<Self, BoardError> {
        let layout = template.scatter(rng)?;
        debug!(%layout, "board layout generated");
        Self::from_layout(&layout)
    }

    /// Build a board from a finished layout
    ///
    /// The layout is read left to right, wrapping every `COLS` characters
    /// into the next row. Teleporters are paired in the order they appear.
    pub fn from_layout(layout: &str) -> Result<Self, BoardError> {
        let found = layout.chars().count();
        if found != CELL_COUNT {
            return Err(BoardError::SizeMismatch {
                expected: CELL_COUNT,
                found,
            });
        }

        let mut spaces = Vec::with_capacity(CELL_COUNT);
        let mut starts: ArrayVec<Coord, CELL_COUNT> = ArrayVec::new();
        let mut teleports: ArrayVec<Coord, CELL_COUNT> = ArrayVec::new();
        let mut finishes = 0;

        for (index, ch) in layout.chars().enumerate() {
            let coord = Coord::from_index(index).ok_or(BoardError::SizeMismatch {
                expected: CELL_COUNT,
                found,
            })?;
            let space = match ch {
                glyph::MOUNTAIN => Space::mountain(),
                glyph::BLANK => Space::blank(),
                glyph::ENEMY => Space::enemy(),
                glyph::START => {
                    starts.push(coord);
                    Space::start()
                }
                glyph::FINISH => {
                    finishes += 1;
                    Space::finish()
                }
                glyph::TELEPORT => {
                    teleports.push(coord);
                    Space::teleport(coord)
                }
                other => return Err(BoardError::UnexpectedGlyph { glyph: other, index }),
            };
            spaces.push(space);
        }

        if starts.len() != 1 {
            return Err(BoardError::StartCount(starts.len()));
        }
        if finishes != 1 {
            return Err(BoardError::FinishCount(finishes));
        }
        if teleports.len() != TELEPORT_COUNT {
            return Err(BoardError::TeleportCount(teleports.len()));
        }

        let (first, second) = (teleports[0], teleports[1]);
        spaces[first.index()].link_partner(second);
        spaces[second.index()].link_partner(first);

        Ok(Self {
            spaces,
            start: starts[0],
        })
    }

    /// Where the player enters the board
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The space at `coord`, or None if out of bounds
    pub fn space(&self, coord: Coord) -> Option<&Space> {
        if coord.row >= ROWS || coord.col >= COLS {
            return None;
        }
        self.spaces.get(coord.index())
    }

    /// Get a reference to every space in row-major order
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// The neighbor of `coord` in `direction`, or None at the board edge
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        coord.step(direction)
    }

    /// Every bound neighbor of `coord` with the direction that reaches it
    pub fn neighbors(&self, coord: Coord) -> ArrayVec<(Direction, Coord), 8> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.neighbor(coord, dir).map(|n| (dir, n)))
            .collect()
    }

    /// Iterate over every coordinate with its space
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Space)> {
        self.spaces
            .iter()
            .enumerate()
            .filter_map(|(i, s)| Coord::from_index(i).map(|c| (c, s)))
    }

    /// Current glyph of every cell, indexed `[row][col]`
    pub fn glyphs(&self) -> [[char; COLS as usize]; ROWS as usize] {
        let mut out = [[glyph::BLANK; COLS as usize]; ROWS as usize];
        for (coord, space) in self.iter() {
            out[coord.row as usize][coord.col as usize] = space.glyph();
        }
        out
    }

    /// Move the player one step from `from` in `direction`
    ///
    /// Edges and mountains reject the move without touching any state.
    /// Stepping onto a teleporter lands the player on its partner.
    pub fn move_player<R, W>(
        &mut self,
        from: Coord,
        direction: Direction,
        player: &mut Player,
        rng: &mut R,
        wagers: &mut W,
    ) -> Result<MoveOutcome, W::Error>
    where
        R: RandomSource,
        W: WagerSource,
    {
        let Some(target) = self.neighbor(from, direction) else {
            debug!(%from, %direction, "move off the board edge");
            return Ok(MoveOutcome::OffEdge);
        };

        let target_space = &self.spaces[target.index()];
        if target_space.is_mountain() {
            debug!(%from, %target, "move blocked by mountain");
            return Ok(MoveOutcome::Blocked { at: target });
        }

        let (destination, teleported) = match target_space.partner() {
            Some(partner) => (partner, true),
            None => (target, false),
        };

        self.spaces[from.index()].vacate();
        let visit = self.spaces[destination.index()].resolve_entry(player, rng, wagers)?;

        debug!(%from, %direction, %destination, teleported, "player moved");

        Ok(MoveOutcome::Arrived(Arrival {
            position: destination,
            teleported,
            visit,
        }))
    }
}

impl Index<Coord> for Board {
    type Output = Space;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.spaces[coord.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                write!(f, "{} ", self[Coord::new(row, col)].glyph())?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::SpaceKind;

    // Row 0 first; row 5 is the northern edge.
    const LAYOUT: &str = concat!(
        "x.eA..", // row 0
        ".A..O.", // row 1
        "......", // row 2
        "..e...", // row 3
        "O...A.", // row 4
        ".....!", // row 5
    );

    #[test]
    fn from_layout_finds_start_and_pairs_teleports() {
        let board = Board::from_layout(LAYOUT).unwrap();
        assert_eq!(board.start(), Coord::new(0, 0));
        assert_eq!(board[Coord::new(1, 4)].partner(), Some(Coord::new(4, 0)));
        assert_eq!(board[Coord::new(4, 0)].partner(), Some(Coord::new(1, 4)));
        assert_eq!(board[Coord::new(5, 5)].kind(), SpaceKind::Finish);
        assert_eq!(
            board[Coord::new(0, 2)].kind(),
            SpaceKind::Enemy { resolved: false }
        );
    }

    #[test]
    fn neighbors_are_bounded() {
        let board = Board::from_layout(LAYOUT).unwrap();
        assert_eq!(board.neighbors(Coord::new(0, 0)).len(), 3);
        assert_eq!(board.neighbors(Coord::new(0, 3)).len(), 5);
        assert_eq!(board.neighbors(Coord::new(2, 2)).len(), 8);
    }

    #[test]
    fn space_out_of_bounds_is_none() {
        let board = Board::from_layout(LAYOUT).unwrap();
        assert!(board.space(Coord::new(ROWS, 0)).is_none());
        assert!(board.space(Coord::new(0, COLS)).is_none());
        assert!(board.space(Coord::new(5, 5)).is_some());
    }

    #[test]
    fn display_prints_top_row_first() {
        let board = Board::from_layout(LAYOUT).unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], ". . . . . ! ");
        assert_eq!(lines[5], "x . . A . . ");
        assert_eq!(lines[6], "");
    }

    #[test]
    fn glyphs_match_display_order() {
        let board = Board::from_layout(LAYOUT).unwrap();
        let glyphs = board.glyphs();
        assert_eq!(glyphs[0][0], glyph::OCCUPIED);
        assert_eq!(glyphs[0][3], glyph::MOUNTAIN);
        assert_eq!(glyphs[5][5], glyph::FINISH);
        // Bandits stay hidden.
        assert_eq!(glyphs[0][2], glyph::BLANK);
    }

    #[test]
    fn layout_errors_are_reported() {
        assert_eq!(
            Board::from_layout(&LAYOUT[..10]),
            Err(BoardError::SizeMismatch {
                expected: CELL_COUNT,
                found: 10
            })
        );
        assert_eq!(
            Board::from_layout(&LAYOUT.replace('x', ".")),
            Err(BoardError::StartCount(0))
        );
        assert_eq!(
            Board::from_layout(&LAYOUT.replace('!', "x")),
            Err(BoardError::StartCount(2))
        );
        assert_eq!(
            Board::from_layout(&LAYOUT.replacen('O', ".", 1)),
            Err(BoardError::TeleportCount(1))
        );
        assert_eq!(
            Board::from_layout(&LAYOUT.replace('!', ".")),
            Err(BoardError::FinishCount(0))
        );
        assert_eq!(
            Board::from_layout(&LAYOUT.replace('A', "#")),
            Err(BoardError::UnexpectedGlyph {
                glyph: '#',
                index: 3
            })
        );
    }
}
