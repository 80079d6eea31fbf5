//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, prompts, terminal rendering).
//!
//! # Board Dimensions
//!
//! The board is a fixed 6x6 grid:
//!
//! - **Rows**: 6 (indexed 0-5, row 0 is the southern edge)
//! - **Columns**: 6 (indexed 0-5, column 0 is the western edge)
//!
//! Templates are flat strings of `ROWS * COLS` characters. The first `COLS`
//! characters become row 0, the next `COLS` row 1, and so on.
//!
//! # Scatter Markers
//!
//! | Glyph | Count | Meaning |
//! |-------|-------|---------|
//! | `x` | 1 | Player start |
//! | `!` | 1 | Vault (finish) |
//! | `O` | 2 | Paired teleporters |
//! | `e` | 10 | Hidden bandits |
//!
//! # Examples
//!
//! ```
//! use treasure_quest_types::{Coord, Direction, COLS, ROWS};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("ne").unwrap();
//! assert_eq!(dir, Direction::NorthEast);
//! assert_eq!(dir.opposite(), Direction::SouthWest);
//!
//! // Step across the grid
//! let origin = Coord::new(0, 0);
//! assert_eq!(origin.step(Direction::NorthEast), Some(Coord::new(1, 1)));
//! assert_eq!(origin.step(Direction::South), None);
//!
//! assert_eq!(ROWS, 6);
//! assert_eq!(COLS, 6);
//! ```

use std::fmt;

/// Board height in rows
pub const ROWS: u8 = 6;

/// Board width in columns
pub const COLS: u8 = 6;

/// Total number of cells on the board
pub const CELL_COUNT: usize = (ROWS as usize) * (COLS as usize);

/// Strength a new player starts with
pub const DEFAULT_STRENGTH: u32 = 30;

/// Strength charged for every accepted move
pub const TRAVEL_COST: i32 = 1;

/// Keys needed to open the vault
pub const KEYS_TO_WIN: u32 = 4;

/// Bandits hidden on every generated board
pub const ENEMY_COUNT: usize = 10;

/// Teleporters on every board (always a single pair)
pub const TELEPORT_COUNT: usize = 2;

/// Lowest possible bandit maximum power
pub const ENEMY_MIN_POWER: u32 = 6;

/// Highest possible bandit maximum power
pub const ENEMY_MAX_POWER: u32 = 10;

/// Markers scattered onto the free cells of a template.
pub const SCATTER_MARKERS: usize = 1 + 1 + TELEPORT_COUNT + ENEMY_COUNT;

/// Template and layout glyphs.
pub mod glyph {
    /// Impassable mountain
    pub const MOUNTAIN: char = 'A';
    /// Free cell in a template, blank settlement in a layout
    pub const BLANK: char = '.';
    /// Hidden bandit (layout only)
    pub const ENEMY: char = 'e';
    /// Player start (layout only), also the occupied marker
    pub const START: char = 'x';
    /// The vault
    pub const FINISH: char = '!';
    /// Teleporter
    pub const TELEPORT: char = 'O';
    /// Glyph drawn on the cell the player currently occupies
    pub const OCCUPIED: char = 'x';
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_fits_on_board() {
        assert_eq!(SCATTER_MARKERS, 14);
        assert!(SCATTER_MARKERS <= CELL_COUNT);
        assert!(ENEMY_MIN_POWER <= ENEMY_MAX_POWER);
    }
}

/// The eight compass directions a player can move in
///
/// North points toward increasing row index, east toward increasing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    SouthWest,
    South,
    SouthEast,
    West,
    East,
    NorthWest,
    North,
    NorthEast,
}

impl Direction {
    /// All directions, in numpad order (1, 2, 3, 4, 6, 7, 8, 9)
    pub const ALL: [Direction; 8] = [
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// Row and column offset of a single step
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::SouthWest => (-1, -1),
            Direction::South => (-1, 0),
            Direction::SouthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthWest => (1, -1),
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
        }
    }

    /// The direction pointing back the way we came
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_quest_types::Direction;
    ///
    /// assert_eq!(Direction::North.opposite(), Direction::South);
    /// assert_eq!(Direction::SouthEast.opposite(), Direction::NorthWest);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::SouthWest => Direction::NorthEast,
            Direction::South => Direction::North,
            Direction::SouthEast => Direction::NorthWest,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::NorthWest => Direction::SouthEast,
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
        }
    }

    /// Default numpad key for this direction
    pub fn numpad_key(&self) -> char {
        match self {
            Direction::SouthWest => '1',
            Direction::South => '2',
            Direction::SouthEast => '3',
            Direction::West => '4',
            Direction::East => '6',
            Direction::NorthWest => '7',
            Direction::North => '8',
            Direction::NorthEast => '9',
        }
    }

    /// Parse direction from string
    ///
    /// Accepts abbreviations or full names (case-insensitive), with or without
    /// a separator: "ne", "northeast", "north-east".
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_quest_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("N"), Some(Direction::North));
    /// assert_eq!(Direction::from_str("south-west"), Some(Direction::SouthWest));
    /// assert_eq!(Direction::from_str("up"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "sw" | "southwest" => Some(Direction::SouthWest),
            "s" | "south" => Some(Direction::South),
            "se" | "southeast" => Some(Direction::SouthEast),
            "w" | "west" => Some(Direction::West),
            "e" | "east" => Some(Direction::East),
            "nw" | "northwest" => Some(Direction::NorthWest),
            "n" | "north" => Some(Direction::North),
            "ne" | "northeast" => Some(Direction::NorthEast),
            _ => None,
        }
    }

    /// Short uppercase label ("SW", "N", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::SouthWest => "SW",
            Direction::South => "S",
            Direction::SouthEast => "SE",
            Direction::West => "W",
            Direction::East => "E",
            Direction::NorthWest => "NW",
            Direction::North => "N",
            Direction::NorthEast => "NE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Position of the cell at flat template index `index`
    ///
    /// Returns None if the index is past the end of the board.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let cols = COLS as usize;
        Some(Self::new((index / cols) as u8, (index % cols) as u8))
    }

    /// Flat row-major index (row * COLS + col)
    #[inline(always)]
    pub fn index(&self) -> usize {
        (self.row as usize) * (COLS as usize) + (self.col as usize)
    }

    /// The neighboring cell in `direction`, or None past the board edge
    pub fn step(&self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || row >= ROWS as i16 || col < 0 || col >= COLS as i16 {
            return None;
        }
        Some(Self::new(row as u8, col as u8))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod coord_tests {
    use super::*;

    #[test]
    fn index_roundtrips_through_from_index() {
        for index in 0..CELL_COUNT {
            let coord = Coord::from_index(index).unwrap();
            assert_eq!(coord.index(), index);
        }
        assert_eq!(Coord::from_index(CELL_COUNT), None);
    }

    #[test]
    fn step_stays_inside_the_grid() {
        let corner = Coord::new(ROWS - 1, COLS - 1);
        assert_eq!(corner.step(Direction::North), None);
        assert_eq!(corner.step(Direction::East), None);
        assert_eq!(corner.step(Direction::NorthEast), None);
        assert_eq!(
            corner.step(Direction::SouthWest),
            Some(Coord::new(ROWS - 2, COLS - 2))
        );
    }

    #[test]
    fn opposite_offsets_cancel() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            let (or, oc) = dir.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0), "{dir}");
        }
    }

    #[test]
    fn numpad_keys_are_unique() {
        let keys: Vec<char> = Direction::ALL.iter().map(|d| d.numpad_key()).collect();
        assert_eq!(keys, vec!['1', '2', '3', '4', '6', '7', '8', '9']);
    }

    #[test]
    fn labels_parse_back() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }
}
