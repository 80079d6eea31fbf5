//! Core game logic module - pure and testable
//!
//! This crate contains the board model, the space variants and the movement
//! protocol. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: every random draw comes from an injected [`RandomSource`]
//! - **Testable**: seeded or scripted sources reproduce any board or fight
//! - **Portable**: prompts and rendering live in the `input` and `term` crates
//!
//! # Module Structure
//!
//! - [`board`]: 6x6 arena of spaces, layout parsing and movement
//! - [`combat`]: one-shot bandit fights and the wager collaborator
//! - [`game_state`]: one session (board, player, position, status)
//! - [`player`]: strength, keys and victory
//! - [`rng`]: the random source threaded through the game
//! - [`space`]: the five cell variants and their arrival effects
//! - [`template`]: base layouts, marker scatter and the template store
//!
//! # Game Rules
//!
//! - **Travel**: every accepted move costs 1 strength point
//! - **Mountains**: impassable; the board edge is too
//! - **Teleporters**: stepping on one lands the player on the other
//! - **Bandits**: hidden; each fights once, wagering strength for a key
//! - **Vault**: opens when the player arrives holding 4 keys
//! - **Defeat**: strength reaches 0
//!
//! # Example
//!
//! ```
//! use treasure_quest_core::{Board, GameRng, GameState, GameStatus, MoveOutcome};
//! use treasure_quest_types::Direction;
//!
//! let layout = concat!(
//!     "x.....", "......", "AAAAA.", "....O.", "O.....", ".....!",
//! );
//! let mut game = GameState::new(Board::from_layout(layout).unwrap(), 30);
//! let mut rng = GameRng::seeded(7);
//! let mut wager = |max_power: u32| max_power;
//!
//! // The south edge rejects the move
//! let outcome = game.step(Direction::South, &mut rng, &mut wager).unwrap();
//! assert_eq!(outcome, MoveOutcome::OffEdge);
//!
//! // A normal step costs one strength point
//! game.step(Direction::North, &mut rng, &mut wager).unwrap();
//! assert_eq!(game.player().strength(), 29);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod combat;
pub mod error;
pub mod game_state;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod space;
pub mod template;

pub use treasure_quest_types as types;

// Re-export commonly used types for convenience
pub use board::{Arrival, Board, MoveOutcome};
pub use combat::{fight, CombatReport, WagerSource};
pub use error::{BoardError, TemplateError};
pub use game_state::{GameState, GameStatus};
pub use player::Player;
pub use rng::{GameRng, RandomSource};
pub use snapshot::GameSnapshot;
pub use space::{Encounter, Space, SpaceKind, Visit};
pub use template::{Template, TemplateSet};
