//! Game state module - one session of Treasure Quest
//!
//! Ties together the board, the player and the player's current position.
//! The caller drives the session one [`GameState::step`] at a time and checks
//! [`GameState::status`] after each move.

use tracing::info;

use crate::board::{Board, MoveOutcome};
use crate::combat::WagerSource;
use crate::error::BoardError;
use crate::player::Player;
use crate::rng::RandomSource;
use crate::snapshot::GameSnapshot;
use crate::template::TemplateSet;
use crate::types::{Coord, Direction};

/// Where a session stands after the latest move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    /// The vault was opened
    Won,
    /// Strength ran out
    Lost,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    player: Player,
    position: Coord,
    moves: u32,
}

impl GameState {
    /// Start a session on `board` with the given starting strength
    pub fn new(board: Board, strength: u32) -> Self {
        let position = board.start();
        Self {
            board,
            player: Player::new(strength),
            position,
            moves: 0,
        }
    }

    /// Choose a template, scatter markers and start a session
    pub fn from_templates<R: RandomSource>(
        templates: &TemplateSet,
        rng: &mut R,
        strength: u32,
    ) -> Result<Self, BoardError> {
        let template = templates.choose(rng);
        let board = Board::generate(template, rng)?;
        Ok(Self::new(board, strength))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    /// Number of accepted (non-rejected) moves so far
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Win takes precedence: opening the vault with the last strength point
    /// still counts.
    pub fn status(&self) -> GameStatus {
        if self.player.has_won() {
            GameStatus::Won
        } else if !self.player.is_alive() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Move the player one step and resolve whatever is found there
    pub fn step<R, W>(
        &mut self,
        direction: Direction,
        rng: &mut R,
        wagers: &mut W,
    ) -> Result<MoveOutcome, W::Error>
    where
        R: RandomSource,
        W: WagerSource,
    {
        let outcome =
            self.board
                .move_player(self.position, direction, &mut self.player, rng, wagers)?;
        self.position = outcome.position_from(self.position);
        if !outcome.is_rejected() {
            self.moves += 1;
        }

        match self.status() {
            GameStatus::Won => info!(moves = self.moves, "vault opened"),
            GameStatus::Lost => info!(moves = self.moves, keys = self.player.keys(), "out of strength"),
            GameStatus::InProgress => {}
        }

        Ok(outcome)
    }

    /// Copy out everything the presentation layer needs
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            glyphs: self.board.glyphs(),
            position: self.position,
            strength: self.player.strength(),
            keys: self.player.keys(),
            moves: self.moves,
            status: self.status(),
        }
    }
}
