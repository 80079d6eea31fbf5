//! Player module - the adventurer's vital statistics
//!
//! Strength is the depletable resource: every move costs some, bandit fights
//! cost more, and an adventurer with no strength left ends the journey.

use crate::types::KEYS_TO_WIN;

/// Mutable adventure state for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    strength: u32,
    keys: u32,
    victorious: bool,
}

impl Player {
    /// Create a player with the given starting strength
    ///
    /// The higher the strength, the easier the game.
    pub fn new(strength: u32) -> Self {
        Self {
            strength,
            keys: 0,
            victorious: false,
        }
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn keys(&self) -> u32 {
        self.keys
    }

    /// Reduce strength by `amount`, never going below zero
    ///
    /// A negative amount restores strength.
    pub fn reduce_strength(&mut self, amount: i32) {
        let next = self.strength as i64 - amount as i64;
        self.strength = next.clamp(0, u32::MAX as i64) as u32;
    }

    pub fn grant_key(&mut self) {
        self.keys += 1;
    }

    /// Whether the player holds every key the vault needs
    pub fn has_all_keys(&self) -> bool {
        self.keys >= KEYS_TO_WIN
    }

    pub fn is_alive(&self) -> bool {
        self.strength > 0
    }

    pub fn has_won(&self) -> bool {
        self.victorious
    }

    pub fn declare_victory(&mut self) {
        self.victorious = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_is_alive_without_keys() {
        let player = Player::new(30);
        assert_eq!(player.strength(), 30);
        assert_eq!(player.keys(), 0);
        assert!(player.is_alive());
        assert!(!player.has_won());
    }

    #[test]
    fn strength_clamps_at_zero() {
        let mut player = Player::new(3);
        player.reduce_strength(5);
        assert_eq!(player.strength(), 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn negative_reduction_restores_strength() {
        let mut player = Player::new(10);
        player.reduce_strength(-4);
        assert_eq!(player.strength(), 14);
    }

    #[test]
    fn victory_is_sticky() {
        let mut player = Player::new(1);
        player.declare_victory();
        player.declare_victory();
        assert!(player.has_won());
    }

    #[test]
    fn four_keys_open_the_vault() {
        let mut player = Player::new(1);
        for _ in 0..3 {
            player.grant_key();
        }
        assert!(!player.has_all_keys());
        player.grant_key();
        assert!(player.has_all_keys());
    }
}
