//! Space module - the five kinds of board cell and what happens on arrival
//!
//! A space is one grid cell. Its [`SpaceKind`] decides what happens when the
//! player arrives via [`Space::resolve_entry`]:
//!
//! | Kind | Travel cost | Effect |
//! |------|-------------|--------|
//! | Mountain | none | never entered; movement rejects it first |
//! | Blank | 1 | the player rests |
//! | Enemy | 1 | a one-shot bandit fight |
//! | Teleport | 1 | the player is carried to the paired teleporter |
//! | Finish | 1 | the vault opens with four keys |
//!
//! The occupied marker is drawn on whichever space the player stands on. When
//! the player leaves, [`Space::vacate`] restores the resting glyph.

use tracing::debug;

use crate::combat::{fight, CombatReport, WagerSource};
use crate::player::Player;
use crate::rng::RandomSource;
use crate::types::{glyph, Coord, TRAVEL_COST};

/// Behavior variant of a space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceKind {
    Blank,
    Mountain,
    /// Hidden bandit; `resolved` flips once the fight has happened
    Enemy { resolved: bool },
    /// Teleporter linked to the space at `partner`
    Teleport { partner: Coord },
    Finish,
}

/// What the player found on arrival
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encounter {
    /// Nothing here; the player rests
    Rested,
    /// A bandit was found and fought
    Combat(CombatReport),
    /// A bandit lurks here but the player is too weak to be worth robbing
    Exhausted,
    /// The player stepped through a teleporter
    Portal,
    /// Reached the vault without enough keys
    VaultLocked { keys: u32 },
    /// Reached the vault with every key
    VaultOpened,
    /// Mountains cannot be entered
    Impassable,
}

/// Result of resolving an arrival on a space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    /// Player strength right after the travel cost was charged
    pub strength_after_travel: u32,
    pub encounter: Encounter,
}

/// One cell of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    kind: SpaceKind,
    glyph: char,
    resting: char,
}

impl Space {
    fn with_glyphs(kind: SpaceKind, glyph: char, resting: char) -> Self {
        Self {
            kind,
            glyph,
            resting,
        }
    }

    pub fn blank() -> Self {
        Self::with_glyphs(SpaceKind::Blank, glyph::BLANK, glyph::BLANK)
    }

    /// The blank space the player starts on, drawn as occupied
    pub fn start() -> Self {
        Self::with_glyphs(SpaceKind::Blank, glyph::OCCUPIED, glyph::BLANK)
    }

    pub fn mountain() -> Self {
        Self::with_glyphs(SpaceKind::Mountain, glyph::MOUNTAIN, glyph::MOUNTAIN)
    }

    /// Bandits hide among the settlements, so they look blank
    pub fn enemy() -> Self {
        Self::with_glyphs(SpaceKind::Enemy { resolved: false }, glyph::BLANK, glyph::BLANK)
    }

    pub fn teleport(partner: Coord) -> Self {
        Self::with_glyphs(SpaceKind::Teleport { partner }, glyph::TELEPORT, glyph::TELEPORT)
    }

    pub fn finish() -> Self {
        Self::with_glyphs(SpaceKind::Finish, glyph::FINISH, glyph::FINISH)
    }

    pub fn kind(&self) -> SpaceKind {
        self.kind
    }

    /// Glyph currently drawn for this space
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Glyph drawn when the player is not standing here
    pub fn resting_glyph(&self) -> char {
        self.resting
    }

    pub fn is_mountain(&self) -> bool {
        matches!(self.kind, SpaceKind::Mountain)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_mountain() && self.glyph == glyph::OCCUPIED
    }

    /// The paired teleporter, if this space is a teleporter
    pub fn partner(&self) -> Option<Coord> {
        match self.kind {
            SpaceKind::Teleport { partner } => Some(partner),
            _ => None,
        }
    }

    pub(crate) fn link_partner(&mut self, coord: Coord) {
        if let SpaceKind::Teleport { partner } = &mut self.kind {
            *partner = coord;
        }
    }

    /// The player left: restore the resting glyph
    pub fn vacate(&mut self) {
        self.glyph = self.resting;
    }

    /// Resolve the player's arrival on this space
    ///
    /// Charges the travel cost (except on mountains), applies the
    /// kind-specific effect and marks the space as occupied.
    pub fn resolve_entry<R, W>(
        &mut self,
        player: &mut Player,
        rng: &mut R,
        wagers: &mut W,
    ) -> Result<Visit, W::Error>
    where
        R: RandomSource,
        W: WagerSource,
    {
        if self.is_mountain() {
            return Ok(Visit {
                strength_after_travel: player.strength(),
                encounter: Encounter::Impassable,
            });
        }

        player.reduce_strength(TRAVEL_COST);
        let strength_after_travel = player.strength();
        self.glyph = glyph::OCCUPIED;

        let encounter = match &mut self.kind {
            SpaceKind::Mountain => Encounter::Impassable,
            SpaceKind::Blank => Encounter::Rested,
            SpaceKind::Enemy { resolved } => {
                if !player.is_alive() {
                    Encounter::Exhausted
                } else if *resolved || player.has_all_keys() {
                    Encounter::Rested
                } else {
                    let report = fight(player, rng, wagers)?;
                    *resolved = true;
                    Encounter::Combat(report)
                }
            }
            SpaceKind::Teleport { .. } => Encounter::Portal,
            SpaceKind::Finish => {
                if player.has_all_keys() {
                    player.declare_victory();
                    Encounter::VaultOpened
                } else {
                    Encounter::VaultLocked {
                        keys: player.keys(),
                    }
                }
            }
        };

        debug!(?encounter, strength = player.strength(), "space entered");

        Ok(Visit {
            strength_after_travel,
            encounter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;

    fn never_wager(_: u32) -> u32 {
        panic!("no fight expected")
    }

    #[test]
    fn blank_charges_travel_and_marks_occupied() {
        let mut space = Space::blank();
        let mut player = Player::new(10);
        let mut rng = GameRng::seeded(1);
        let visit = space
            .resolve_entry(&mut player, &mut rng, &mut never_wager)
            .unwrap();

        assert_eq!(visit.encounter, Encounter::Rested);
        assert_eq!(visit.strength_after_travel, 9);
        assert_eq!(space.glyph(), glyph::OCCUPIED);
        assert!(space.is_occupied());

        space.vacate();
        assert_eq!(space.glyph(), glyph::BLANK);
    }

    #[test]
    fn start_space_rests_as_blank() {
        let mut space = Space::start();
        assert_eq!(space.glyph(), glyph::OCCUPIED);
        space.vacate();
        assert_eq!(space.glyph(), glyph::BLANK);
        assert_eq!(space.kind(), SpaceKind::Blank);
    }

    #[test]
    fn mountain_is_a_no_op() {
        let mut space = Space::mountain();
        let mut player = Player::new(10);
        let mut rng = GameRng::seeded(1);
        let visit = space
            .resolve_entry(&mut player, &mut rng, &mut never_wager)
            .unwrap();

        assert_eq!(visit.encounter, Encounter::Impassable);
        assert_eq!(player.strength(), 10);
        assert_eq!(space.glyph(), glyph::MOUNTAIN);
    }

    #[test]
    fn enemy_fights_only_once() {
        let mut space = Space::enemy();
        let mut player = Player::new(30);
        let mut rng = GameRng::seeded(3);

        let first = space
            .resolve_entry(&mut player, &mut rng, &mut |max: u32| max)
            .unwrap();
        assert!(matches!(first.encounter, Encounter::Combat(_)));
        assert_eq!(space.kind(), SpaceKind::Enemy { resolved: true });

        let second = space
            .resolve_entry(&mut player, &mut rng, &mut never_wager)
            .unwrap();
        assert_eq!(second.encounter, Encounter::Rested);
    }

    #[test]
    fn enemy_ignores_player_with_all_keys() {
        let mut space = Space::enemy();
        let mut player = Player::new(30);
        for _ in 0..4 {
            player.grant_key();
        }
        let mut rng = GameRng::seeded(3);
        let visit = space
            .resolve_entry(&mut player, &mut rng, &mut never_wager)
            .unwrap();

        assert_eq!(visit.encounter, Encounter::Rested);
        assert_eq!(space.kind(), SpaceKind::Enemy { resolved: false });
    }

    #[test]
    fn enemy_declines_exhausted_player() {
        let mut space = Space::enemy();
        let mut player = Player::new(1);
        let mut rng = GameRng::seeded(3);
        let visit = space
            .resolve_entry(&mut player, &mut rng, &mut never_wager)
            .unwrap();

        assert_eq!(visit.encounter, Encounter::Exhausted);
        assert_eq!(visit.strength_after_travel, 0);
        assert_eq!(space.kind(), SpaceKind::Enemy { resolved: false });
    }

    #[test]
    fn finish_needs_four_keys() {
        let mut space = Space::finish();
        let mut player = Player::new(10);
        let mut rng = GameRng::seeded(1);

        let visit = space
            .resolve_entry(&mut player, &mut rng, &mut never_wager)
            .unwrap();
        assert_eq!(visit.encounter, Encounter::VaultLocked { keys: 0 });
        assert!(!player.has_won());

        for _ in 0..4 {
            player.grant_key();
        }
        let visit = space
            .resolve_entry(&mut player, &mut rng, &mut never_wager)
            .unwrap();
        assert_eq!(visit.encounter, Encounter::VaultOpened);
        assert!(player.has_won());
    }

    #[test]
    fn teleport_reports_portal_and_knows_partner() {
        let mut space = Space::teleport(Coord::new(0, 0));
        space.link_partner(Coord::new(4, 5));
        assert_eq!(space.partner(), Some(Coord::new(4, 5)));

        let mut player = Player::new(10);
        let mut rng = GameRng::seeded(1);
        let visit = space
            .resolve_entry(&mut player, &mut rng, &mut never_wager)
            .unwrap();
        assert_eq!(visit.encounter, Encounter::Portal);
        assert_eq!(player.strength(), 9);
    }
}
