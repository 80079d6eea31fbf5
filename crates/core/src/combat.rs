//! Combat module - one-shot bandit fights
//!
//! A bandit rolls a maximum power in [6, 10] and an actual attack in
//! [1, max power]. The player wagers strength points as their attack; the
//! wager is paid up front. Meeting or beating the bandit's attack wins a key
//! and refunds half the wager (rounded down).

use std::convert::Infallible;

use tracing::info;

use crate::player::Player;
use crate::rng::RandomSource;
use crate::types::{ENEMY_MAX_POWER, ENEMY_MIN_POWER};

/// Supplies the player's wager when a fight starts
///
/// `max_power` is the bandit's maximum attack; a valid wager lies in
/// `[1, max_power]`. Out-of-range answers are clamped into that range.
pub trait WagerSource {
    type Error;

    fn wager(&mut self, max_power: u32) -> Result<u32, Self::Error>;
}

impl<F> WagerSource for F
where
    F: FnMut(u32) -> u32,
{
    type Error = Infallible;

    fn wager(&mut self, max_power: u32) -> Result<u32, Self::Error> {
        Ok(self(max_power))
    }
}

/// Everything that happened in one fight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatReport {
    /// The bandit's maximum attack
    pub max_power: u32,
    /// The bandit's actual attack
    pub attack: u32,
    /// Strength points the player committed
    pub wager: u32,
    pub won: bool,
    /// Strength points given back after a win
    pub refund: u32,
}

/// Run a single fight against a bandit
pub fn fight<R, W>(player: &mut Player, rng: &mut R, wagers: &mut W) -> Result<CombatReport, W::Error>
where
    R: RandomSource,
    W: WagerSource,
{
    let max_power = rng.roll(ENEMY_MIN_POWER, ENEMY_MAX_POWER);
    let attack = rng.roll(1, max_power);

    let wager = wagers.wager(max_power)?.clamp(1, max_power);
    player.reduce_strength(wager as i32);

    let won = wager >= attack;
    let refund = if won {
        player.grant_key();
        let refund = wager / 2;
        player.reduce_strength(-(refund as i32));
        refund
    } else {
        0
    };

    info!(max_power, attack, wager, won, refund, "bandit fight resolved");

    Ok(CombatReport {
        max_power,
        attack,
        wager,
        won,
        refund,
    })
}
