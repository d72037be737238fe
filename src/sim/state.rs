//! Match state
//!
//! Everything the tick mutates lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::fighter::{Fighter, FighterId};
use crate::consts::*;
use crate::error::ConfigError;
use crate::timer::GameTimer;
use crate::tuning::Tuning;

/// The keyboard-controlled fighter in a duel
pub const PLAYER_ID: FighterId = FighterId(1);
/// The second fighter in a duel
pub const OPPONENT_ID: FighterId = FighterId(2);

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub arena: Arena,
    pub timer: GameTimer,
    /// Simulation tick counter
    pub frame: u64,
    /// Colliding pairs found on the latest tick
    pub last_collisions: usize,
}

impl MatchState {
    /// Empty arena, for custom setups
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            timer: GameTimer::new(),
            frame: 0,
            last_collisions: 0,
        }
    }

    /// Standard two-fighter match at the default spawn points
    pub fn duel(tuning: &Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;

        let mut state = Self::new();
        let spawns = [(PLAYER_ID, PLAYER_SPAWN), (OPPONENT_ID, OPPONENT_SPAWN)];
        for (id, (x, y)) in spawns {
            state
                .arena
                .insert(Fighter::new(id, Vec2::new(x, y), tuning))?;
        }

        log::info!("Duel ready with {} fighters", state.arena.len());
        Ok(state)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
