//! Frame-stepped simulation tick
//!
//! Collisions are resolved on last frame's positions before anything moves.

use serde::{Deserialize, Serialize};

use super::fighter::FighterId;
use super::state::MatchState;

/// A single intent for one fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Current state of the move button (level-triggered)
    Move { fighter: FighterId, held: bool },
    /// Push button was freshly pressed (edge-triggered)
    Push { fighter: FighterId },
}

impl Command {
    pub fn fighter(&self) -> FighterId {
        match *self {
            Command::Move { fighter, .. } | Command::Push { fighter } => fighter,
        }
    }
}

/// Input commands for a single tick, applied in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

/// Advance the match by one frame of `dt` time-units
pub fn tick(state: &mut MatchState, input: &TickInput, dt: f32) {
    // Collisions first, on positions from the end of the previous frame
    state.last_collisions = state.arena.resolve_collisions();

    state.timer.update(dt);

    for command in &input.commands {
        apply_command(state, *command);
    }

    state.arena.update_fighters(dt);
    state.frame += 1;
}

fn apply_command(state: &mut MatchState, command: Command) {
    let Some(fighter) = state.arena.get_mut(command.fighter()) else {
        log::warn!("Dropping {:?}: no such fighter", command);
        return;
    };

    match command {
        Command::Move { held, .. } => fighter.set_moving(held),
        Command::Push { .. } => fighter.try_to_push(),
    }
}
