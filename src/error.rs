//! Setup-time errors
//!
//! Everything here is raised while a match is being configured. Once setup
//! succeeds the simulation has no failure modes.

use thiserror::Error;

use crate::input::ButtonKind;
use crate::sim::FighterId;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// No key in the keymap drives a button of this kind
    #[error("button [{0:?}] not found")]
    ButtonNotFound(ButtonKind),

    #[error("fighter {0} already exists in the arena")]
    DuplicateFighter(FighterId),

    #[error("fighter {0} is not in the arena")]
    UnknownFighter(FighterId),

    #[error("tuning value `{field}` is invalid: {value}")]
    InvalidTuning { field: &'static str, value: f32 },

    #[error("malformed tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
}
