//! Push Arena - a two-fighter push-and-knockback arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, fighters, arena tick)
//! - `input`: Keyboard-to-intent controller, polled once per frame
//! - `timer`: Match timer / HUD text
//! - `tuning`: Data-driven fighter balance
//! - `error`: Configuration errors

pub mod error;
pub mod input;
pub mod sim;
pub mod timer;
pub mod tuning;

pub use error::ConfigError;
pub use input::{ButtonKind, Controller, Keymap};
pub use timer::GameTimer;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Milliseconds in one time-unit (one frame at the 60 Hz reference rate)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Spawn points (top-left of each fighter's bounding box)
    pub const PLAYER_SPAWN: (f32, f32) = (100.0, 200.0);
    pub const OPPONENT_SPAWN: (f32, f32) = (600.0, 500.0);

    /// Attack choreography thresholds (time-units since the push started)
    pub const LUNGE_END: f32 = 2.0;
    pub const DWELL_END: f32 = 8.0;
    pub const RETRACT_END: f32 = 15.0;
    pub const ATTACK_END: f32 = 20.0;

    /// Peak scale reached at the end of the lunge
    pub const ATTACK_PEAK_SCALE: f32 = 2.0;
    /// Lunge speed relative to normal movement speed
    pub const LUNGE_SPEED_FACTOR: f32 = 3.0;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Unit facing vector for a rotation (0 rad = up / -Y, positive turns the nose right)
#[inline]
pub fn facing(rotation: f32) -> Vec2 {
    Vec2::new(rotation.sin(), -rotation.cos())
}
