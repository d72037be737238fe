//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Collision detection and fighter updates are separate phases
//! - Stable iteration order (arena insertion order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod fighter;
pub mod geometry;
pub mod state;
pub mod tick;

pub use arena::{Arena, FighterSnapshot};
pub use fighter::{Contact, Fighter, FighterId, FighterState, RotationDirection};
pub use geometry::{Point, Triangle, rotate_point_around_pivot, triangles_intersect};
pub use state::{MatchState, OPPONENT_ID, PLAYER_ID};
pub use tick::{Command, TickInput, tick};
