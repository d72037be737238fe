//! Fighter state machine
//!
//! A fighter spins in place, drives forward while its move intent is held,
//! lunges on a push and slides when struck by a pushing opponent.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Point, Triangle, rotate_point_around_pivot};
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{facing, wrap_angle};

/// Stable fighter identifier (arena map key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FighterId(pub u32);

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a fighter is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FighterState {
    /// Rotating, and moving forward while the move intent is held
    #[default]
    Default,
    /// Running the push choreography
    Attacking,
    /// Sliding after being struck
    KnockedBack,
    /// Reserved for mutual bumps; never entered yet
    Bumped,
}

impl FighterState {
    /// States that cannot be interrupted by a push or a strike
    pub fn is_staggered(self) -> bool {
        matches!(self, FighterState::KnockedBack | FighterState::Bumped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotationDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    pub fn flipped(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }

    /// Sign applied to the rotation speed (clockwise on screen is positive)
    pub fn sign(self) -> f32 {
        match self {
            RotationDirection::Clockwise => 1.0,
            RotationDirection::CounterClockwise => -1.0,
        }
    }
}

/// What a collision partner looked like when the collision was resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub state: FighterState,
    pub rotation: f32,
}

/// One combatant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub id: FighterId,
    /// Top-left of the unrotated bounding box
    position: Point,
    /// Radians in [0, 2π), 0 = facing up
    rotation: f32,
    scale: f32,
    state: FighterState,
    rotation_direction: RotationDirection,

    pub movement_speed: f32,
    pub rotation_speed: f32,
    pub knockback_multiplier: f32,
    pub knockback_deceleration: f32,

    /// Unscaled bounding box size
    size: Vec2,
    hitbox_margin: f32,

    /// Latest move intent from the controller
    is_moving_intent: bool,

    /// Time spent in the current attack (0 outside `Attacking`)
    attack_elapsed: f32,

    /// Direction of the current slide (0 outside `KnockedBack`)
    knockback_rotation: f32,
    /// Remaining slide speed (0 outside `KnockedBack`)
    knockback_velocity: f32,
}

impl Fighter {
    pub fn new(id: FighterId, position: Point, tuning: &Tuning) -> Self {
        Self {
            id,
            position,
            rotation: 0.0,
            scale: 1.0,
            state: FighterState::Default,
            rotation_direction: RotationDirection::Clockwise,
            movement_speed: tuning.movement_speed,
            rotation_speed: tuning.rotation_speed,
            knockback_multiplier: tuning.knockback_multiplier,
            knockback_deceleration: tuning.knockback_deceleration,
            size: Vec2::new(tuning.body_width, tuning.body_height),
            hitbox_margin: tuning.hitbox_margin,
            is_moving_intent: false,
            attack_elapsed: 0.0,
            knockback_rotation: 0.0,
            knockback_velocity: 0.0,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn state(&self) -> FighterState {
        self.state
    }

    pub fn rotation_direction(&self) -> RotationDirection {
        self.rotation_direction
    }

    pub fn is_moving_intent(&self) -> bool {
        self.is_moving_intent
    }

    pub fn attack_elapsed(&self) -> f32 {
        self.attack_elapsed
    }

    pub fn knockback_rotation(&self) -> f32 {
        self.knockback_rotation
    }

    pub fn knockback_velocity(&self) -> f32 {
        self.knockback_velocity
    }

    /// Teleport the fighter (setup only)
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Face a new direction (setup only)
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = wrap_angle(rotation);
    }

    /// Record the latest move intent; read on the next update
    pub fn set_moving(&mut self, moving: bool) {
        self.is_moving_intent = moving;
    }

    /// Current scaled bounding box size
    pub fn box_size(&self) -> Vec2 {
        self.size * self.scale
    }

    /// Center of the current bounding box (the rotation pivot)
    pub fn center(&self) -> Point {
        self.position + self.box_size() / 2.0
    }

    /// Snapshot of this fighter as a collision partner
    pub fn contact(&self) -> Contact {
        Contact {
            state: self.state,
            rotation: self.rotation,
        }
    }

    /// World-space hitbox for the current frame
    ///
    /// Tip centered on the top edge, base corners inset from the bottom
    /// corners, all rotated about the box center.
    pub fn hitbox(&self) -> Triangle {
        let size = self.box_size();
        let pivot = self.center();
        let Vec2 { x, y } = self.position;

        let tip = Vec2::new(x + size.x / 2.0, y);
        let base_left = Vec2::new(x + self.hitbox_margin, y + size.y);
        let base_right = Vec2::new(x + size.x - self.hitbox_margin, y + size.y);

        Triangle::new(
            rotate_point_around_pivot(tip, pivot, self.rotation),
            rotate_point_around_pivot(base_left, pivot, self.rotation),
            rotate_point_around_pivot(base_right, pivot, self.rotation),
        )
    }

    /// Start a push unless staggered; a push already running is left alone
    pub fn try_to_push(&mut self) {
        match self.state {
            FighterState::KnockedBack | FighterState::Bumped | FighterState::Attacking => {}
            FighterState::Default => self.enter(FighterState::Attacking),
        }
    }

    /// React to overlapping `other` this frame
    pub fn handle_collision(&mut self, other: Contact) {
        if self.state == other.state {
            // Mutual bump is reserved: both fighters keep their state
            log::debug!("Fighter {} bumped while {:?}", self.id, self.state);
        } else if other.state == FighterState::Attacking && !self.state.is_staggered() {
            self.start_knockback(other.rotation);
        }
    }

    /// Advance one frame
    ///
    /// `dt` is in time-units; non-positive steps leave the fighter untouched.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        match self.state {
            FighterState::Default => {
                self.rotate(dt);
                if self.is_moving_intent {
                    self.advance(self.rotation, self.movement_speed * dt);
                }
            }
            FighterState::Attacking => self.attack(dt),
            FighterState::KnockedBack => self.knockback(dt),
            FighterState::Bumped => {}
        }
    }

    fn rotate(&mut self, dt: f32) {
        let delta = self.rotation_direction.sign() * self.rotation_speed * dt;
        self.rotation = wrap_angle(self.rotation + delta);
    }

    fn advance(&mut self, rotation: f32, distance: f32) {
        self.position += facing(rotation) * distance;
    }

    fn start_knockback(&mut self, rotation_from_attacker: f32) {
        self.enter(FighterState::KnockedBack);
        self.knockback_rotation = rotation_from_attacker;
        self.knockback_velocity = self.movement_speed * self.knockback_multiplier;
        log::debug!(
            "Fighter {} knocked back at {:.3} rad, velocity {:.2}",
            self.id,
            self.knockback_rotation,
            self.knockback_velocity
        );
    }

    fn knockback(&mut self, dt: f32) {
        self.knockback_velocity -= self.knockback_deceleration * dt;
        if self.knockback_velocity > 0.0 {
            self.advance(self.knockback_rotation, self.knockback_velocity * dt);
        } else {
            self.enter(FighterState::Default);
            log::debug!("Fighter {} recovered from knockback", self.id);
        }
    }

    /// Push choreography: lunge, dwell, retract, then a still window before recovery
    fn attack(&mut self, dt: f32) {
        self.attack_elapsed += dt;
        let elapsed = self.attack_elapsed;

        if elapsed <= LUNGE_END {
            self.scale = 1.0 + elapsed / LUNGE_END * (ATTACK_PEAK_SCALE - 1.0);
            self.advance(self.rotation, self.movement_speed * LUNGE_SPEED_FACTOR * dt);
        } else if elapsed <= DWELL_END {
            self.scale = ATTACK_PEAK_SCALE;
        } else if elapsed <= RETRACT_END {
            self.scale = 1.0 + (RETRACT_END - elapsed) / (RETRACT_END - DWELL_END);
            self.advance(self.rotation, -self.movement_speed * dt);
        } else if elapsed > ATTACK_END {
            self.enter(FighterState::Default);
            self.rotation_direction = self.rotation_direction.flipped();
            log::debug!("Fighter {} finished its push", self.id);
        }
        // 15 < elapsed <= 20: hold still at the retract's final scale
    }

    /// Switch state, resetting whatever belongs to the state being left or entered
    fn enter(&mut self, next: FighterState) {
        if self.state == FighterState::Attacking || next == FighterState::Attacking {
            self.attack_elapsed = 0.0;
        }
        if self.state == FighterState::Attacking {
            self.scale = 1.0;
        }
        if self.state == FighterState::KnockedBack {
            self.knockback_rotation = 0.0;
            self.knockback_velocity = 0.0;
        }
        if next == FighterState::Attacking {
            log::debug!("Fighter {} started a push", self.id);
        }
        self.state = next;
    }
}
