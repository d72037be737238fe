//! Fighter balance values
//!
//! Keep this separate from fixed constants in `consts`. Values are in
//! time-units (one frame at the 60 Hz reference rate) and pixels.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gameplay tuning shared by every fighter in a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Unscaled bounding box width in pixels
    pub body_width: f32,
    /// Unscaled bounding box height in pixels
    pub body_height: f32,
    /// Inset of the hitbox base corners from the box's bottom corners
    pub hitbox_margin: f32,

    /// Forward speed in pixels per time-unit
    pub movement_speed: f32,
    /// Rotation speed in radians per time-unit
    pub rotation_speed: f32,

    /// Knockback launch velocity as a multiple of the struck fighter's movement speed
    pub knockback_multiplier: f32,
    /// Knockback velocity lost per time-unit
    pub knockback_deceleration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            body_width: 48.0,
            body_height: 64.0,
            hitbox_margin: 5.0,

            movement_speed: 5.0,
            rotation_speed: 0.05,

            knockback_multiplier: 1.7,
            knockback_deceleration: 0.3,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("body_width", self.body_width),
            ("body_height", self.body_height),
            ("knockback_deceleration", self.knockback_deceleration),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidTuning { field, value });
            }
        }

        let non_negative = [
            ("hitbox_margin", self.hitbox_margin),
            ("movement_speed", self.movement_speed),
            ("rotation_speed", self.rotation_speed),
            ("knockback_multiplier", self.knockback_multiplier),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTuning { field, value });
            }
        }

        // Base corners must not cross over
        if self.hitbox_margin * 2.0 >= self.body_width {
            return Err(ConfigError::InvalidTuning {
                field: "hitbox_margin",
                value: self.hitbox_margin,
            });
        }

        Ok(())
    }
}
