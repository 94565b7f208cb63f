//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Bounds for the rotation-speed setting, degrees per second.
pub const MIN_ROTATION_SPEED: f32 = 100.0;
pub const MAX_ROTATION_SPEED: f32 = 1500.0;

/// Tunables for the cube simulation. Fields are plain data and externally
/// settable; the only validation anywhere is the rotation-speed clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Distance between adjacent cubie centers.
    pub spacing: f32,
    /// Angular speed of a turn, degrees per second.
    pub rotation_speed: f32,
    /// Number of random moves in the startup scramble.
    pub shuffle_moves: u32,
    /// Hold before the scramble's first move, seconds.
    pub shuffle_delay: f32,
    /// Pause between scramble moves after the engine goes idle, seconds.
    pub settle_delay: f32,
    /// Minimum pointer travel for a drag to count as a swipe, pixels.
    pub drag_threshold: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            spacing: 1.05,
            rotation_speed: 500.0,
            shuffle_moves: 20,
            shuffle_delay: 1.0,
            settle_delay: 0.1,
            drag_threshold: 20.0,
        }
    }
}

impl SimConfig {
    /// Set the rotation speed, clamped to the allowed range.
    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.rotation_speed = speed.clamp(MIN_ROTATION_SPEED, MAX_ROTATION_SPEED);
    }

    /// Rotation speed with the clamp applied. The field is public (and may
    /// come from a settings file), so readers go through this.
    pub fn clamped_rotation_speed(&self) -> f32 {
        self.rotation_speed.clamp(MIN_ROTATION_SPEED, MAX_ROTATION_SPEED)
    }
}
