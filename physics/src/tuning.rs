//! Gameplay tuning for the actor and the resolver.
//!
//! Kept separate from level layout. Defaults reproduce the shipped game;
//! a host can load overrides from TOML.

use std::time::Duration;

use serde::Deserialize;

use crate::{
    collision::settings::{GRAVITY_PER_TICK, GROUND_SNAP_THRESHOLD},
    constants::{DEATH_ALTITUDE, JUMP_VELOCITY, MOVE_SPEED, SLIPPERY_DECAY, TICK_RATE_HZ},
    error::LevelError,
};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsTuning {
    /// Added to `velocity.y` on each tick without ground support (negative = down).
    pub gravity: f32,

    /// How far the actor may sink below a top face and still be snapped onto it.
    pub ground_snap_threshold: f32,

    /// Horizontal speed set by a held direction (world units per tick).
    pub move_speed: f32,

    /// Upward velocity set by a jump (world units per tick).
    pub jump_velocity: f32,

    /// X/Z velocity multiplier applied each tick on slippery levels.
    pub slippery_decay: f32,

    /// Center altitude below which the level is lost.
    pub death_altitude: f32,

    /// Fixed ticks per simulated second.
    pub tick_rate_hz: u32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY_PER_TICK,
            ground_snap_threshold: GROUND_SNAP_THRESHOLD,
            move_speed: MOVE_SPEED,
            jump_velocity: JUMP_VELOCITY,
            slippery_decay: SLIPPERY_DECAY,
            death_altitude: DEATH_ALTITUDE,
            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl PhysicsTuning {
    /// Parse overrides from TOML. Missing fields keep their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self, LevelError> {
        let tuning: Self = toml::from_str(src)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        let finite = [
            ("gravity", self.gravity),
            ("move_speed", self.move_speed),
            ("jump_velocity", self.jump_velocity),
            ("death_altitude", self.death_altitude),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(LevelError::InvalidTuning {
                    field,
                    expected: "finite",
                    value: value as f64,
                });
            }
        }

        if !(self.ground_snap_threshold.is_finite() && self.ground_snap_threshold >= 0.0) {
            return Err(LevelError::InvalidTuning {
                field: "ground_snap_threshold",
                expected: "finite and non-negative",
                value: self.ground_snap_threshold as f64,
            });
        }

        if !(0.0..=1.0).contains(&self.slippery_decay) {
            return Err(LevelError::InvalidTuning {
                field: "slippery_decay",
                expected: "within 0..=1",
                value: self.slippery_decay as f64,
            });
        }

        if self.tick_rate_hz == 0 {
            return Err(LevelError::InvalidTuning {
                field: "tick_rate_hz",
                expected: "at least 1",
                value: 0.0,
            });
        }

        Ok(())
    }

    /// Length of one fixed tick.
    pub fn timestep(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }
}
