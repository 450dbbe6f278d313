//! Level layout: static platforms, hazards, the goal and the spawn point.
//!
//! Layout is immutable once a session is built. The two shipped levels live in
//! [`builtin`]; hosts can also load a layout from TOML.

pub mod builtin;

use serde::Deserialize;

use crate::{
    collision::{Vec3, Volume},
    constants::{ACTOR_SIZE, SPAWN_POSITION},
    error::LevelError,
    movement::Traction,
};

/// Selector for a shipped level. Fixes both layout and traction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LevelId {
    Ice = 1,
    Lava = 2,
}

impl TryFrom<u8> for LevelId {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LevelId::Ice),
            2 => Ok(LevelId::Lava),
            other => Err(LevelError::UnknownLevel(other)),
        }
    }
}

impl LevelId {
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn traction(self) -> Traction {
        match self {
            LevelId::Ice => Traction::Slippery,
            LevelId::Lava => Traction::Grippy,
        }
    }

    pub fn def(self) -> LevelDef {
        match self {
            LevelId::Ice => builtin::ice(),
            LevelId::Lava => builtin::lava(),
        }
    }
}

/// One box as authored: center position and full dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxDef {
    pub position: [f32; 3],
    /// Width (X), height (Y), depth (Z).
    pub size: [f32; 3],
}

impl BoxDef {
    pub fn volume(&self) -> Volume {
        Volume::from_size(Vec3::from(self.position), Vec3::from(self.size))
    }

    fn validate(&self, what: impl FnOnce() -> String) -> Result<(), LevelError> {
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(LevelError::NonFinitePosition {
                what: what(),
                position: self.position,
            });
        }
        if !self.size.iter().all(|d| d.is_finite() && *d > 0.0) {
            return Err(LevelError::DegenerateBox {
                what: what(),
                size: self.size,
            });
        }
        Ok(())
    }
}

fn default_spawn() -> [f32; 3] {
    SPAWN_POSITION
}

fn default_actor_size() -> [f32; 3] {
    ACTOR_SIZE
}

/// Full description of a level.
///
/// Platforms are solid and block the actor. Hazards and the goal are triggers
/// only: they never block movement.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelDef {
    pub name: String,
    pub traction: Traction,
    #[serde(default = "default_spawn")]
    pub spawn: [f32; 3],
    #[serde(default = "default_actor_size")]
    pub actor_size: [f32; 3],
    pub platforms: Vec<BoxDef>,
    #[serde(default)]
    pub hazards: Vec<BoxDef>,
    pub goal: BoxDef,
}

impl LevelDef {
    /// Parse and validate a level from TOML.
    ///
    /// ```toml
    /// name = "test"
    /// traction = "grippy"
    /// goal = { position = [0.0, 0.0, -10.0], size = [1.0, 1.0, 1.0] }
    ///
    /// [[platforms]]
    /// position = [0.0, -2.0, 0.0]
    /// size = [4.0, 0.5, 20.0]
    /// ```
    pub fn from_toml_str(src: &str) -> Result<Self, LevelError> {
        let def: Self = toml::from_str(src)?;
        def.validate()?;
        Ok(def)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        if self.platforms.is_empty() {
            return Err(LevelError::NoPlatforms(self.name.clone()));
        }

        if !self.spawn.iter().all(|c| c.is_finite()) {
            return Err(LevelError::NonFinitePosition {
                what: "spawn".to_owned(),
                position: self.spawn,
            });
        }

        BoxDef {
            position: self.spawn,
            size: self.actor_size,
        }
        .validate(|| "actor".to_owned())?;

        for (i, platform) in self.platforms.iter().enumerate() {
            platform.validate(|| format!("platform {i}"))?;
        }
        for (i, hazard) in self.hazards.iter().enumerate() {
            hazard.validate(|| format!("hazard {i}"))?;
        }
        self.goal.validate(|| "goal".to_owned())
    }

    pub fn spawn_position(&self) -> Vec3 {
        Vec3::from(self.spawn)
    }

    /// The actor's box at the spawn point.
    pub fn actor_volume(&self) -> Volume {
        Volume::from_size(self.spawn_position(), Vec3::from(self.actor_size))
    }

    pub fn platform_volumes(&self) -> Vec<Volume> {
        self.platforms.iter().map(BoxDef::volume).collect()
    }

    pub fn hazard_volumes(&self) -> Vec<Volume> {
        self.hazards.iter().map(BoxDef::volume).collect()
    }
}
