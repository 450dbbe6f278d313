//! Per-tick win/loss evaluation.

use crate::collision::{Actor, Volume, boxes_overlap};

/// Why a level was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LossCause {
    /// Actor center dropped below the death altitude.
    Fell,
    /// Actor touched the hazard at this index.
    Hazard(usize),
}

/// Level state machine: `Running` until the first terminal evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LevelState {
    #[default]
    Running,
    GameOver(LossCause),
    Win,
}

impl LevelState {
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, LevelState::Running)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.is_running()
    }
}

/// Evaluate the actor's post-movement state.
///
/// Pure. Priority is fall, then hazard (first overlapping in order), then goal;
/// at most one terminal state comes out of a tick. Overlap is inclusive, so
/// touching faces count.
pub fn evaluate(actor: &Actor, hazards: &[Volume], goal: &Volume, death_altitude: f32) -> LevelState {
    if actor.position().y < death_altitude {
        return LevelState::GameOver(LossCause::Fell);
    }

    let faces = actor.body.faces();
    if let Some(idx) = hazards
        .iter()
        .position(|hazard| boxes_overlap(faces, hazard.faces()))
    {
        return LevelState::GameOver(LossCause::Hazard(idx));
    }

    if boxes_overlap(faces, goal.faces()) {
        return LevelState::Win;
    }

    LevelState::Running
}
