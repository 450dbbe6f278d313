//! One playthrough of one level.
//!
//! [`LevelSession`] owns everything a level needs at runtime: the actor, the
//! static platforms, hazards and goal, the fixed-step clock and the handle that
//! keeps the host's frame loop honest. Nothing lives in globals; the host keeps
//! the session and drives it once per render frame.
//!
//! Frame flow:
//! 1. Host calls [`LevelSession::advance`] with the armed [`LoopHandle`].
//! 2. The clock banks the frame time and runs zero or more ticks
//!    (controller, resolver, evaluator).
//! 3. On the first terminal tick the session disarms the handle, drops banked
//!    time and notifies the UI exactly once.
//! 4. Only [`LevelSession::respawn`] (after a game over) re-arms a new handle.
//!    A won session is finished; build a new one to replay.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::{
    clock::FixedStep,
    collision::{Actor, StaticSet, StepResult, Vec3, Volume, step_actor},
    constants::{FOLLOW_CAMERA_OFFSET, OVERHEAD_CAMERA_HEIGHT},
    error::{LevelError, SessionError},
    input::InputState,
    level::{LevelDef, LevelId},
    movement::{Traction, update_velocity},
    outcome::{LevelState, evaluate},
    tuning::PhysicsTuning,
};

/// Capability to schedule frames for one generation of the tick loop.
///
/// Frames carrying a handle from an older generation are ignored, so a host that
/// keeps a stale frame callback alive cannot run a second loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoopHandle {
    epoch: u64,
}

impl LoopHandle {
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Single-use permission to respawn after a game over.
///
/// Not `Clone`: handing it to [`LevelSession::respawn`] consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct RespawnToken {
    epoch: u64,
}

/// Receives terminal-state events. Rendering overlays live behind this.
pub trait UiNotifier {
    fn on_game_over(&mut self, respawn: RespawnToken);
    fn on_win(&mut self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CameraMode {
    #[default]
    Follow,
    Overhead,
}

impl CameraMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Follow => CameraMode::Overhead,
            CameraMode::Overhead => CameraMode::Follow,
        }
    }
}

/// What one frame did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Ticks run this frame (0 when the frame was shorter than a step).
    pub ticks: u32,
    pub state: LevelState,
    /// Actor center after the last tick, for the host to mirror.
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// The handle was not the armed one; nothing ran.
    Cancelled,
    Ticked(FrameReport),
}

#[derive(Debug)]
pub struct LevelSession {
    name: String,
    traction: Traction,
    tuning: PhysicsTuning,
    spawn: Vec3,

    actor: Actor,
    statics: StaticSet,
    hazards: Vec<Volume>,
    goal: Volume,

    state: LevelState,
    camera: CameraMode,
    clock: FixedStep,
    epoch: u64,
    armed: Option<LoopHandle>,
    tick: u64,
    last_step: StepResult,
}

impl LevelSession {
    /// Start one of the shipped levels with default tuning.
    pub fn builtin(id: LevelId) -> Self {
        Self::build(id.def(), PhysicsTuning::default())
    }

    /// Start a level from caller-supplied data.
    pub fn new(def: LevelDef, tuning: PhysicsTuning) -> Result<Self, LevelError> {
        def.validate()?;
        tuning.validate()?;
        Ok(Self::build(def, tuning))
    }

    fn build(def: LevelDef, tuning: PhysicsTuning) -> Self {
        let spawn = def.spawn_position();
        let actor = Actor::new(def.actor_volume(), Vec3::zeros(), tuning.gravity);
        let statics = StaticSet::new(def.platform_volumes());
        let hazards = def.hazard_volumes();
        let goal = def.goal.volume();

        debug!(
            level = %def.name,
            traction = ?def.traction,
            platforms = statics.len(),
            hazards = hazards.len(),
            "level session created"
        );

        Self {
            name: def.name,
            traction: def.traction,
            tuning,
            spawn,
            actor,
            statics,
            hazards,
            goal,
            state: LevelState::Running,
            camera: CameraMode::default(),
            clock: FixedStep::new(tuning.timestep()),
            epoch: 0,
            armed: Some(LoopHandle { epoch: 0 }),
            tick: 0,
            last_step: StepResult::default(),
        }
    }

    /// The handle frames must carry, or `None` while the loop is halted.
    #[inline]
    pub fn loop_handle(&self) -> Option<LoopHandle> {
        self.armed
    }

    /// Feed one render frame's elapsed time and run every tick it owes.
    ///
    /// Ticking stops at the first terminal state even if more time is banked.
    pub fn advance<N: UiNotifier + ?Sized>(
        &mut self,
        handle: LoopHandle,
        frame: Duration,
        input: &InputState,
        notifier: &mut N,
    ) -> FrameOutcome {
        if self.armed != Some(handle) {
            trace!(
                handle = handle.epoch,
                current = self.epoch,
                "frame from stale loop handle"
            );
            return FrameOutcome::Cancelled;
        }

        self.clock.accumulate(frame);

        let mut ticks = 0;
        while self.clock.try_consume() {
            ticks += 1;
            if self.step(input, notifier).is_terminal() {
                break;
            }
        }

        FrameOutcome::Ticked(FrameReport {
            ticks,
            state: self.state,
            position: self.actor.position(),
        })
    }

    /// Run exactly one physics tick with `input`, ignoring the clock.
    ///
    /// Does nothing once the session is in a terminal state.
    pub fn step<N: UiNotifier + ?Sized>(&mut self, input: &InputState, notifier: &mut N) -> LevelState {
        if self.state.is_terminal() {
            return self.state;
        }

        self.tick += 1;

        update_velocity(&mut self.actor, input, self.traction, &self.tuning);
        let was_grounded = self.last_step.ground.is_some();
        self.last_step = step_actor(
            &self.statics,
            &mut self.actor,
            self.tuning.ground_snap_threshold,
        );
        if !was_grounded && let Some(ground) = self.last_step.ground {
            trace!(tick = self.tick, ground, "landed");
        }

        let next = evaluate(
            &self.actor,
            &self.hazards,
            &self.goal,
            self.tuning.death_altitude,
        );
        if next.is_terminal() {
            self.halt(next, notifier);
        }

        self.state
    }

    fn halt<N: UiNotifier + ?Sized>(&mut self, terminal: LevelState, notifier: &mut N) {
        self.state = terminal;
        self.armed = None;
        self.epoch += 1;
        self.clock.reset();

        match terminal {
            LevelState::GameOver(cause) => {
                info!(level = %self.name, tick = self.tick, ?cause, "game over");
                notifier.on_game_over(RespawnToken { epoch: self.epoch });
            }
            LevelState::Win => {
                info!(level = %self.name, tick = self.tick, "level complete");
                notifier.on_win();
            }
            LevelState::Running => {}
        }
    }

    /// Put the actor back at spawn and re-arm the loop.
    ///
    /// Returns the new handle; any handle from before the game over stays dead.
    pub fn respawn(&mut self, token: RespawnToken) -> Result<LoopHandle, SessionError> {
        if self.state == LevelState::Win {
            return Err(SessionError::AlreadyWon);
        }
        if token.epoch != self.epoch || !self.state.is_terminal() {
            return Err(SessionError::StaleRespawnToken {
                token: token.epoch,
                current: self.epoch,
            });
        }

        self.actor.reset(self.spawn);
        self.state = LevelState::Running;
        self.last_step = StepResult::default();
        self.clock.reset();
        self.epoch += 1;

        let handle = LoopHandle { epoch: self.epoch };
        self.armed = Some(handle);

        info!(level = %self.name, epoch = self.epoch, "respawned");
        Ok(handle)
    }

    #[inline]
    pub fn state(&self) -> LevelState {
        self.state
    }

    #[inline]
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.actor.position()
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.actor.velocity
    }

    /// Mutable actor access for hosts and tests that place the actor directly.
    #[inline]
    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn traction(&self) -> Traction {
        self.traction
    }

    pub fn tuning(&self) -> &PhysicsTuning {
        &self.tuning
    }

    pub fn spawn(&self) -> Vec3 {
        self.spawn
    }

    pub fn statics(&self) -> &StaticSet {
        &self.statics
    }

    pub fn hazards(&self) -> &[Volume] {
        &self.hazards
    }

    pub fn goal(&self) -> &Volume {
        &self.goal
    }

    /// Ticks run since the session was built.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Resolver result of the most recent tick.
    pub fn last_step(&self) -> StepResult {
        self.last_step
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.camera
    }

    pub fn set_camera_mode(&mut self, mode: CameraMode) {
        self.camera = mode;
    }

    pub fn toggle_camera(&mut self) -> CameraMode {
        self.camera = self.camera.toggled();
        debug!(mode = ?self.camera, "camera mode");
        self.camera
    }

    /// Where the camera should head this frame, before any smoothing.
    pub fn camera_anchor(&self) -> Vec3 {
        let p = self.actor.position();
        match self.camera {
            CameraMode::Follow => p + Vec3::from(FOLLOW_CAMERA_OFFSET),
            CameraMode::Overhead => Vec3::new(0.0, p.y + OVERHEAD_CAMERA_HEIGHT, p.z),
        }
    }
}
