// Shared helpers for the physics integration tests.
#![allow(dead_code)]

use physics::{
    Actor, FIXED_TIMESTEP, FrameOutcome, InputState, LevelSession, LevelState, RespawnToken,
    UiNotifier, Vec3, Volume,
};
use tracing_subscriber::EnvFilter;

// Install a test-friendly subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// Notifier that records every event it receives.
#[derive(Default)]
pub struct Recorder {
    pub game_overs: Vec<RespawnToken>,
    pub wins: usize,
}

impl UiNotifier for Recorder {
    fn on_game_over(&mut self, respawn: RespawnToken) {
        self.game_overs.push(respawn);
    }

    fn on_win(&mut self) {
        self.wins += 1;
    }
}

// The actor box used by both shipped levels, centered at `center`.
pub fn actor_at(center: Vec3) -> Actor {
    let body = Volume::from_size(center, Vec3::new(2.0, 1.0, 1.0));
    Actor::new(body, Vec3::zeros(), -0.005)
}

// Drive the session like a 60 Hz host until it stops or `max_frames` pass.
//
// Returns the number of frames that ran at least one tick.
pub fn run_frames(
    session: &mut LevelSession,
    input: &InputState,
    ui: &mut Recorder,
    max_frames: usize,
) -> usize {
    let mut frames = 0;
    for _ in 0..max_frames {
        let Some(handle) = session.loop_handle() else {
            break;
        };
        match session.advance(handle, FIXED_TIMESTEP, input, ui) {
            FrameOutcome::Ticked(report) => {
                if report.ticks > 0 {
                    frames += 1;
                }
                if report.state != LevelState::Running {
                    break;
                }
            }
            FrameOutcome::Cancelled => break,
        }
    }
    frames
}
