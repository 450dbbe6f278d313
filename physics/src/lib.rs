pub mod bitmask_flags;
pub mod clock;
pub mod collision;
pub mod constants;
pub mod error;
pub mod input;
pub mod level;
pub mod movement;
pub mod outcome;
pub mod session;
pub mod tuning;

pub use clock::FixedStep;
pub use collision::{Actor, Faces, StaticSet, StepResult, Vec3, Volume, step_actor};
pub use constants::{
    ACTOR_SIZE, DEATH_ALTITUDE, FIXED_TIMESTEP, JUMP_VELOCITY, MOVE_SPEED, SLIPPERY_DECAY,
    SPAWN_POSITION, TICK_RATE_HZ,
};
pub use error::{LevelError, SessionError};
pub use input::{Control, InputState};
pub use level::{BoxDef, LevelDef, LevelId};
pub use movement::{Traction, update_velocity};
pub use outcome::{LevelState, LossCause, evaluate};
pub use session::{
    CameraMode, FrameOutcome, FrameReport, LevelSession, LoopHandle, RespawnToken, UiNotifier,
};
pub use tuning::PhysicsTuning;
