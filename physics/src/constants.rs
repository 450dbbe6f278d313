use std::time::Duration;

/// Physics ticks per simulated second.
pub const TICK_RATE_HZ: u32 = 60;

/// Length of one physics tick.
pub const FIXED_TIMESTEP: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE_HZ as u64);

/// Horizontal speed set by a held direction key (world units per tick).
pub const MOVE_SPEED: f32 = 0.1;

/// Upward velocity given by a jump (world units per tick).
pub const JUMP_VELOCITY: f32 = 0.12;

/// Per-tick multiplier on X/Z velocity for slippery levels.
///
/// `0.1 * 0.96^n` drops below `0.01` at n = 57.
pub const SLIPPERY_DECAY: f32 = 0.96;

/// Actor center altitude below which the level is lost.
pub const DEATH_ALTITUDE: f32 = -35.0;

/// Actor box dimensions (width, height, depth).
pub const ACTOR_SIZE: [f32; 3] = [2.0, 1.0, 1.0];

/// Where the actor appears at level start and after a respawn.
pub const SPAWN_POSITION: [f32; 3] = [0.0, 0.0, 1.0];

/// Follow-camera offset from the actor.
pub const FOLLOW_CAMERA_OFFSET: [f32; 3] = [0.0, 6.0, 8.0];

/// Overhead-camera height above the actor.
pub const OVERHEAD_CAMERA_HEIGHT: f32 = 20.0;
