//! The two shipped levels.

use super::{BoxDef, LevelDef};
use crate::{
    constants::{ACTOR_SIZE, SPAWN_POSITION},
    movement::Traction,
};

const fn b(position: [f32; 3], size: [f32; 3]) -> BoxDef {
    BoxDef { position, size }
}

const ICE_PLATFORMS: [BoxDef; 14] = [
    b([0.0, -2.0, -2.0], [4.0, 0.5, 8.0]),
    b([0.0, -2.0, -10.0], [4.0, 0.5, 4.0]),
    b([-3.0, -1.0, -16.0], [3.0, 0.5, 3.0]),
    b([5.0, -2.0, -22.0], [20.0, 0.5, 2.0]),
    b([15.0, -2.0, -28.0], [3.0, 0.5, 3.0]),
    b([10.0, -3.0, -33.0], [3.0, 0.5, 3.0]),
    b([3.0, -2.0, -33.0], [3.0, 0.5, 3.0]),
    b([0.0, -1.0, -39.0], [3.0, 0.5, 3.0]),
    b([0.0, 0.0, -49.0], [2.0, 0.5, 10.0]),
    b([-2.0, -1.0, -57.0], [3.0, 0.5, 3.0]),
    b([-3.0, 0.0, -63.0], [3.0, 0.5, 3.0]),
    b([-1.0, 0.0, -69.0], [3.0, 0.5, 3.0]),
    b([0.0, 0.0, -76.0], [3.0, 0.5, 3.0]),
    b([0.0, 0.0, -84.0], [5.0, 0.5, 5.0]),
];

const ICE_GOAL: BoxDef = b([0.0, 0.0, -85.0], [1.0, 1.0, 1.0]);

const LAVA_PLATFORMS: [BoxDef; 19] = [
    b([0.0, -2.0, 0.0], [5.0, 0.5, 7.0]),
    b([0.0, -1.0, -7.0], [5.0, 0.5, 5.0]),
    b([-10.0, 0.0, -11.0], [8.0, 0.5, 8.0]),
    b([-7.0, -1.0, -20.0], [5.0, 0.5, 5.0]),
    b([0.0, -2.0, -20.0], [6.0, 0.5, 6.0]),
    b([3.0, -4.0, -29.0], [3.0, 0.5, 3.0]),
    b([9.0, -3.0, -34.0], [5.0, 0.5, 5.0]),
    b([5.0, -2.0, -40.0], [3.0, 0.5, 3.0]),
    b([0.0, -2.0, -40.0], [2.0, 0.5, 2.0]),
    b([0.0, -2.0, -43.0], [2.0, 0.5, 2.0]),
    b([0.0, -2.0, -46.0], [2.0, 0.5, 2.0]),
    b([0.0, -2.0, -49.0], [2.0, 0.5, 2.0]),
    b([0.0, -2.0, -52.0], [2.0, 0.5, 2.0]),
    b([0.0, -2.0, -55.0], [2.0, 0.5, 2.0]),
    b([0.0, -2.0, -58.0], [2.0, 0.5, 2.0]),
    b([0.0, -2.0, -61.0], [2.0, 0.5, 2.0]),
    b([0.0, -2.0, -64.0], [2.0, 0.5, 2.0]),
    b([0.0, -2.0, -67.0], [2.0, 0.5, 2.0]),
    b([0.0, -2.0, -70.0], [2.0, 0.5, 2.0]),
];

const LAVA_POOLS: [BoxDef; 10] = [
    b([1.5, -1.84, -2.5], [2.0, 0.2, 2.0]),
    b([-9.0, 0.16, -12.0], [5.0, 0.2, 5.0]),
    b([1.5, -1.84, -21.5], [3.0, 0.2, 3.0]),
    b([1.5, -1.84, -18.5], [3.0, 0.2, 3.0]),
    b([0.0, -1.84, -43.0], [1.8, 0.2, 1.8]),
    b([0.0, -1.84, -49.0], [1.8, 0.2, 1.8]),
    b([0.0, -1.84, -55.0], [1.8, 0.2, 1.8]),
    b([0.0, -1.84, -61.0], [1.8, 0.2, 1.8]),
    b([0.0, -1.84, -67.0], [1.8, 0.2, 1.8]),
    b([9.0, -2.84, -34.0], [3.0, 0.2, 3.0]),
];

// Sits inside the last stepping stone, so touching that stone's top wins.
const LAVA_GOAL: BoxDef = b([0.0, -2.0, -70.0], [1.0, 1.0, 1.0]);

/// Level 1: ice floes over the void.
pub fn ice() -> LevelDef {
    LevelDef {
        name: "ice".to_owned(),
        traction: Traction::Slippery,
        spawn: SPAWN_POSITION,
        actor_size: ACTOR_SIZE,
        platforms: ICE_PLATFORMS.to_vec(),
        hazards: Vec::new(),
        goal: ICE_GOAL,
    }
}

/// Level 2: stone platforms with lava pools.
pub fn lava() -> LevelDef {
    LevelDef {
        name: "lava".to_owned(),
        traction: Traction::Grippy,
        spawn: SPAWN_POSITION,
        actor_size: ACTOR_SIZE,
        platforms: LAVA_PLATFORMS.to_vec(),
        hazards: LAVA_POOLS.to_vec(),
        goal: LAVA_GOAL,
    }
}
