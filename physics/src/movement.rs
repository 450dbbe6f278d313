use serde::Deserialize;

use crate::{
    collision::Actor,
    input::{Control, InputState},
    tuning::PhysicsTuning,
};

/// How horizontal velocity bleeds off when no direction is held.
///
/// Chosen per level and fixed for the level's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traction {
    /// Ice: X/Z velocity is multiplied by the decay factor every tick.
    Slippery,
    /// Solid ground: X/Z velocity is reset every tick.
    Grippy,
}

/// Turn the held controls into the actor's velocity for this tick.
///
/// Order is fixed:
/// 1. traction is applied to X/Z,
/// 2. each held direction overwrites its axis with the full move speed
///    (forward/back on Z, left/right on X, the later of a pair wins),
/// 3. jump sets `velocity.y` only when it is exactly zero.
///
/// The jump guard relies on the resolver clamping `velocity.y` to `0.0` on a
/// grounded tick. It also accepts the single tick at a jump apex where gravity
/// lands on exactly zero, so a mid-air jump is possible in that narrow case.
pub fn update_velocity(
    actor: &mut Actor,
    input: &InputState,
    traction: Traction,
    tuning: &PhysicsTuning,
) {
    match traction {
        Traction::Slippery => {
            actor.velocity.x *= tuning.slippery_decay;
            actor.velocity.z *= tuning.slippery_decay;
        }
        Traction::Grippy => {
            actor.velocity.x = 0.0;
            actor.velocity.z = 0.0;
        }
    }

    let speed = tuning.move_speed;
    if input.is_pressed(Control::Forward) {
        actor.velocity.z = -speed;
    }
    if input.is_pressed(Control::Back) {
        actor.velocity.z = speed;
    }
    if input.is_pressed(Control::Left) {
        actor.velocity.x = -speed;
    }
    if input.is_pressed(Control::Right) {
        actor.velocity.x = speed;
    }

    if input.is_pressed(Control::Jump) && actor.velocity.y == 0.0 {
        actor.velocity.y = tuning.jump_velocity;
    }
}
