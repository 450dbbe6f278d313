use tracing::trace;

use super::{
    broad::StaticSet,
    ground, narrow_phase,
    types::{Actor, Vec3},
};

/// Result of one resolved tick for the actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepResult {
    /// Index of the static volume that supported the actor this tick, if any.
    pub ground: Option<usize>,
    /// X velocity was zeroed by a side face this tick.
    pub blocked_x: bool,
    /// Z velocity was zeroed by a front/back face this tick.
    pub blocked_z: bool,
}

/// Horizontal half of the tick.
///
/// Every static volume is checked (no early exit). A volume can only zero the
/// velocity component pointing into one of its side faces, so the outcome does not
/// depend on evaluation order. After the scan, `position.xz += velocity.xz`.
///
/// Returns `(blocked_x, blocked_z)`.
pub fn resolve_horizontal(statics: &StaticSet, actor: &mut Actor) -> (bool, bool) {
    let mut blocked_x = false;
    let mut blocked_z = false;

    let faces = *actor.body.faces();
    for idx in statics.candidates_around(&faces, 0.0) {
        let Some(other) = statics.get(idx) else {
            continue;
        };
        let side = narrow_phase::side_contact(&faces, other.faces());
        if !side.on_same_level {
            continue;
        }

        if side.within_z_bounds {
            if side.on_left && actor.velocity.x > 0.0 {
                actor.velocity.x = 0.0;
                blocked_x = true;
            } else if side.on_right && actor.velocity.x < 0.0 {
                actor.velocity.x = 0.0;
                blocked_x = true;
            }
        }

        if side.within_x_bounds {
            if side.on_back && actor.velocity.z > 0.0 {
                actor.velocity.z = 0.0;
                blocked_z = true;
            } else if side.on_front && actor.velocity.z < 0.0 {
                actor.velocity.z = 0.0;
                blocked_z = true;
            }
        }
    }

    actor
        .body
        .translate(Vec3::new(actor.velocity.x, 0.0, actor.velocity.z));

    (blocked_x, blocked_z)
}

/// Integrate the actor for one fixed tick against `statics`.
///
/// Vertical first, then horizontal. Horizontal blocking is evaluated against the
/// height the actor reached this tick, so stepping onto a ledge and landing while
/// drifting past a platform's edge both resolve on the vertical pass.
pub fn step_actor(statics: &StaticSet, actor: &mut Actor, snap_threshold: f32) -> StepResult {
    let ground = ground::resolve_vertical(statics, actor, snap_threshold);
    let (blocked_x, blocked_z) = resolve_horizontal(statics, actor);

    if blocked_x || blocked_z {
        trace!(blocked_x, blocked_z, "side contact");
    }

    StepResult {
        ground,
        blocked_x,
        blocked_z,
    }
}
