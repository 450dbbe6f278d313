use super::{broad::StaticSet, narrow_phase, types::Actor, types::Faces};

/// Index of the first static volume (in set order) whose top face supports `actor`.
///
/// Support means the actor's bottom lies in `[top - snap_threshold, top]` and the XZ
/// footprints overlap. When platforms are authored so several qualify, the earliest
/// one wins; that is the defined behavior, not an error.
pub fn find_ground(statics: &StaticSet, actor: &Faces, snap_threshold: f32) -> Option<usize> {
    statics
        .candidates_around(actor, snap_threshold)
        .into_iter()
        .find(|&idx| {
            statics
                .get(idx)
                .is_some_and(|g| narrow_phase::ground_contact(actor, g.faces(), snap_threshold))
        })
}

/// Vertical half of the tick.
///
/// - With ground support: clamp `velocity.y` to be non-negative and place the actor's
///   bottom exactly on the ground's top face.
/// - Without: add the actor's gravity to `velocity.y`.
///
/// Then `position.y += velocity.y` in both cases. Returns the supporting index.
pub fn resolve_vertical(
    statics: &StaticSet,
    actor: &mut Actor,
    snap_threshold: f32,
) -> Option<usize> {
    let ground = find_ground(statics, actor.body.faces(), snap_threshold);

    match ground.and_then(|idx| statics.get(idx).map(|g| g.top())) {
        Some(top) => {
            actor.velocity.y = actor.velocity.y.max(0.0);
            actor.body.set_center_y(top + actor.body.half_extents().y);
        }
        None => {
            actor.velocity.y += actor.gravity;
        }
    }

    let y = actor.body.center().y + actor.velocity.y;
    actor.body.set_center_y(y);

    ground
}
