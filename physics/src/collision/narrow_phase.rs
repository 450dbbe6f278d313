use super::types::Faces;

/// Inclusive 3D box intersection. Touching faces count as overlap.
///
/// Used for hazard and goal checks, never for blocking movement.
#[inline]
pub fn boxes_overlap(a: &Faces, b: &Faces) -> bool {
    let x = a.right >= b.left && a.left <= b.right;
    let y = a.bottom <= b.top && a.top >= b.bottom;
    let z = a.front >= b.back && a.back <= b.front;

    x && y && z
}

/// Is `actor` standing on (or just sunk into) the top face of `ground`?
///
/// - Vertically: the actor's bottom is at the ground's top or at most `threshold` below it.
/// - Horizontally: the XZ footprints overlap, edges inclusive.
#[inline]
pub fn ground_contact(actor: &Faces, ground: &Faces, threshold: f32) -> bool {
    let vertically_aligned = actor.bottom <= ground.top && actor.bottom >= ground.top - threshold;

    let horizontally_aligned = actor.right >= ground.left
        && actor.left <= ground.right
        && actor.front >= ground.back
        && actor.back <= ground.front;

    vertically_aligned && horizontally_aligned
}

/// Position of the actor relative to one static volume's side faces.
///
/// Direction names describe which face of the *actor* is against the other volume:
/// `on_left` means the actor sits on the other volume's left side (the volume is to
/// the actor's right).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideContact {
    /// Vertical ranges overlap strictly and the actor is not resting on top.
    pub on_same_level: bool,
    /// X ranges overlap strictly (gates front/back blocking).
    pub within_x_bounds: bool,
    /// Z ranges overlap strictly (gates left/right blocking).
    pub within_z_bounds: bool,
    pub on_left: bool,
    pub on_right: bool,
    pub on_front: bool,
    pub on_back: bool,
}

/// Classify `actor` against the side faces of `other`.
#[inline]
pub fn side_contact(actor: &Faces, other: &Faces) -> SideContact {
    let above_top = actor.bottom >= other.top;
    let on_same_level = actor.top > other.bottom && actor.bottom < other.top && !above_top;

    SideContact {
        on_same_level,
        within_x_bounds: actor.right > other.left && actor.left < other.right,
        within_z_bounds: actor.front > other.back && actor.back < other.front,
        on_left: actor.right >= other.left && actor.left < other.left,
        on_right: actor.left <= other.right && actor.right > other.right,
        on_front: actor.back <= other.front && actor.front > other.front,
        on_back: actor.front >= other.back && actor.back < other.back,
    }
}
