/*!
Core collision types and math aliases shared by the collision submodules.

This module intentionally contains no algorithms. It defines the data types
exchanged between:
- narrow_phase (pairwise predicates: overlap, ground contact, side relation)
- broad (static set acceleration and candidate queries)
- ground (vertical resolution)
- kinematic (horizontal resolution and the per-tick integrate step)

Face coordinates are cached on the volume and recomputed by every mutator, so a
collision query can never observe faces from before a position write.
*/

use nalgebra as na;

/// Common math alias for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;

/// World-space face coordinates of an axis-aligned box.
///
/// `left/right` bound X, `bottom/top` bound Y, `back/front` bound Z
/// (front is the +Z face).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Faces {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub back: f32,
    pub front: f32,
}

impl Faces {
    #[inline]
    fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            left: center.x - half_extents.x,
            right: center.x + half_extents.x,
            bottom: center.y - half_extents.y,
            top: center.y + half_extents.y,
            back: center.z - half_extents.z,
            front: center.z + half_extents.z,
        }
    }
}

/// An axis-aligned box placed in world space.
///
/// Static platforms, hazards and goals are plain `Volume`s. The moving actor wraps
/// one in [`Actor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Volume {
    center: Vec3,
    half_extents: Vec3,
    faces: Faces,
}

impl Volume {
    #[inline]
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
            faces: Faces::from_center(center, half_extents),
        }
    }

    /// Build from full box dimensions (width along X, height along Y, depth along Z).
    #[inline]
    pub fn from_size(center: Vec3, size: Vec3) -> Self {
        Self::new(center, size * 0.5)
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    #[inline]
    pub fn faces(&self) -> &Faces {
        &self.faces
    }

    /// Recompute the cached faces from the current center.
    ///
    /// Every mutator on `Volume` already calls this; it stays public for callers
    /// that want to make the refresh explicit after a batch of writes.
    #[inline]
    pub fn recompute_faces(&mut self) {
        self.faces = Faces::from_center(self.center, self.half_extents);
    }

    #[inline]
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
        self.recompute_faces();
    }

    #[inline]
    pub fn set_center_y(&mut self, y: f32) {
        self.center.y = y;
        self.recompute_faces();
    }

    #[inline]
    pub fn translate(&mut self, delta: Vec3) {
        self.center += delta;
        self.recompute_faces();
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.faces.left
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.faces.right
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.faces.bottom
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.faces.top
    }

    #[inline]
    pub fn back(&self) -> f32 {
        self.faces.back
    }

    #[inline]
    pub fn front(&self) -> f32 {
        self.faces.front
    }
}

/// The single dynamic body of a level: a volume plus per-tick velocity and gravity.
///
/// Velocity is expressed in world units per tick, not per second. Gravity is the
/// signed amount added to `velocity.y` on every airborne tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Actor {
    pub body: Volume,
    pub velocity: Vec3,
    pub gravity: f32,
}

impl Actor {
    #[inline]
    pub fn new(body: Volume, velocity: Vec3, gravity: f32) -> Self {
        Self {
            body,
            velocity,
            gravity,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.body.center()
    }

    /// Move back to `position` with zero velocity.
    #[inline]
    pub fn reset(&mut self, position: Vec3) {
        self.body.set_center(position);
        self.velocity = Vec3::zeros();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_follow_center_and_half_extents() {
        let v = Volume::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 1.0, 2.0));
        let f = v.faces();
        assert_eq!((f.left, f.right), (0.5, 1.5));
        assert_eq!((f.bottom, f.top), (1.0, 3.0));
        assert_eq!((f.back, f.front), (1.0, 5.0));
    }

    #[test]
    fn from_size_halves_dimensions() {
        // Level 1's first platform: 4 x 0.5 x 8 at (0, -2, -2).
        let v = Volume::from_size(Vec3::new(0.0, -2.0, -2.0), Vec3::new(4.0, 0.5, 8.0));
        assert_eq!(v.top(), -1.75);
        assert_eq!(v.bottom(), -2.25);
        assert_eq!(v.left(), -2.0);
        assert_eq!(v.front(), 2.0);
    }

    #[test]
    fn every_mutator_refreshes_faces() {
        let mut v = Volume::new(Vec3::zeros(), Vec3::new(1.0, 0.5, 0.5));

        v.translate(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(v.right(), 2.0);

        v.set_center_y(3.0);
        assert_eq!(v.bottom(), 2.5);

        v.set_center(Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(v.back(), -4.5);
        assert_eq!(v.left(), -1.0);
    }

    #[test]
    fn actor_reset_zeroes_velocity() {
        let body = Volume::new(Vec3::new(5.0, -10.0, 2.0), Vec3::new(1.0, 0.5, 0.5));
        let mut actor = Actor::new(body, Vec3::new(0.1, -0.3, 0.1), -0.005);

        actor.reset(Vec3::new(0.0, 0.0, 1.0));

        assert_eq!(actor.position(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(actor.velocity, Vec3::zeros());
        assert_eq!(actor.body.top(), 0.5);
    }
}
