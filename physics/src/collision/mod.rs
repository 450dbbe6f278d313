/*!
Collision root module.

This module re-exports submodules that implement the per-tick AABB resolver for
the actor against the level's static platform set. The code is split for clarity:

- types:        shared data types (Volume, Actor, Faces)
- settings:     resolver constants and tolerances
- broad:        static set with a BVH for candidate queries
- narrow_phase: pure pairwise predicates (box overlap, ground contact, side relation)
- ground:       vertical resolution (first supporting ground, snap, gravity)
- kinematic:    horizontal resolution and the full vertical-then-horizontal step
*/

pub mod broad;
pub mod ground;
pub mod kinematic;
pub mod narrow_phase;
pub mod settings;
pub mod types;

// Re-export commonly used types and functions.
pub use broad::StaticSet;
pub use ground::{find_ground, resolve_vertical};
pub use kinematic::{StepResult, resolve_horizontal, step_actor};
pub use narrow_phase::{SideContact, boxes_overlap, ground_contact, side_contact};
pub use types::{Actor, Faces, Vec3, Volume};
