/*!
Collision resolver settings and tolerances.

These constants centralize the parameters used by vertical ground resolution and
by the broad-phase candidate queries. Keeping them together makes tuning easier
and keeps every tick deterministic.

Notes
- Distances are in world units; velocities are in world units per tick.
- The defaults here feed `PhysicsTuning::default()`; override from level or game
  data instead of editing these.
*/

/// How far below a platform's top face the actor's bottom may sit and still be
/// snapped onto it (world units).
/// Larger values catch faster falls but pull the actor up through thin ledges.
pub const GROUND_SNAP_THRESHOLD: f32 = 0.2;

/// Velocity added to `velocity.y` on every tick without ground support.
pub const GRAVITY_PER_TICK: f32 = -0.005;

/// Margin added around broad-phase query boxes (world units).
/// Only widens the candidate set; exact predicates decide contact.
pub const BROAD_PHASE_MARGIN: f32 = 1.0e-3;
