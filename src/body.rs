/*!
Interface to the external collision-sweep collaborator.

The controller computes intent only. Actually displacing the capsule
against world geometry (and deciding what it touched on the way) is the
body's job: an engine character controller in production, the parry-backed
[`crate::collision::CapsuleBody`] when no engine is around, or a scripted
fake in tests.
*/

use crate::flags::ContactFlags;
use crate::math::Vec3;

/// A kinematic capsule body resolved against world geometry by an external
/// collision engine.
///
/// The controller calls `move_by` exactly once per tick with
/// `velocity * dt` and reads its grounded flag from the returned contact
/// sides.
pub trait KinematicBody {
    /// Sweep the body by `translation`, resolving collisions along the way,
    /// and report which sides touched geometry during the move.
    fn move_by(&mut self, translation: Vec3) -> ContactFlags;

    /// Downward sweep of a sphere of `radius` starting at `origin`, over at
    /// most `max_dist` meters.
    ///
    /// Returns the unit surface normal of the earliest hit, or `None` when
    /// nothing is within reach. Callers treat `None` as flat ground.
    fn probe_ground(&self, origin: Vec3, radius: f32, max_dist: f32) -> Option<Vec3>;

    /// World-space center of the capsule.
    fn center(&self) -> Vec3;

    /// Capsule radius (meters).
    fn radius(&self) -> f32;

    /// Full capsule height, caps included (meters).
    fn height(&self) -> f32;
}
