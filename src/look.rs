/*!
Interface to the external camera/look collaborator.
*/

use crate::math::Quat;

/// Camera/look collaborator, invoked at the top of every tick before any
/// motion is solved.
///
/// Implementations consume their accumulated look input (mouse deltas,
/// stick state, smoothing) and return the body's yaw-only rotation; camera
/// pitch stays entirely on their side. Pairing with the camera transform
/// and sensitivity tuning happen at the implementation's own construction,
/// outside this crate.
pub trait LookDriver {
    fn apply_look_rotation(&mut self) -> Quat;
}
