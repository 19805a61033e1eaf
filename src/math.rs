/*!
Math aliases and the rigid transform used across the crate.

This module intentionally contains no locomotion logic. It fixes the
conventions everything else relies on:

- Y is up.
- Body rotations are yaw-only unit quaternions (pitch belongs to the camera,
  which is outside this crate).
- Yaw 0 faces -Z; +X is to the right of that facing.
*/

use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec2 = na::Vector2<f32>;
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;
pub type Iso = na::Isometry3<f32>;

/// A rigid transform (isometry) in world space.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Transform {
    #[inline]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Convert to an nalgebra `Isometry3` for use with narrow-phase queries.
    #[inline]
    pub fn iso(&self) -> Iso {
        Iso::from_parts(
            na::Translation3::new(self.translation.x, self.translation.y, self.translation.z),
            self.rotation,
        )
    }
}

/// World up axis (+Y).
#[inline]
pub fn up() -> Vec3 {
    Vec3::y()
}

/// Forward basis vector of a yaw-only rotation (yaw 0 faces -Z).
#[inline]
pub fn forward(rotation: &Quat) -> Vec3 {
    rotation * -Vec3::z()
}

/// Right basis vector of a yaw-only rotation.
#[inline]
pub fn right(rotation: &Quat) -> Vec3 {
    rotation * Vec3::x()
}
