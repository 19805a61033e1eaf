/*!
Data types exchanged between the collision submodules. No algorithms here.
*/

use crate::math::{Transform, Vec3, up};

/// Static collision shapes the reference body sweeps against.
///
/// - Plane: infinite plane in world space represented by its unit normal
///   and offset (dist) satisfying: normal ⋅ x = dist.
/// - Cuboid: oriented box with half-extents in local space, placed by
///   `transform`.
/// - Sphere: ball placed by `transform` (rotation ignored).
#[derive(Clone, Copy, Debug)]
pub enum StaticShape {
    Plane {
        /// World-space unit normal of the plane.
        normal: Vec3,
        /// Plane offset along the normal, i.e., normal ⋅ x = dist.
        dist: f32,
    },
    Cuboid {
        /// Local-space half-extents (hx, hy, hz).
        half_extents: Vec3,
        /// World-space pose of the cuboid.
        transform: Transform,
    },
    Sphere {
        /// Radius of the sphere in meters.
        radius: f32,
        /// World-space pose (translation used; rotation ignored).
        transform: Transform,
    },
}

impl StaticShape {
    /// Horizontal floor plane at the given height.
    #[inline]
    pub fn floor(height: f32) -> Self {
        Self::Plane {
            normal: up(),
            dist: height,
        }
    }
}

/// Capsule dimensions for the swept body.
///
/// `half_height` is the half-length of the cylinder section (aligned with
/// +Y), so the full capsule height is `2 * (half_height + radius)`.
#[derive(Clone, Copy, Debug)]
pub struct CapsuleSpec {
    pub radius: f32,
    pub half_height: f32,
}

impl CapsuleSpec {
    /// Full capsule height, caps included (meters).
    #[inline]
    pub fn height(&self) -> f32 {
        2.0 * (self.half_height + self.radius)
    }
}

/// Earliest contact returned by a time-of-impact query.
#[derive(Clone, Copy, Debug)]
pub struct SweepHit {
    /// World-space contact normal, flipped to oppose the cast motion.
    pub normal: Vec3,
    /// Fraction (0..1) of the tested translation where the hit occurred.
    pub fraction: f32,
}
