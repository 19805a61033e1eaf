/*!
Grounded motion math.

Pure functions: the controller feeds them the current orientation, the
sampled input and the probed surface normal, and gets back the velocity it
should hand to the collision move. Nothing here touches state or performs
queries.
*/

use crate::math::{Quat, Vec2, Vec3, forward, right};

/// Squared length below which a projected direction is treated as zero.
const DIR_EPS_SQ: f32 = 1.0e-12;

/// Project `v` onto the plane with unit normal `normal`.
#[inline]
pub fn project_onto_plane(v: Vec3, normal: Vec3) -> Vec3 {
    v - normal * v.dot(&normal)
}

/// Desired grounded move direction for this tick.
///
/// The forward/right mix of the damped input is projected onto the surface
/// plane and re-normalized, which keeps movement glued to slopes instead of
/// pushing into them or floating off. The vertical component is then
/// overwritten with `-anti_bump_factor`: a small constant downward bias
/// that keeps the capsule in contact over small ground irregularities.
pub fn ground_move_direction(
    rotation: &Quat,
    input: Vec2,
    ground_normal: Vec3,
    anti_bump_factor: f32,
) -> Vec3 {
    let desired = forward(rotation) * input.y + right(rotation) * input.x;
    let mut dir = project_onto_plane(desired, ground_normal);
    let len_sq = dir.norm_squared();
    dir = if len_sq > DIR_EPS_SQ {
        dir / len_sq.sqrt()
    } else {
        Vec3::zeros()
    };
    dir.y = -anti_bump_factor;
    dir
}

/// Velocity from a grounded move direction.
///
/// Only the planar components scale with speed; the vertical anti-bump bias
/// is a fixed magnitude, not speed-proportional.
#[inline]
pub fn ground_velocity(direction: Vec3, speed: f32) -> Vec3 {
    Vec3::new(direction.x * speed, direction.y, direction.z * speed)
}

/// Integrate gravity for one tick. Runs every tick without exception,
/// including the tick a jump impulse was applied.
#[inline]
pub fn integrate_gravity(velocity: &mut Vec3, gravity: f32, dt: f32) {
    velocity.y -= gravity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::up;

    #[test]
    fn flat_ground_keeps_the_input_direction() {
        // Forward input on flat ground: unit planar direction with the
        // anti-bump bias as the only vertical component.
        let dir = ground_move_direction(&Quat::identity(), Vec2::new(0.0, 1.0), up(), 0.75);
        assert!((dir - Vec3::new(0.0, -0.75, -1.0)).norm() < 1.0e-6);
    }

    #[test]
    fn projection_is_orthogonal_to_the_surface_normal() {
        let normal = Vec3::new(0.0, 2.0, 1.0).normalize();
        let projected = project_onto_plane(Vec3::new(0.0, 0.0, -1.0), normal);
        assert!(projected.dot(&normal).abs() < 1.0e-6);
    }

    #[test]
    fn slope_projection_shortens_the_planar_component() {
        // On a slope the re-normalized direction leans into the surface, so
        // its planar magnitude drops below 1 while staying nonzero.
        let normal = Vec3::new(0.0, 2.0, 1.0).normalize();
        let dir = ground_move_direction(&Quat::identity(), Vec2::new(0.0, 1.0), normal, 0.75);
        let planar = (dir.x * dir.x + dir.z * dir.z).sqrt();
        assert!(planar > 0.5 && planar < 1.0 - 1.0e-3);
        assert!((dir.y + 0.75).abs() < 1.0e-6);
    }

    #[test]
    fn zero_input_still_carries_the_anti_bump_bias() {
        let dir = ground_move_direction(&Quat::identity(), Vec2::zeros(), up(), 0.75);
        assert!((dir - Vec3::new(0.0, -0.75, 0.0)).norm() < 1.0e-6);
    }

    #[test]
    fn ground_velocity_scales_planar_components_only() {
        let velocity = ground_velocity(Vec3::new(0.0, -0.75, -1.0), 8.0);
        assert!((velocity - Vec3::new(0.0, -0.75, -8.0)).norm() < 1.0e-6);
    }

    #[test]
    fn gravity_decrement_is_exact() {
        // gravity = 20, dt = 0.1 must shave exactly 2.0 off the vertical
        // velocity, nothing else.
        let mut velocity = Vec3::new(1.5, 3.0, -2.0);
        integrate_gravity(&mut velocity, 20.0, 0.1);
        assert!((velocity.y - 1.0).abs() < 1.0e-6);
        assert_eq!(velocity.x, 1.5);
        assert_eq!(velocity.z, -2.0);
    }
}
