/*!
Thin wrappers over parry time-of-impact queries.

Everything here casts a moving shape against the [`StaticShape`] set and
reports the earliest contact; the caller decides what to do with it.
*/

use nalgebra as na;
use rapier3d::parry::{
    query::{self, ShapeCastOptions},
    shape::{Ball, Cuboid, HalfSpace, Shape},
};

use super::types::{StaticShape, SweepHit};
use crate::math::{Iso, Vec3};

/// Cast `moving` (at `moving_iso`, translating by `vel`) against a single
/// static shape and return the earliest hit (if any).
///
/// The returned normal is the contact normal flipped, when necessary, to
/// oppose the cast motion, so a downward cast onto ground always reports an
/// upward normal.
pub fn cast_against_static(
    moving_iso: &Iso,
    moving: &dyn Shape,
    vel: Vec3,
    max_toi: f32,
    target: &StaticShape,
) -> Option<SweepHit> {
    match *target {
        StaticShape::Plane { normal, dist } => {
            // Plane equation in world space: normal ⋅ x = dist. Represent it
            // as a half-space positioned at `normal * dist`.
            let unit_n = na::Unit::new_normalize(normal);
            let plane = HalfSpace { normal: unit_n };
            let anchor = normal * dist;
            let plane_iso = Iso::translation(anchor.x, anchor.y, anchor.z);
            cast(moving_iso, moving, vel, max_toi, &plane, &plane_iso)
        }
        StaticShape::Cuboid {
            half_extents,
            transform,
        } => {
            let cuboid = Cuboid::new(half_extents);
            cast(moving_iso, moving, vel, max_toi, &cuboid, &transform.iso())
        }
        StaticShape::Sphere { radius, transform } => {
            let ball = Ball::new(radius);
            cast(moving_iso, moving, vel, max_toi, &ball, &transform.iso())
        }
    }
}

/// Iterate a set of static shapes and return the minimum time-of-impact
/// contact across all of them.
pub fn earliest_hit(
    moving_iso: &Iso,
    moving: &dyn Shape,
    vel: Vec3,
    max_toi: f32,
    statics: &[StaticShape],
) -> Option<SweepHit> {
    let mut best: Option<SweepHit> = None;
    for target in statics {
        if let Some(hit) = cast_against_static(moving_iso, moving, vel, max_toi, target) {
            if best.as_ref().map_or(true, |b| hit.fraction < b.fraction) {
                best = Some(hit);
            }
        }
    }
    best
}

fn cast(
    moving_iso: &Iso,
    moving: &dyn Shape,
    vel: Vec3,
    max_toi: f32,
    target: &dyn Shape,
    target_iso: &Iso,
) -> Option<SweepHit> {
    let mut opts = ShapeCastOptions::with_max_time_of_impact(max_toi);
    opts.stop_at_penetration = true;

    let hit = query::cast_shapes(
        moving_iso,
        &vel,
        moving,
        target_iso,
        &na::Vector3::zeros(),
        target,
        opts,
    )
    .ok()
    .flatten()?;

    let mut normal: Vec3 = hit.normal1.into_inner();
    if normal.dot(&vel) > 0.0 {
        normal = -normal;
    }
    Some(SweepHit {
        normal,
        fraction: hit.time_of_impact,
    })
}
