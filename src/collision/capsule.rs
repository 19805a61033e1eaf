/*!
The sweep-and-slide capsule body.

Implements [`KinematicBody`] against a static shape set: shape-cast the
capsule along the requested translation, advance to just before the contact
(minus a skin distance), slide the leftover along the contact plane, and
iterate for corners. Contact normals accumulate into the
[`ContactFlags`] the controller reads its grounded state from.
*/

use rapier3d::parry::shape::{Ball, Capsule};

use super::narrow_phase;
use super::settings::{GROUND_NORMAL_MIN_Y, MAX_SLIDE_ITERATIONS, MIN_MOVE_SQ, SKIN};
use super::types::{CapsuleSpec, StaticShape};
use crate::body::KinematicBody;
use crate::flags::{ContactFlag, ContactFlags};
use crate::math::{Iso, Vec3, up};

/// Kinematic capsule resolved against a static world by parry shape casts.
pub struct CapsuleBody {
    center: Vec3,
    spec: CapsuleSpec,
    statics: Vec<StaticShape>,
}

impl CapsuleBody {
    pub fn new(center: Vec3, spec: CapsuleSpec, statics: Vec<StaticShape>) -> Self {
        Self {
            center,
            spec,
            statics,
        }
    }

    /// Teleport the capsule, bypassing collision (spawn points, respawns).
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    /// The static shapes this body sweeps against.
    pub fn statics(&self) -> &[StaticShape] {
        &self.statics
    }

    pub fn statics_mut(&mut self) -> &mut Vec<StaticShape> {
        &mut self.statics
    }

    fn iso(&self) -> Iso {
        Iso::translation(self.center.x, self.center.y, self.center.z)
    }
}

/// Classify a contact normal into the side of the body it touched.
/// A support normal points up at the body; overhead contact points down.
fn contact_side(normal: Vec3) -> ContactFlag {
    if normal.y >= GROUND_NORMAL_MIN_Y {
        ContactFlag::Below
    } else if normal.y <= -GROUND_NORMAL_MIN_Y {
        ContactFlag::Above
    } else {
        ContactFlag::Sides
    }
}

impl KinematicBody for CapsuleBody {
    fn move_by(&mut self, translation: Vec3) -> ContactFlags {
        let capsule = Capsule::new_y(self.spec.half_height, self.spec.radius);
        let mut remaining = translation;
        let mut flags = ContactFlags::default();

        for _ in 0..MAX_SLIDE_ITERATIONS {
            if remaining.norm_squared() <= MIN_MOVE_SQ {
                break;
            }
            let len = remaining.norm();
            let dir = remaining / len;

            match narrow_phase::earliest_hit(&self.iso(), &capsule, remaining, 1.0, &self.statics)
            {
                None => {
                    // Free path: consume the whole translation.
                    self.center += remaining;
                    break;
                }
                Some(hit) => {
                    let travel = (len * hit.fraction).max(0.0);
                    self.center += dir * (travel - SKIN).max(0.0);
                    flags.add(contact_side(hit.normal));

                    // Slide the leftover along the contact plane.
                    let n_len_sq = hit.normal.norm_squared();
                    if n_len_sq <= MIN_MOVE_SQ {
                        break;
                    }
                    let n = hit.normal / n_len_sq.sqrt();
                    let leftover = dir * (len - travel);
                    remaining = leftover - n * leftover.dot(&n);
                }
            }
        }

        flags
    }

    fn probe_ground(&self, origin: Vec3, radius: f32, max_dist: f32) -> Option<Vec3> {
        if max_dist <= 0.0 || radius <= 0.0 {
            return None;
        }
        let ball = Ball::new(radius);
        let iso = Iso::translation(origin.x, origin.y, origin.z);
        let vel = Vec3::new(0.0, -max_dist, 0.0);

        narrow_phase::earliest_hit(&iso, &ball, vel, 1.0, &self.statics).map(|hit| {
            let n_len_sq = hit.normal.norm_squared();
            if n_len_sq > MIN_MOVE_SQ {
                hit.normal / n_len_sq.sqrt()
            } else {
                up()
            }
        })
    }

    fn center(&self) -> Vec3 {
        self.center
    }

    fn radius(&self) -> f32 {
        self.spec.radius
    }

    fn height(&self) -> f32 {
        self.spec.height()
    }
}
