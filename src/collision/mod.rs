/*!
Reference implementation of the collision-sweep collaborator.

A capsule resolved against a small set of static shapes with parry shape
casts. The core controller only ever sees it through the
[`crate::body::KinematicBody`] trait; in production an engine character
controller takes its place. The code is split for clarity:

- types:        shape and sweep data types
- settings:     sweep tolerances
- narrow_phase: thin wrappers over parry time-of-impact queries
- capsule:      the sweep-and-slide body itself
*/

pub mod capsule;
pub mod narrow_phase;
pub mod settings;
pub mod types;

pub use capsule::CapsuleBody;
pub use types::{CapsuleSpec, StaticShape, SweepHit};
