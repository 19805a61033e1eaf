/*!
First-person capsule locomotion solver.

Converts per-frame player input and world-collision feedback into a
movement vector for a kinematic capsule body, and classifies the motion
into a discrete [`MovementState`] for animation/audio/UI consumers.

The controller computes intent only. The actual displacement is delegated
to a [`KinematicBody`] implementation: an engine character controller in
production, the parry-backed [`collision::CapsuleBody`] shipped here when
no engine is around, or a scripted fake in tests. The camera/look
collaborator and the input source are injected the same way, so a tick is
fully deterministic given its inputs.

Per-tick order: look rotation → input sampling → motion solve (slope
projection, jump arbitration, gravity) → collision move → state
classification.
*/

pub mod body;
pub mod classify;
pub mod collision;
pub mod config;
pub mod controller;
pub mod flags;
pub mod input;
pub mod jump;
pub mod look;
pub mod math;
pub mod solver;
pub mod state;

pub use body::KinematicBody;
pub use collision::{CapsuleBody, CapsuleSpec, StaticShape};
pub use config::LocomotionConfig;
pub use controller::LocomotionController;
pub use flags::{ContactFlag, ContactFlags};
pub use input::{Axis, Button, InputSource, InputState};
pub use look::LookDriver;
pub use math::{Quat, Transform, Vec2, Vec3};
pub use state::{Landing, MovementState, RuntimeState, SpeedTier, TickSummary};
