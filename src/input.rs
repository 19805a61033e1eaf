/*!
Input sampling.

The controller never polls a device or an engine input map itself; the
embedder hands it an [`InputSource`] every tick. That keeps the solver
deterministic under test: inject an [`InputState`] and every downstream
number is reproducible.

Sampling shapes the raw two-axis input in three steps: damp backward
movement, damp strafing, then clamp the magnitude so diagonal input is
never faster than cardinal input.
*/

use crate::config::LocomotionConfig;
use crate::math::Vec2;

/// Planar movement axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Strafe axis: positive is right.
    Horizontal,
    /// Forward axis: positive is forward, negative is backward.
    Vertical,
}

/// Held controls the solver cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Jump,
    Run,
}

/// Source of per-frame control input.
///
/// Implement this over the engine's input layer; the provided
/// [`InputState`] covers tests and snapshot-style embedders.
pub trait InputSource {
    /// Axis value, nominally in [-1, 1]. Out-of-range values are clamped by
    /// the sampler, not rejected.
    fn axis(&self, axis: Axis) -> f32;

    /// Whether a control is currently held.
    fn held(&self, button: Button) -> bool;
}

/// A fixed input snapshot.
///
/// Useful for tests, and for embedders that poll their engine once per
/// frame and hand the result to `tick`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub horizontal: f32,
    pub vertical: f32,
    pub jump_held: bool,
    pub run_held: bool,
}

impl InputSource for InputState {
    fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    fn held(&self, button: Button) -> bool {
        match button {
            Button::Jump => self.jump_held,
            Button::Run => self.run_held,
        }
    }
}

/// Sample and shape the planar movement input for one tick.
///
/// - backward input is scaled by `move_backward_factor`
/// - sideways input is scaled by `move_side_factor`
/// - the result is normalized only when its squared magnitude exceeds 1
///
/// Pure function of the source and the config; no side effects.
pub fn sample_move_input<I: InputSource + ?Sized>(source: &I, config: &LocomotionConfig) -> Vec2 {
    let mut input = Vec2::new(
        source.axis(Axis::Horizontal).clamp(-1.0, 1.0),
        source.axis(Axis::Vertical).clamp(-1.0, 1.0),
    );
    if input.y < 0.0 {
        input.y *= config.move_backward_factor;
    }
    if input.x != 0.0 {
        input.x *= config.move_side_factor;
    }
    if input.norm_squared() > 1.0 {
        input.normalize_mut();
    }
    input
}
