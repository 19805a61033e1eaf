/*!
Movement-state classification.
*/

use crate::state::{MovementState, SpeedTier};

/// Derive the discrete movement state for this tick.
///
/// Pure function of the post-move grounded flag, the vertical velocity, the
/// active speed tier and the damped input magnitude. The result is
/// recomputed every tick and never carried over:
///
/// - airborne: `Jumping` iff vertical velocity is strictly positive,
///   otherwise `Falling`
/// - grounded with zero input: `Idle`
/// - grounded with input: `Running`/`Walking` from the tier
pub fn classify(
    grounded: bool,
    vertical_velocity: f32,
    tier: SpeedTier,
    input_norm_sq: f32,
) -> MovementState {
    if !grounded {
        return if vertical_velocity > 0.0 {
            MovementState::Jumping
        } else {
            MovementState::Falling
        };
    }

    if input_norm_sq == 0.0 {
        return MovementState::Idle;
    }

    match tier {
        SpeedTier::Run => MovementState::Running,
        SpeedTier::Walk => MovementState::Walking,
    }
}
