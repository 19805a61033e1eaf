/*!
Movement state and per-frame runtime data.
*/

use crate::config::LocomotionConfig;
use crate::math::Vec3;

/// Discrete movement classification for animation/audio/UI consumers.
///
/// Derived, never stored authoritatively anywhere else: the controller
/// recomputes it from scratch every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementState {
    Idle,
    Walking,
    Running,
    Jumping,
    Falling,
}

/// Active grounded speed tier.
///
/// Tracked as an explicit tag next to the numeric speed so classification
/// never reconstructs the tier by comparing floats for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedTier {
    Walk,
    Run,
}

/// Mutable per-frame state.
///
/// Owned and mutated exclusively by the controller's own tick; everything
/// outside sees it read-only. Lives for the controller's whole lifetime.
#[derive(Clone, Copy, Debug)]
pub struct RuntimeState {
    /// Current grounded move speed (m/s), always within [0, run_speed].
    pub speed: f32,
    /// Discrete tier matching how `speed` was last assigned.
    pub tier: SpeedTier,
    /// Did the last move report support below the capsule?
    pub grounded: bool,
    /// Velocity applied on the last move (m/s).
    pub velocity: Vec3,
    /// Inside an airborne episode?
    pub falling: bool,
    /// Capsule center height where the current airborne episode began.
    /// Written exactly once per episode, untouched while grounded.
    pub fall_start_height: f32,
}

impl RuntimeState {
    /// Controller-start state: walking tier, grounded, at rest.
    pub fn initial(config: &LocomotionConfig) -> Self {
        Self {
            speed: config.walk_speed,
            tier: SpeedTier::Walk,
            grounded: true,
            velocity: Vec3::zeros(),
            falling: false,
            fall_start_height: 0.0,
        }
    }
}

/// Snapshot of one completed airborne episode, emitted on touchdown.
///
/// This is the data a fall-damage or landing-effects consumer needs; the
/// controller itself never computes damage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landing {
    /// Capsule center height at the grounded-to-airborne transition (meters).
    pub fall_start_height: f32,
    /// Capsule center height at touchdown (meters).
    pub landing_height: f32,
}

impl Landing {
    /// Height lost over the episode (meters). An episode that ends higher
    /// than it started (jumping onto a ledge) counts as zero.
    pub fn fall_distance(&self) -> f32 {
        (self.fall_start_height - self.landing_height).max(0.0)
    }
}

/// Result of a single controller tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSummary {
    /// The movement state classified this tick.
    pub state: MovementState,
    /// Present on the tick the body touched down after an airborne episode.
    pub landing: Option<Landing>,
}
