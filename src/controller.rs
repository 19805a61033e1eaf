/*!
The per-frame locomotion controller.

Ties the pieces together in a fixed order, once per tick:

1. look rotation (external collaborator)
2. landing/fall bookkeeping and grounded speed-tier selection
3. input sampling
4. grounded motion solve, with jump arbitration
5. gravity, unconditionally
6. collision move via the body, grounded readback
7. movement-state classification

The controller owns all mutable state; collaborators are passed in at
construction and via `tick`, never discovered ambiently.
*/

use log::{debug, trace};

use crate::body::KinematicBody;
use crate::classify::classify;
use crate::config::LocomotionConfig;
use crate::flags::ContactFlag;
use crate::input::{Button, InputSource, sample_move_input};
use crate::jump::JumpArbiter;
use crate::look::LookDriver;
use crate::math::{Quat, Vec3, up};
use crate::solver;
use crate::state::{Landing, MovementState, RuntimeState, SpeedTier, TickSummary};

/// First-person capsule locomotion controller.
///
/// Generic over the collision body and the look driver so tests can inject
/// scripted fakes and embedders can plug in their engine's primitives.
pub struct LocomotionController<B, L> {
    config: LocomotionConfig,
    body: B,
    look: L,
    rotation: Quat,
    runtime: RuntimeState,
    jump: JumpArbiter,
    movement_state: MovementState,
    control_enabled: bool,
}

impl<B: KinematicBody, L: LookDriver> LocomotionController<B, L> {
    /// Build a controller from its tuning and collaborators.
    ///
    /// Fails if the configuration violates its invariants; a controller
    /// never starts ticking on a bad config.
    pub fn new(config: LocomotionConfig, look: L, body: B) -> Result<Self, &'static str> {
        config.validate()?;
        Ok(Self {
            rotation: Quat::identity(),
            runtime: RuntimeState::initial(&config),
            jump: JumpArbiter::new(config.frames_grounded_between_jumps),
            movement_state: MovementState::Idle,
            control_enabled: true,
            config,
            body,
            look,
        })
    }

    /// Current grounded move speed (m/s).
    pub fn speed(&self) -> f32 {
        self.runtime.speed
    }

    /// Override the grounded move speed, clamped into `[0, run_speed]`.
    ///
    /// When the clamped value lands exactly on a configured tier speed the
    /// discrete tier follows it; an in-between value changes the numeric
    /// speed only and leaves the tier (and thus the classified state)
    /// unchanged. The next grounded tick reassigns both from the Run
    /// control anyway.
    pub fn set_speed(&mut self, speed: f32) {
        let speed = speed.clamp(0.0, self.config.run_speed);
        self.runtime.speed = speed;
        if speed == self.config.run_speed {
            self.runtime.tier = SpeedTier::Run;
        } else if speed == self.config.walk_speed {
            self.runtime.tier = SpeedTier::Walk;
        }
    }

    /// The movement state classified on the most recent tick.
    pub fn movement_state(&self) -> MovementState {
        self.movement_state
    }

    /// Enable or disable player control. While disabled, `tick` is a no-op
    /// and the character is frozen in place.
    pub fn set_player_control_enabled(&mut self, enabled: bool) {
        self.control_enabled = enabled;
    }

    pub fn player_control_enabled(&self) -> bool {
        self.control_enabled
    }

    /// Read-only view of the per-frame runtime state.
    pub fn runtime(&self) -> &RuntimeState {
        &self.runtime
    }

    /// Did the last move report support below the capsule?
    pub fn is_grounded(&self) -> bool {
        self.runtime.grounded
    }

    /// Velocity applied on the last move (m/s).
    pub fn velocity(&self) -> Vec3 {
        self.runtime.velocity
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    /// Mutable access to the body, for embedders that reposition or
    /// reconfigure it between ticks.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// Advance the controller by one frame.
    ///
    /// `dt` below zero is clamped to zero. Returns the classified movement
    /// state and, on touchdown ticks, the completed airborne episode.
    pub fn tick<I: InputSource + ?Sized>(&mut self, dt: f32, input: &I) -> TickSummary {
        if !self.control_enabled {
            return TickSummary {
                state: self.movement_state,
                landing: None,
            };
        }
        let dt = dt.max(0.0);

        self.rotation = self.look.apply_look_rotation();

        // Landing/fall bookkeeping and speed-tier selection, driven by the
        // grounded flag of the previous move.
        let mut landing = None;
        if self.runtime.grounded {
            if self.runtime.falling {
                self.runtime.falling = false;
                let touchdown = Landing {
                    fall_start_height: self.runtime.fall_start_height,
                    landing_height: self.body.center().y,
                };
                if touchdown.fall_distance() >= self.config.falling_damage_threshold {
                    debug!("hard landing: fell {:.2} m", touchdown.fall_distance());
                }
                landing = Some(touchdown);
            }
            if input.held(Button::Run) {
                self.runtime.tier = SpeedTier::Run;
                self.runtime.speed = self.config.run_speed;
            } else {
                self.runtime.tier = SpeedTier::Walk;
                self.runtime.speed = self.config.walk_speed;
            }
        } else if !self.runtime.falling {
            self.runtime.falling = true;
            self.runtime.fall_start_height = self.body.center().y;
        }

        let move_input = sample_move_input(input, &self.config);

        if self.runtime.grounded {
            let normal = self
                .body
                .probe_ground(
                    self.body.center(),
                    self.body.radius(),
                    self.body.height() * 0.5,
                )
                .unwrap_or_else(up);
            let direction = solver::ground_move_direction(
                &self.rotation,
                move_input,
                normal,
                self.config.anti_bump_factor,
            );
            self.runtime.velocity = solver::ground_velocity(direction, self.runtime.speed);

            if !input.held(Button::Jump) {
                self.jump.tick_grounded();
            } else if self
                .jump
                .try_trigger(self.config.frames_grounded_between_jumps)
            {
                self.runtime.velocity.y = self.config.jump_vertical_speed;
                self.runtime.velocity.x += direction.x * self.config.jump_horizontal_speed;
                self.runtime.velocity.z += direction.z * self.config.jump_horizontal_speed;
                trace!("jump triggered");
            }
        }

        solver::integrate_gravity(&mut self.runtime.velocity, self.config.gravity, dt);

        let flags = self.body.move_by(self.runtime.velocity * dt);
        self.runtime.grounded = flags.has(ContactFlag::Below);

        let next = classify(
            self.runtime.grounded,
            self.runtime.velocity.y,
            self.runtime.tier,
            move_input.norm_squared(),
        );
        if next != self.movement_state {
            debug!("movement state {:?} -> {:?}", self.movement_state, next);
        }
        self.movement_state = next;

        TickSummary {
            state: next,
            landing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::ContactFlags;
    use crate::input::InputState;

    /// Scripted body: applies translations verbatim and reports whatever
    /// grounded/normal script the test sets between ticks.
    struct TestBody {
        center: Vec3,
        grounded: bool,
        normal: Option<Vec3>,
        last_move: Vec3,
    }

    impl TestBody {
        fn grounded_at(center: Vec3) -> Self {
            Self {
                center,
                grounded: true,
                normal: None,
                last_move: Vec3::zeros(),
            }
        }
    }

    impl KinematicBody for TestBody {
        fn move_by(&mut self, translation: Vec3) -> ContactFlags {
            self.last_move = translation;
            self.center += translation;
            let mut flags = ContactFlags::default();
            if self.grounded {
                flags.add(ContactFlag::Below);
            }
            flags
        }

        fn probe_ground(&self, _origin: Vec3, _radius: f32, _max_dist: f32) -> Option<Vec3> {
            self.normal
        }

        fn center(&self) -> Vec3 {
            self.center
        }

        fn radius(&self) -> f32 {
            0.3
        }

        fn height(&self) -> f32 {
            1.8
        }
    }

    struct FixedLook;

    impl LookDriver for FixedLook {
        fn apply_look_rotation(&mut self) -> Quat {
            Quat::identity()
        }
    }

    fn controller() -> LocomotionController<TestBody, FixedLook> {
        LocomotionController::new(
            LocomotionConfig::default(),
            FixedLook,
            TestBody::grounded_at(Vec3::new(0.0, 1.0, 0.0)),
        )
        .unwrap()
    }

    const DT: f32 = 0.1;

    #[test]
    fn construction_rejects_invalid_config() {
        let config = LocomotionConfig {
            gravity: f32::INFINITY,
            ..LocomotionConfig::default()
        };
        let result = LocomotionController::new(
            config,
            FixedLook,
            TestBody::grounded_at(Vec3::zeros()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn set_speed_clamps_into_configured_range() {
        let mut c = controller();
        c.set_speed(50.0);
        assert_eq!(c.speed(), 8.0);
        c.set_speed(-3.0);
        assert_eq!(c.speed(), 0.0);
        c.set_speed(6.5);
        assert_eq!(c.speed(), 6.5);
    }

    #[test]
    fn run_tick_matches_the_reference_numbers() {
        // Grounded, Run held, full forward input, no jump, flat ground,
        // dt = 0.1: speed snaps to run speed, planar velocity magnitude is
        // the run speed, and the vertical velocity is the anti-bump bias
        // plus one gravity step (-0.75 - 2.0).
        let mut c = controller();
        let summary = c.tick(
            DT,
            &InputState {
                vertical: 1.0,
                run_held: true,
                ..InputState::default()
            },
        );

        assert_eq!(c.speed(), 8.0);
        let velocity = c.velocity();
        let planar = (velocity.x * velocity.x + velocity.z * velocity.z).sqrt();
        assert!((planar - 8.0).abs() < 1.0e-4);
        assert!((velocity.y + 2.75).abs() < 1.0e-6);
        assert_eq!(summary.state, MovementState::Running);
    }

    #[test]
    fn walking_forward_classifies_as_walking() {
        let mut c = controller();
        let summary = c.tick(
            DT,
            &InputState {
                vertical: 1.0,
                ..InputState::default()
            },
        );
        assert_eq!(c.speed(), 5.0);
        assert_eq!(summary.state, MovementState::Walking);
    }

    #[test]
    fn grounded_without_input_is_idle() {
        let mut c = controller();
        let summary = c.tick(DT, &InputState::default());
        assert_eq!(summary.state, MovementState::Idle);
        // Standing still, the body is still pressed down: bias + gravity.
        assert!((c.velocity().y + 2.75).abs() < 1.0e-6);
    }

    #[test]
    fn slope_normal_reduces_planar_speed() {
        let mut c = controller();
        c.body_mut().normal = Some(Vec3::new(0.0, 2.0, 1.0).normalize());
        c.tick(
            DT,
            &InputState {
                vertical: 1.0,
                run_held: true,
                ..InputState::default()
            },
        );
        let velocity = c.velocity();
        let planar = (velocity.x * velocity.x + velocity.z * velocity.z).sqrt();
        assert!(planar < 8.0 - 1.0e-2);
        assert!(planar > 4.0);
    }

    #[test]
    fn jump_launches_then_is_suppressed_until_the_gate_reopens() {
        let mut c = controller();
        let jump = InputState {
            vertical: 1.0,
            jump_held: true,
            ..InputState::default()
        };

        // Counter starts at the threshold, so the first request is honored:
        // velocity.y = 7 (vertical launch) - 2 (gravity step) = 5.
        c.tick(DT, &jump);
        assert!((c.velocity().y - 5.0).abs() < 1.0e-6);
        assert_eq!(c.jump.frames(), 0);
        // The horizontal boost goes along the move direction.
        assert!((c.velocity().z + 7.0).abs() < 1.0e-4);

        // Still grounded, jump still held, counter 0 < threshold 1: the
        // request is dropped and the tick solves as plain ground movement.
        c.tick(DT, &jump);
        assert!((c.velocity().y + 2.75).abs() < 1.0e-6);
        assert_eq!(c.jump.frames(), 0);

        // One grounded tick with the control released reopens the gate.
        c.tick(
            DT,
            &InputState {
                vertical: 1.0,
                ..InputState::default()
            },
        );
        assert_eq!(c.jump.frames(), 1);
        c.tick(DT, &jump);
        assert!((c.velocity().y - 5.0).abs() < 1.0e-6);
    }

    #[test]
    fn airborne_ticks_integrate_gravity_only_and_classify_by_sign() {
        let mut c = controller();
        c.body_mut().grounded = false;
        c.runtime.grounded = false;
        c.runtime.velocity = Vec3::new(0.0, 3.0, 0.0);
        let start_height = c.body().center().y;

        // +3 -> +1: still ascending.
        let summary = c.tick(DT, &InputState::default());
        assert!((c.velocity().y - 1.0).abs() < 1.0e-6);
        assert_eq!(summary.state, MovementState::Jumping);
        assert!(c.runtime.falling);
        assert_eq!(c.runtime.fall_start_height, start_height);

        // +1 -> -1: over the apex, now falling. The fall start must not be
        // re-recorded mid-episode.
        let summary = c.tick(DT, &InputState::default());
        assert!((c.velocity().y + 1.0).abs() < 1.0e-6);
        assert_eq!(summary.state, MovementState::Falling);
        assert_eq!(c.runtime.fall_start_height, start_height);
    }

    #[test]
    fn touchdown_reports_the_completed_episode() {
        let mut c = controller();
        c.runtime.falling = true;
        c.runtime.fall_start_height = 12.0;
        c.body_mut().center = Vec3::new(0.0, 2.0, 0.0);

        let summary = c.tick(DT, &InputState::default());
        let landing = summary.landing.expect("touchdown tick must report a landing");
        assert_eq!(landing.fall_start_height, 12.0);
        assert!((landing.landing_height - 2.0).abs() < 1.0e-6);
        assert!((landing.fall_distance() - 10.0).abs() < 1.0e-6);
        assert!(!c.runtime.falling);

        // The episode is consumed; the next tick reports nothing.
        let summary = c.tick(DT, &InputState::default());
        assert!(summary.landing.is_none());
    }

    #[test]
    fn disabled_control_freezes_the_character() {
        let mut c = controller();
        c.tick(DT, &InputState::default());
        let before_center = c.body().center();
        let before_velocity = c.velocity();
        let before_state = c.movement_state();

        c.set_player_control_enabled(false);
        let summary = c.tick(
            DT,
            &InputState {
                vertical: 1.0,
                jump_held: true,
                run_held: true,
                ..InputState::default()
            },
        );

        assert_eq!(summary.state, before_state);
        assert!(summary.landing.is_none());
        assert_eq!(c.body().center(), before_center);
        assert_eq!(c.velocity(), before_velocity);
    }

    #[test]
    fn negative_dt_is_clamped_to_zero() {
        let mut c = controller();
        c.body_mut().grounded = false;
        c.runtime.grounded = false;
        c.runtime.velocity = Vec3::new(0.0, 3.0, 0.0);

        c.tick(-5.0, &InputState::default());
        // No gravity step, no displacement.
        assert!((c.velocity().y - 3.0).abs() < 1.0e-6);
        assert_eq!(c.body().last_move, Vec3::zeros());
    }

    #[test]
    fn probe_failure_degrades_to_flat_ground() {
        // normal: None scripts an unreachable probe; movement must behave
        // exactly as on flat ground instead of producing NaNs.
        let mut c = controller();
        c.body_mut().normal = None;
        c.tick(
            DT,
            &InputState {
                vertical: 1.0,
                ..InputState::default()
            },
        );
        let velocity = c.velocity();
        assert!(velocity.x.is_finite() && velocity.y.is_finite() && velocity.z.is_finite());
        assert!((velocity.z + 5.0).abs() < 1.0e-4);
    }
}
