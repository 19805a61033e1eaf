/*!
Controller tuning values.

One immutable struct built by the embedder and handed to the controller at
construction. Values are expressed in meters, seconds and frames.
`validate()` runs at construction so a bad configuration fails before the
first tick instead of degrading silently mid-game.
*/

/// Tuning for the locomotion controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocomotionConfig {
    /// Grounded speed while the Run control is not held (m/s).
    pub walk_speed: f32,

    /// Grounded speed while the Run control is held (m/s).
    /// Also the upper clamp for `set_speed`.
    pub run_speed: f32,

    /// Scale applied to backward (negative vertical-axis) input, 0..=1.
    pub move_backward_factor: f32,

    /// Scale applied to sideways (horizontal-axis) input, 0..=1.
    pub move_side_factor: f32,

    /// Constant downward velocity component (m/s) applied while grounded so
    /// the capsule keeps contact over slopes and small steps instead of
    /// repeatedly losing and regaining it.
    pub anti_bump_factor: f32,

    /// Gravity magnitude (m/s^2, positive value, integrated downward every
    /// tick without exception).
    pub gravity: f32,

    /// Vertical launch speed of a jump (m/s).
    pub jump_vertical_speed: f32,

    /// Extra speed added along the planar move direction on a jump (m/s).
    pub jump_horizontal_speed: f32,

    /// Consecutive grounded frames with the jump control released required
    /// before another jump is honored.
    pub frames_grounded_between_jumps: u32,

    /// Fall distance at or beyond which a landing is reported as hard
    /// (meters). The controller only logs the crossing; damage is the
    /// embedder's concern.
    pub falling_damage_threshold: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 8.0,
            move_backward_factor: 0.8,
            move_side_factor: 0.8,
            anti_bump_factor: 0.75,
            gravity: 20.0,
            jump_vertical_speed: 7.0,
            jump_horizontal_speed: 2.0,
            frames_grounded_between_jumps: 1,
            falling_damage_threshold: 10.0,
        }
    }
}

impl LocomotionConfig {
    /// Check the configuration invariants.
    ///
    /// Checks:
    /// - every value is finite
    /// - speeds and magnitudes are non-negative, walk_speed <= run_speed
    /// - input damping factors lie in 0..=1
    pub fn validate(&self) -> Result<(), &'static str> {
        let values = [
            self.walk_speed,
            self.run_speed,
            self.move_backward_factor,
            self.move_side_factor,
            self.anti_bump_factor,
            self.gravity,
            self.jump_vertical_speed,
            self.jump_horizontal_speed,
            self.falling_damage_threshold,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err("LocomotionConfig contains a non-finite value");
        }
        if self.walk_speed < 0.0 || self.run_speed < self.walk_speed {
            return Err("LocomotionConfig speeds must satisfy 0 <= walk_speed <= run_speed");
        }
        if !(0.0..=1.0).contains(&self.move_backward_factor)
            || !(0.0..=1.0).contains(&self.move_side_factor)
        {
            return Err("LocomotionConfig damping factors must lie in 0..=1");
        }
        if self.anti_bump_factor < 0.0
            || self.gravity < 0.0
            || self.jump_vertical_speed < 0.0
            || self.jump_horizontal_speed < 0.0
            || self.falling_damage_threshold < 0.0
        {
            return Err("LocomotionConfig magnitudes must be non-negative");
        }
        Ok(())
    }
}
