/*!
Sweep tolerances.

Centralized parameters for the sweep-and-slide body. Distances are in
meters. Favor practical world-space tolerances over machine epsilon for
robust contact behavior.
*/

/// Separation kept from surfaces on contact (meters).
/// Too large creates visible gaps; too small risks jitter on contact.
pub const SKIN: f32 = 0.02;

/// Maximum number of slide iterations per move.
/// Higher values help in tight corners at the cost of more queries.
pub const MAX_SLIDE_ITERATIONS: u32 = 4;

/// Minimum squared translation considered meaningful (m^2).
/// Movements below this are treated as zero to avoid tiny oscillations.
pub const MIN_MOVE_SQ: f32 = 1.0e-8;

/// Minimum upward normal component for a contact to count as support below
/// the body (cosine of the steepest surface still reported as ground).
pub const GROUND_NORMAL_MIN_Y: f32 = 0.5;
