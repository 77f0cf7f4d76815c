use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Camera orientation as two Euler angles, in radians.
///
/// Yaw turns about the world up axis and is left unbounded; pitch tilts the
/// view up and down and is clamped by [`Orientation::clamp_pitch`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    /// Largest pitch magnitude reachable with clamping enabled (straight up/down).
    pub const PITCH_LIMIT: f32 = FRAC_PI_2;

    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    /// Clamp pitch into `[-PITCH_LIMIT, PITCH_LIMIT]`.
    pub fn clamp_pitch(&mut self) {
        self.pitch = self.pitch.clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }
}

impl Default for Orientation {
    /// Slightly tilted down toward the origin.
    fn default() -> Self {
        Self {
            pitch: -std::f32::consts::PI / 8.0,
            yaw: 0.0,
        }
    }
}
