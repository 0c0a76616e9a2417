//! Velocity shaping between consecutive smoothed landmark positions.
//!
//! The cursor is driven by velocity, not absolute head position: the
//! delta between two smoothed points is scaled per direction and
//! optionally pushed through a sigmoid gain, then added to the current
//! cursor position. This decouples the cursor from the user's absolute
//! head position, which may drift relative to the screen.

use crate::constants::{SIGMOID_MULTIPLY, SIGMOID_SHIFT, SIGMOID_SLOPE};
use crate::geometry::PointF;

/// Directional speed scalars, one per screen direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedSettings {
    /// Applied to negative x velocity
    pub left: f64,
    /// Applied to positive x velocity
    pub right: f64,
    /// Applied to negative y velocity
    pub up: f64,
    /// Applied to positive y velocity
    pub down: f64,
}

impl SpeedSettings {
    /// Equal speed in all four directions
    #[must_use]
    pub const fn uniform(speed: f64) -> Self {
        Self {
            left: speed,
            right: speed,
            up: speed,
            down: speed,
        }
    }
}

impl Default for SpeedSettings {
    fn default() -> Self {
        Self::uniform(crate::constants::DEFAULT_SPEED)
    }
}

/// Converts smoothed point pairs into shaped velocity vectors
#[derive(Debug, Clone)]
pub struct PointerVelocityShaper {
    speeds: SpeedSettings,
    acceleration: bool,
}

impl PointerVelocityShaper {
    /// Create a shaper with the given directional speeds
    #[must_use]
    pub const fn new(speeds: SpeedSettings, acceleration: bool) -> Self {
        Self { speeds, acceleration }
    }

    /// Compute the shaped velocity between two smoothed positions.
    ///
    /// Directional scaling is applied first, then the optional sigmoid
    /// gain, so the gain sees the already-scaled component.
    #[must_use]
    pub fn shape(&self, previous: PointF, current: PointF) -> PointF {
        let raw = current - previous;

        let mut x = raw.x
            * if raw.x > 0.0 {
                self.speeds.right
            } else {
                self.speeds.left
            };
        let mut y = raw.y
            * if raw.y > 0.0 {
                self.speeds.down
            } else {
                self.speeds.up
            };

        if self.acceleration {
            x *= sigmoid_gain(x);
            y *= sigmoid_gain(y);
        }

        PointF::new(x, y)
    }

    /// Replace the directional speeds
    pub fn set_speeds(&mut self, speeds: SpeedSettings) {
        self.speeds = speeds;
    }

    /// Enable or disable acceleration shaping
    pub fn set_acceleration(&mut self, enabled: bool) {
        self.acceleration = enabled;
    }
}

impl Default for PointerVelocityShaper {
    fn default() -> Self {
        Self::new(SpeedSettings::default(), false)
    }
}

/// Sigmoid gain for one velocity component.
///
/// Near-linear for small magnitudes, saturating at `SIGMOID_MULTIPLY`
/// for large ones: fine head motion is damped, large motion stays
/// bounded.
#[must_use]
fn sigmoid_gain(v: f64) -> f64 {
    SIGMOID_MULTIPLY / (1.0 + (-SIGMOID_SLOPE * (v.abs() - SIGMOID_SHIFT)).exp())
}
