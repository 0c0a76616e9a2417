//! Scroll mode: quantizing head-driven pointer motion into scroll
//! directions.
//!
//! While active, the pointer position is interpreted relative to a
//! center captured at activation time. Movement beyond a dead zone is
//! classified into one of four directions by its angle; ambiguous
//! angles exactly on a diagonal are left unclassified so they never
//! scroll.

use crate::actuator::ScrollDirection;
use crate::geometry::ScreenPoint;
use log::{debug, info};
use std::time::{Duration, Instant};

/// A scroll to perform, targeted at the captured center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Point the scroll is delivered at
    pub target: ScreenPoint,
    /// Quantized direction
    pub direction: ScrollDirection,
}

/// Toggled overlay state that turns pointer positions into scrolls
pub struct ScrollModeController {
    center: Option<ScreenPoint>,
    last_scroll: Option<Instant>,
    rate_limit: Duration,
    dead_zone: f64,
}

impl ScrollModeController {
    /// Create a new controller with the given rate limit and dead-zone
    /// radius in pixels
    #[must_use]
    pub const fn new(rate_limit: Duration, dead_zone: f64) -> Self {
        Self {
            center: None,
            last_scroll: None,
            rate_limit,
            dead_zone,
        }
    }

    /// Flip scroll mode. Activating captures `position` as the center;
    /// deactivating clears the center and the rate-limit timestamp.
    pub fn toggle(&mut self, position: ScreenPoint) {
        if self.center.is_some() {
            info!("Scroll mode deactivated");
            self.center = None;
            self.last_scroll = None;
        } else {
            info!("Scroll mode activated at ({}, {})", position.x, position.y);
            self.center = Some(position);
        }
    }

    /// Whether scroll mode is currently active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.center.is_some()
    }

    /// Decide and record a scroll for the given pointer position.
    ///
    /// Returns `None` when inactive, rate-limited, inside the dead
    /// zone, or exactly on a diagonal.
    pub fn scroll(&mut self, position: ScreenPoint, now: Instant) -> Option<ScrollRequest> {
        let center = self.center?;
        if let Some(last) = self.last_scroll {
            if now.duration_since(last) < self.rate_limit {
                return None;
            }
        }
        let direction = self.direction_for(position)?;
        debug!("Scroll {} from ({}, {})", direction, position.x, position.y);
        self.last_scroll = Some(now);
        Some(ScrollRequest {
            target: center,
            direction,
        })
    }

    /// Classify a pointer position into a scroll direction relative to
    /// the captured center.
    ///
    /// The y axis is flipped before the angle is taken (screen y grows
    /// downward, angle math assumes it grows upward). Positions within
    /// the dead-zone radius or exactly on a 45-degree diagonal return
    /// `None`.
    #[must_use]
    pub fn direction_for(&self, position: ScreenPoint) -> Option<ScrollDirection> {
        let center = self.center?;
        let dx = f64::from(position.x - center.x);
        let dy = -f64::from(position.y - center.y);
        if dx.hypot(dy) <= self.dead_zone {
            return None;
        }

        // A position exactly on a 45-degree diagonal is ambiguous and
        // must not scroll. Checked on the pixel offsets because the
        // degree conversion below can land a hair off 45.0.
        if dx.abs() == dy.abs() {
            return None;
        }

        let angle = dy.atan2(dx).to_degrees();
        // Two overlapping 90-degree sector passes: counter-clockwise
        // above the x axis, clockwise at or below it.
        if angle > 0.0 {
            if angle < 45.0 {
                Some(ScrollDirection::Right)
            } else if angle < 135.0 {
                Some(ScrollDirection::Up)
            } else {
                Some(ScrollDirection::Left)
            }
        } else if angle > -45.0 {
            Some(ScrollDirection::Right)
        } else if angle > -135.0 {
            Some(ScrollDirection::Down)
        } else {
            Some(ScrollDirection::Left)
        }
    }
}
