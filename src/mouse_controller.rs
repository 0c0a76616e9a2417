//! Pointer controller: landmark ingestion, fixed-interval tick, and
//! physical-device yielding.
//!
//! Incoming landmark samples are only projected and stored; all
//! smoothing, velocity shaping and clamping happens on the tick, which
//! is the sole driver of pointer output. A landmark that arrives
//! between ticks is visible on the next tick (last value wins, no
//! queueing).

use crate::geometry::{NormalizedPoint, PointF, ScreenBounds, ScreenPoint};
use crate::smoothing::SmoothedPointBuffer;
use crate::velocity::PointerVelocityShaper;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Lifecycle state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Created but not initialized with screen bounds
    Uninitialized,
    /// Tracking and emitting cursor positions
    Active,
    /// Tracking but not emitting (cursor control disabled)
    Paused,
    /// Stopped for good; no further emission
    Stopped,
}

/// Velocity-based pointer controller
pub struct MouseController {
    state: ControllerState,
    bounds: Option<ScreenBounds>,
    position: Option<PointF>,
    last_landmark: Option<PointF>,
    buffer: SmoothedPointBuffer,
    previous_smoothed: Option<PointF>,
    shaper: PointerVelocityShaper,
    last_physical_move: Option<Instant>,
    suppression_window: Duration,
}

impl MouseController {
    /// Create a new controller.
    ///
    /// # Panics
    ///
    /// Panics if `buffer_size` is zero.
    #[must_use]
    pub fn new(
        buffer_size: usize,
        shaper: PointerVelocityShaper,
        suppression_window: Duration,
    ) -> Self {
        Self {
            state: ControllerState::Uninitialized,
            bounds: None,
            position: None,
            last_landmark: None,
            buffer: SmoothedPointBuffer::new(buffer_size),
            previous_smoothed: None,
            shaper,
            last_physical_move: None,
            suppression_window,
        }
    }

    /// Initialize with the active display's bounds and start tracking.
    ///
    /// If no pointer position exists yet the cursor is reset to the
    /// screen center (a hands-free user may never have touched a
    /// physical device); the centered position is returned so the
    /// caller can emit it.
    pub fn init(&mut self, bounds: ScreenBounds) -> Option<ScreenPoint> {
        info!(
            "Mouse controller init: screen {}x{} at ({}, {})",
            bounds.width, bounds.height, bounds.left, bounds.top
        );
        self.bounds = Some(bounds);
        self.state = ControllerState::Active;
        if self.position.is_none() {
            let center = bounds.center();
            self.position = Some(center);
            return Some(center.to_screen());
        }
        None
    }

    /// Ingest one landmark sample.
    ///
    /// Projects the normalized point onto screen coordinates and stores
    /// it; no further processing happens off the tick. No-op without
    /// bounds or after `stop()`.
    pub fn on_landmark(&mut self, landmark: NormalizedPoint) {
        if self.state == ControllerState::Stopped {
            return;
        }
        let Some(bounds) = self.bounds else {
            return;
        };
        self.last_landmark = Some(landmark.project(&bounds));
    }

    /// Record a physical (non-synthesized) pointer movement.
    ///
    /// A real pointing device takes priority: its position overwrites
    /// ours and synthetic emission is suppressed for the suppression
    /// window.
    pub fn on_physical_move(&mut self, position: ScreenPoint, now: Instant) {
        if self.state == ControllerState::Stopped {
            return;
        }
        debug!("Physical move to ({}, {})", position.x, position.y);
        self.position = Some(position.to_point());
        self.last_physical_move = Some(now);
    }

    /// Advance one tick: smooth, shape, clamp, and return the position
    /// to emit.
    ///
    /// Returns `None` when there is nothing to do (missing landmark,
    /// position or bounds), when paused or stopped, or when emission is
    /// suppressed because a physical device moved recently. Internal
    /// state still advances in the suppressed and paused cases.
    pub fn tick(&mut self, now: Instant) -> Option<ScreenPoint> {
        if !matches!(self.state, ControllerState::Active | ControllerState::Paused) {
            return None;
        }
        let bounds = self.bounds?;
        let landmark = self.last_landmark?;
        let position = self.position?;

        self.buffer.add_point(landmark);
        let smoothed = self.buffer.smooth()?;
        // First tick: seed the previous point to avoid a startup jump
        let previous = self.previous_smoothed.unwrap_or(smoothed);
        let velocity = self.shaper.shape(previous, smoothed);
        self.previous_smoothed = Some(smoothed);

        let new_position = bounds.clamp(position + velocity);
        self.position = Some(new_position);

        if self.state == ControllerState::Paused {
            return None;
        }
        if let Some(last) = self.last_physical_move {
            if now.duration_since(last) < self.suppression_window {
                return None;
            }
        }
        Some(new_position.to_screen())
    }

    /// Move the pointer back to the screen center, returning the
    /// position to emit.
    pub fn reset_cursor(&mut self) -> Option<ScreenPoint> {
        let bounds = self.bounds?;
        let center = bounds.center();
        self.position = Some(center);
        info!("Cursor reset to screen center");
        Some(center.to_screen())
    }

    /// Change the smoothing buffer size, clearing smoothing state.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn set_buffer_size(&mut self, size: usize) {
        self.buffer.resize(size);
        self.previous_smoothed = None;
    }

    /// Pause emission (cursor control disabled)
    pub fn pause(&mut self) {
        if self.state == ControllerState::Active {
            info!("Cursor control paused");
            self.state = ControllerState::Paused;
        }
    }

    /// Resume emission
    pub fn resume(&mut self) {
        if self.state == ControllerState::Paused {
            info!("Cursor control resumed");
            self.state = ControllerState::Active;
        }
    }

    /// Flip between active and paused
    pub fn toggle_paused(&mut self) {
        match self.state {
            ControllerState::Active => self.pause(),
            ControllerState::Paused => self.resume(),
            _ => {}
        }
    }

    /// Stop for good; no further ticks run and nothing more is emitted
    pub fn stop(&mut self) {
        info!("Mouse controller stopped");
        self.state = ControllerState::Stopped;
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> ControllerState {
        self.state
    }

    /// Current pointer position, if one exists
    #[must_use]
    pub fn position(&self) -> Option<ScreenPoint> {
        self.position.map(PointF::to_screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::velocity::SpeedSettings;

    fn controller(buffer_size: usize) -> MouseController {
        MouseController::new(
            buffer_size,
            PointerVelocityShaper::new(SpeedSettings::uniform(1.0), false),
            Duration::from_millis(500),
        )
    }

    fn bounds() -> ScreenBounds {
        ScreenBounds::new(0, 0, 1200, 800)
    }

    #[test]
    fn test_init_centers_cursor() {
        let mut c = controller(1);
        let emitted = c.init(bounds());
        assert_eq!(emitted, Some(ScreenPoint::new(600, 400)));
        assert_eq!(c.state(), ControllerState::Active);
        // A second init keeps the existing position
        assert_eq!(c.init(bounds()), None);
    }

    #[test]
    fn test_tick_without_landmark_is_noop() {
        let mut c = controller(1);
        c.init(bounds());
        assert_eq!(c.tick(Instant::now()), None);
        assert_eq!(c.position(), Some(ScreenPoint::new(600, 400)));
    }

    #[test]
    fn test_first_tick_does_not_jump() {
        let mut c = controller(1);
        c.init(bounds());
        // Landmark far from the cursor; velocity control must not warp
        c.on_landmark(NormalizedPoint::new(0.9, 0.9));
        let emitted = c.tick(Instant::now());
        assert_eq!(emitted, Some(ScreenPoint::new(600, 400)));
    }

    #[test]
    fn test_landmark_delta_moves_cursor() {
        let mut c = controller(1);
        c.init(bounds());
        let now = Instant::now();
        c.on_landmark(NormalizedPoint::new(0.1, 0.2));
        c.tick(now);
        c.on_landmark(NormalizedPoint::new(0.11, 0.21));
        let emitted = c.tick(now).unwrap();
        // Horizontal flip: x decreases by 12; y increases by 8
        assert_eq!(emitted, ScreenPoint::new(588, 408));
    }

    #[test]
    fn test_position_clamped_to_bounds() {
        let mut c = MouseController::new(
            1,
            PointerVelocityShaper::new(SpeedSettings::uniform(100.0), false),
            Duration::from_millis(500),
        );
        c.init(bounds());
        let now = Instant::now();
        c.on_landmark(NormalizedPoint::new(0.5, 0.5));
        c.tick(now);
        c.on_landmark(NormalizedPoint::new(0.0, 1.0));
        let emitted = c.tick(now).unwrap();
        assert_eq!(emitted, ScreenPoint::new(1200, 800));
    }

    #[test]
    fn test_physical_move_suppresses_emission() {
        let mut c = controller(1);
        c.init(bounds());
        let t0 = Instant::now();
        c.on_physical_move(ScreenPoint::new(100, 100), t0);
        c.on_landmark(NormalizedPoint::new(0.5, 0.5));
        c.tick(t0);
        c.on_landmark(NormalizedPoint::new(0.49, 0.5));
        // Inside the suppression window: state advances, nothing emitted
        assert_eq!(c.tick(t0 + Duration::from_millis(100)), None);
        // After the window the controller emits again
        c.on_landmark(NormalizedPoint::new(0.48, 0.5));
        assert!(c.tick(t0 + Duration::from_millis(600)).is_some());
    }

    #[test]
    fn test_physical_move_overwrites_position() {
        let mut c = controller(1);
        c.init(bounds());
        c.on_physical_move(ScreenPoint::new(10, 20), Instant::now());
        assert_eq!(c.position(), Some(ScreenPoint::new(10, 20)));
    }

    #[test]
    fn test_paused_tick_advances_but_does_not_emit() {
        let mut c = controller(1);
        c.init(bounds());
        let now = Instant::now();
        c.on_landmark(NormalizedPoint::new(0.5, 0.5));
        c.tick(now);
        c.pause();
        c.on_landmark(NormalizedPoint::new(0.4, 0.5));
        assert_eq!(c.tick(now), None);
        // Internal position moved while paused
        assert_ne!(c.position(), Some(ScreenPoint::new(600, 400)));
        c.resume();
        assert_eq!(c.state(), ControllerState::Active);
    }

    #[test]
    fn test_stopped_controller_emits_nothing() {
        let mut c = controller(1);
        c.init(bounds());
        c.on_landmark(NormalizedPoint::new(0.5, 0.5));
        c.stop();
        assert_eq!(c.tick(Instant::now()), None);
        assert_eq!(c.state(), ControllerState::Stopped);
    }

    #[test]
    fn test_reset_cursor_recenters() {
        let mut c = controller(1);
        c.init(bounds());
        c.on_physical_move(ScreenPoint::new(5, 5), Instant::now());
        assert_eq!(c.reset_cursor(), Some(ScreenPoint::new(600, 400)));
        assert_eq!(c.position(), Some(ScreenPoint::new(600, 400)));
    }

    #[test]
    fn test_set_buffer_size_reseeds_smoothing() {
        let mut c = controller(4);
        c.init(bounds());
        let now = Instant::now();
        c.on_landmark(NormalizedPoint::new(0.5, 0.5));
        c.tick(now);
        c.set_buffer_size(8);
        // Next tick reseeds the previous smoothed point: no jump
        c.on_landmark(NormalizedPoint::new(0.3, 0.3));
        let emitted = c.tick(now).unwrap();
        assert_eq!(emitted, ScreenPoint::new(600, 400));
    }
}
