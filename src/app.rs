//! Main application module wiring the pipeline together.
//!
//! Single-threaded and event driven: frames and pointer events come
//! from the injected [`FrameSource`], all pointer output is driven by
//! the fixed-interval tick, and every emission goes through the
//! injected [`Actuator`]. The app is the single owner of all
//! components; there is no shared global state.

use crate::actuator::{Actuator, MouseButton};
use crate::config::Config;
use crate::error::Result;
use crate::frame_source::{FaceFrame, FrameSource, InputEvent};
use crate::gestures::{GestureDetector, GestureHandler, MacroAction};
use crate::mouse_controller::{ControllerState, MouseController};
use crate::scroll_mode::ScrollModeController;
use crate::velocity::PointerVelocityShaper;
use log::{info, warn};
use std::time::{Duration, Instant};

/// Hands-free pointer control application
pub struct FacePointerApp<S, A> {
    source: S,
    actuator: A,
    controller: MouseController,
    detector: GestureDetector,
    handler: GestureHandler,
    scroll_mode: ScrollModeController,
    landmark_index: usize,
    tick_interval: Duration,
    left_held: bool,
    running: bool,
}

impl<S: FrameSource, A: Actuator> FacePointerApp<S, A> {
    /// Build the pipeline from a validated configuration
    pub fn new(config: &Config, source: S, actuator: A) -> Result<Self> {
        config.validate()?;
        info!("Initializing facepointer pipeline");

        let shaper = PointerVelocityShaper::new(config.speed_settings(), config.mouse.acceleration);
        let mut controller = MouseController::new(
            config.mouse.buffer_size,
            shaper,
            config.suppression_window(),
        );
        let mut actuator = actuator;
        if let Some(center) = controller.init(config.screen.bounds()) {
            actuator.set_cursor_position(center)?;
        }

        Ok(Self {
            source,
            actuator,
            controller,
            detector: GestureDetector::new(config.gesture_confidence()),
            handler: GestureHandler::new(config.gesture_bindings(), config.repeat_delay()),
            scroll_mode: ScrollModeController::new(
                config.scroll_rate_limit(),
                config.scroll.dead_zone_px,
            ),
            landmark_index: config.mouse.landmark_index,
            tick_interval: config.tick_interval(),
            left_held: false,
            running: true,
        })
    }

    /// Run until the frame source is exhausted or `stop()` is called
    /// from a dispatched macro.
    pub fn run(&mut self) -> Result<()> {
        info!("Entering main loop");
        let mut last_tick = Instant::now();
        while self.running {
            match self.source.next_event()? {
                InputEvent::Frame(frame) => self.process_frame(&frame)?,
                InputEvent::PointerMoved {
                    position,
                    synthesized,
                } => {
                    // Only real devices yield control; our own emissions
                    // echoing back must not suppress us.
                    if !synthesized {
                        self.controller.on_physical_move(position, Instant::now());
                    }
                }
                InputEvent::End => break,
            }

            let now = Instant::now();
            if now.duration_since(last_tick) >= self.tick_interval {
                last_tick = now;
                self.tick(now)?;
            }
        }
        self.stop();
        info!("Application shutting down");
        Ok(())
    }

    /// Process one landmark-source frame: track the designated
    /// landmark, recognize gestures, and dispatch their macros.
    pub fn process_frame(&mut self, frame: &FaceFrame) -> Result<()> {
        if let Some(&landmark) = frame.landmarks.get(self.landmark_index) {
            self.controller.on_landmark(landmark);
        }

        let gestures = self.detector.detect(&frame.expressions);
        if gestures.is_empty() {
            return Ok(());
        }
        let macros = self.handler.handle(&gestures, Instant::now());
        for action in macros {
            self.execute_macro(action)?;
        }
        Ok(())
    }

    /// Advance one pointer tick, emitting either a cursor move or, in
    /// scroll mode, a scroll.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        let Some(position) = self.controller.tick(now) else {
            return Ok(());
        };
        if self.scroll_mode.is_active() {
            if let Some(request) = self.scroll_mode.scroll(position, now) {
                self.actuator.scroll(request.target, request.direction)?;
            }
        } else {
            self.actuator.set_cursor_position(position)?;
        }
        Ok(())
    }

    fn execute_macro(&mut self, action: MacroAction) -> Result<()> {
        // Every macro acts at the current pointer position
        let Some(position) = self.controller.position() else {
            return Ok(());
        };
        match action {
            MacroAction::ClickLeft => self.actuator.click(position, MouseButton::Left)?,
            MacroAction::ClickLeftDouble => {
                self.actuator.click(position, MouseButton::Left)?;
                self.actuator.click(position, MouseButton::Left)?;
            }
            MacroAction::ClickRight => self.actuator.click(position, MouseButton::Right)?,
            MacroAction::LongClickLeft => {
                if self.left_held {
                    self.actuator.release(position, MouseButton::Left)?;
                } else {
                    self.actuator.press(position, MouseButton::Left)?;
                }
                self.left_held = !self.left_held;
            }
            MacroAction::ResetCursor => {
                if let Some(center) = self.controller.reset_cursor() {
                    self.actuator.set_cursor_position(center)?;
                }
            }
            MacroAction::ToggleScrollMode => self.scroll_mode.toggle(position),
            MacroAction::ToggleCursorControl => self.controller.toggle_paused(),
        }
        Ok(())
    }

    /// Stop the pipeline: no tick runs and nothing is emitted after
    /// this returns. A held long-click is released first.
    pub fn stop(&mut self) {
        if self.controller.state() == ControllerState::Stopped {
            return;
        }
        self.running = false;
        if self.left_held {
            if let Some(position) = self.controller.position() {
                if let Err(e) = self.actuator.release(position, MouseButton::Left) {
                    warn!("Failed to release held button on stop: {e}");
                }
            }
            self.left_held = false;
        }
        self.controller.stop();
    }

    /// Whether scroll mode is currently active
    #[must_use]
    pub fn scroll_mode_active(&self) -> bool {
        self.scroll_mode.is_active()
    }

    /// Current pointer position
    #[must_use]
    pub fn pointer_position(&self) -> Option<crate::geometry::ScreenPoint> {
        self.controller.position()
    }

    /// Access the actuator (mainly for inspection in tests)
    #[must_use]
    pub fn actuator(&self) -> &A {
        &self.actuator
    }
}
