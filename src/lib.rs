//! Hands-free pointer control driven by facial landmarks and
//! expressions.
//!
//! This library turns a noisy per-frame stream of facial-landmark and
//! facial-expression estimates into:
//! - smooth, velocity-based cursor movement (Hamming-window smoothing,
//!   directional speed scaling, optional sigmoid acceleration), and
//! - discrete, debounced action triggers (clicks, cursor reset, scroll
//!   mode) recognized from facial gestures.
//!
//! The landmark-producing vision model and the privileged platform
//! input-injection calls live outside this crate: frames arrive through
//! the [`frame_source::FrameSource`] trait and output leaves through
//! the [`actuator::Actuator`] trait.
//!
//! # Examples
//!
//! ## Smoothing and velocity shaping
//!
//! ```
//! use facepointer::geometry::PointF;
//! use facepointer::smoothing::SmoothedPointBuffer;
//! use facepointer::velocity::{PointerVelocityShaper, SpeedSettings};
//!
//! let mut buffer = SmoothedPointBuffer::new(6);
//! buffer.add_point(PointF::new(100.0, 100.0));
//! buffer.add_point(PointF::new(104.0, 98.0));
//! let smoothed = buffer.smooth().unwrap();
//!
//! let shaper = PointerVelocityShaper::new(SpeedSettings::uniform(1.0), true);
//! let velocity = shaper.shape(PointF::new(100.0, 100.0), smoothed);
//! println!("velocity: ({:.2}, {:.2})", velocity.x, velocity.y);
//! ```
//!
//! ## Gesture recognition and dispatch
//!
//! ```
//! use facepointer::gestures::{
//!     FaceExpression, FaceGesture, GestureDetector, GestureHandler, MacroAction,
//! };
//! use std::collections::HashMap;
//! use std::time::{Duration, Instant};
//!
//! let detector = GestureDetector::new(
//!     [(FaceGesture::JawOpen, 0.6)].into_iter().collect(),
//! );
//! let mut handler = GestureHandler::new(
//!     [(FaceGesture::JawOpen, MacroAction::ClickLeft)].into_iter().collect(),
//!     Duration::from_millis(500),
//! );
//!
//! let mut scores = HashMap::new();
//! scores.insert(FaceExpression::JawOpen, 0.8);
//! let gestures = detector.detect(&scores);
//! let macros = handler.handle(&gestures, Instant::now());
//! assert_eq!(macros, vec![MacroAction::ClickLeft]);
//! ```
//!
//! ## Complete pipeline
//!
//! ```no_run
//! use facepointer::actuator::LogActuator;
//! use facepointer::app::FacePointerApp;
//! use facepointer::config::Config;
//! use facepointer::frame_source::JsonLineSource;
//! use std::io::BufReader;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let source = JsonLineSource::new(BufReader::new(std::io::stdin()));
//! let mut app = FacePointerApp::new(&config, source, LogActuator)?;
//! app.run()?;
//! # Ok(())
//! # }
//! ```

/// Actuator interface for cursor movement, clicks, and scrolling
pub mod actuator;

/// Main application module
pub mod app;

/// Configuration management
pub mod config;

/// Constants used throughout the application
pub mod constants;

/// Error types and result handling
pub mod error;

/// Input frame and event stream types
pub mod frame_source;

/// Shared 2D point and bounds math
pub mod geometry;

/// Facial gesture recognition and dispatch
pub mod gestures;

/// Pointer controller with fixed-interval tick
pub mod mouse_controller;

/// Scroll mode direction decisions
pub mod scroll_mode;

/// Landmark smoothing buffer and kernel
pub mod smoothing;

/// Velocity shaping between smoothed positions
pub mod velocity;

pub use error::{Error, Result};
