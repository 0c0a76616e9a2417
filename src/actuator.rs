//! Actuator interface for cursor movement, click synthesis and scrolling.
//!
//! The privileged platform calls that actually move the cursor live
//! outside this crate. Components emit fire-and-forget requests through
//! the [`Actuator`] trait; the bundled [`LogActuator`] records them to
//! the log, which is what the binary uses.

use crate::error::Result;
use crate::geometry::ScreenPoint;
use log::info;

/// Mouse button for synthesized press/release events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
}

/// Quantized scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Scroll content up
    Up,
    /// Scroll content down
    Down,
    /// Scroll content left
    Left,
    /// Scroll content right
    Right,
}

impl std::fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// External capability that performs real input injection.
///
/// All operations are fire-and-forget; the pipeline never consumes a
/// return value beyond the error, and errors are surfaced by the
/// surrounding application, not the core.
pub trait Actuator {
    /// Move the cursor to an absolute position
    fn set_cursor_position(&mut self, position: ScreenPoint) -> Result<()>;

    /// Synthesize a button press at a position
    fn press(&mut self, position: ScreenPoint, button: MouseButton) -> Result<()>;

    /// Synthesize a button release at a position
    fn release(&mut self, position: ScreenPoint, button: MouseButton) -> Result<()>;

    /// Scroll at a position in a direction
    fn scroll(&mut self, position: ScreenPoint, direction: ScrollDirection) -> Result<()>;

    /// Synthesize a full click (press then release) at a position
    fn click(&mut self, position: ScreenPoint, button: MouseButton) -> Result<()> {
        self.press(position, button)?;
        self.release(position, button)
    }
}

/// Actuator that logs every request instead of injecting input
#[derive(Debug, Default)]
pub struct LogActuator;

impl Actuator for LogActuator {
    fn set_cursor_position(&mut self, position: ScreenPoint) -> Result<()> {
        info!("cursor -> ({}, {})", position.x, position.y);
        Ok(())
    }

    fn press(&mut self, position: ScreenPoint, button: MouseButton) -> Result<()> {
        info!("press {:?} at ({}, {})", button, position.x, position.y);
        Ok(())
    }

    fn release(&mut self, position: ScreenPoint, button: MouseButton) -> Result<()> {
        info!("release {:?} at ({}, {})", button, position.x, position.y);
        Ok(())
    }

    fn scroll(&mut self, position: ScreenPoint, direction: ScrollDirection) -> Result<()> {
        info!("scroll {} at ({}, {})", direction, position.x, position.y);
        Ok(())
    }
}
