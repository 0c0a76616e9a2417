//! Shared 2D point, bounds, and coordinate transformation math.
//!
//! All pointer math happens in floating point; positions are rounded
//! to integer pixels only when they are emitted to the actuator.

/// A 2D point in floating-point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (screen convention: grows downward)
    pub y: f64,
}

impl PointF {
    /// Create a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round to the nearest integer pixel
    #[must_use]
    pub fn to_screen(self) -> ScreenPoint {
        ScreenPoint {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }
}

impl std::ops::Add for PointF {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for PointF {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Absolute on-screen position in integer pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    /// Horizontal pixel coordinate
    pub x: i32,
    /// Vertical pixel coordinate
    pub y: i32,
}

impl ScreenPoint {
    /// Create a new screen point
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to floating-point coordinates
    #[must_use]
    pub fn to_point(self) -> PointF {
        PointF::new(f64::from(self.x), f64::from(self.y))
    }
}

/// A facial reference point normalized to `[0, 1] x [0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint {
    /// Horizontal coordinate in `[0, 1]`
    pub x: f64,
    /// Vertical coordinate in `[0, 1]`
    pub y: f64,
}

impl NormalizedPoint {
    /// Create a new normalized point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Project onto absolute screen coordinates.
    ///
    /// The horizontal axis is flipped: the camera feed is not mirrored,
    /// so a head movement to the user's left must move the cursor left.
    #[must_use]
    pub fn project(self, bounds: &ScreenBounds) -> PointF {
        let width = f64::from(bounds.width);
        let height = f64::from(bounds.height);
        PointF::new(
            width - self.x * width + f64::from(bounds.left),
            self.y * height + f64::from(bounds.top),
        )
    }
}

/// Geometry of the active display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    /// Left edge in pixels
    pub left: i32,
    /// Top edge in pixels
    pub top: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl ScreenBounds {
    /// Create new screen bounds
    #[must_use]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Center of the display
    #[must_use]
    pub fn center(&self) -> PointF {
        PointF::new(
            f64::from(self.left) + f64::from(self.width) / 2.0,
            f64::from(self.top) + f64::from(self.height) / 2.0,
        )
    }

    /// Clamp a point so it stays on this display
    #[must_use]
    pub fn clamp(&self, p: PointF) -> PointF {
        PointF::new(
            p.x.clamp(f64::from(self.left), f64::from(self.left + self.width)),
            p.y.clamp(f64::from(self.top), f64::from(self.top + self.height)),
        )
    }
}
