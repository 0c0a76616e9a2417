//! Constants used throughout the application.

/// Interval between pointer ticks in milliseconds
pub const TICK_INTERVAL_MS: u64 = 16;

/// Default smoothing buffer size (number of recent landmark samples)
pub const DEFAULT_BUFFER_SIZE: usize = 6;

/// Default directional speed scalar (equal in all four directions)
pub const DEFAULT_SPEED: f64 = 1.0;

/// Window after a physical mouse movement during which synthetic
/// cursor updates are suppressed, in milliseconds
pub const PHYSICAL_SUPPRESSION_MS: u64 = 500;

/// Minimum interval between repeated firings of the same gesture,
/// in milliseconds
pub const GESTURE_REPEAT_DELAY_MS: u64 = 500;

/// Minimum interval between scroll emissions in milliseconds
pub const SCROLL_RATE_LIMIT_MS: u64 = 250;

/// Radius around the scroll center inside which no direction is
/// decided, in pixels
pub const SCROLL_DEAD_ZONE_PX: f64 = 100.0;

/// Sigmoid acceleration: offset subtracted from the velocity magnitude
pub const SIGMOID_SHIFT: f64 = 5.0;

/// Sigmoid acceleration: steepness of the transition
pub const SIGMOID_SLOPE: f64 = 0.3;

/// Sigmoid acceleration: saturation gain for large movements
pub const SIGMOID_MULTIPLY: f64 = 1.2;
