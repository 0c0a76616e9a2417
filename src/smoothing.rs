//! Landmark smoothing over a fixed-capacity ring of recent samples.
//!
//! Raw landmark positions jitter from frame to frame. The buffer keeps
//! the `N` most recent positions and blends them with a Hamming-window
//! kernel whose peak sits at the newest sample, trading a little delay
//! for a stable cursor.

use crate::geometry::PointF;
use std::collections::VecDeque;
use std::f64::consts::PI;

/// Compute normalized Hamming-window weights for a buffer of `size`
/// samples, ordered oldest to newest.
///
/// The window is sized over `2 * size - 1` taps so that its peak falls
/// on the last (newest) sample. Weights are non-negative and sum to 1.
///
/// # Panics
///
/// Panics if `size` is zero.
#[must_use]
pub fn hamming_kernel(size: usize) -> Vec<f64> {
    assert!(size >= 1, "Kernel size must be at least 1");
    let denominator = (2 * size - 1) as f64;
    let raw: Vec<f64> = (0..size)
        .map(|i| 0.46f64.mul_add(-(2.0 * PI * i as f64 / denominator).cos(), 0.54))
        .collect();
    let sum: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / sum).collect()
}

/// Fixed-capacity buffer of recent 2D points with weighted smoothing
pub struct SmoothedPointBuffer {
    capacity: usize,
    points: VecDeque<PointF>,
    kernel: Vec<f64>,
}

impl SmoothedPointBuffer {
    /// Create a buffer holding `capacity` recent points
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity),
            kernel: hamming_kernel(capacity),
        }
    }

    /// Push a new point, evicting the oldest once at capacity.
    ///
    /// A buffer that is not yet full is topped up by repeating `p`,
    /// so the very first sample does not produce a transient jump.
    pub fn add_point(&mut self, p: PointF) {
        if self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
        while self.points.len() < self.capacity {
            self.points.push_back(p);
        }
    }

    /// Weighted moving average of the buffered points.
    ///
    /// Returns `None` until the first point has been added.
    #[must_use]
    pub fn smooth(&self) -> Option<PointF> {
        if self.points.is_empty() {
            return None;
        }
        let mut x = 0.0;
        let mut y = 0.0;
        for (p, w) in self.points.iter().zip(&self.kernel) {
            x += p.x * w;
            y += p.y * w;
        }
        Some(PointF::new(x, y))
    }

    /// Change the target size, clearing buffered points and rebuilding
    /// the kernel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.kernel = hamming_kernel(capacity);
        self.points.clear();
    }

    /// Number of points currently buffered
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point has been added yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Target buffer size
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
