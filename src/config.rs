//! Configuration management for the facepointer application.

use crate::constants::{
    DEFAULT_BUFFER_SIZE, DEFAULT_SPEED, GESTURE_REPEAT_DELAY_MS, PHYSICAL_SUPPRESSION_MS,
    SCROLL_DEAD_ZONE_PX, SCROLL_RATE_LIMIT_MS, TICK_INTERVAL_MS,
};
use crate::error::{Error, Result};
use crate::gestures::{FaceGesture, MacroAction};
use crate::geometry::ScreenBounds;
use crate::velocity::SpeedSettings;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Active display geometry
    pub screen: ScreenConfig,

    /// Pointer control configuration
    pub mouse: MouseConfig,

    /// Gesture recognition and binding configuration
    pub gestures: GestureConfig,

    /// Scroll mode configuration
    pub scroll: ScrollConfig,
}

/// Active display geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Left edge in pixels
    pub left: i32,

    /// Top edge in pixels
    pub top: i32,

    /// Width in pixels
    pub width: i32,

    /// Height in pixels
    pub height: i32,
}

/// Pointer control parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MouseConfig {
    /// Smoothing buffer size (number of recent samples, >= 1)
    pub buffer_size: usize,

    /// Speed scalar for leftward movement
    pub speed_left: f64,

    /// Speed scalar for rightward movement
    pub speed_right: f64,

    /// Speed scalar for upward movement
    pub speed_up: f64,

    /// Speed scalar for downward movement
    pub speed_down: f64,

    /// Enable sigmoid acceleration shaping
    pub acceleration: bool,

    /// Suppression window after a physical mouse movement (ms)
    pub suppression_window_ms: u64,

    /// Pointer tick interval (ms)
    pub tick_interval_ms: u64,

    /// Which landmark set in a frame is the tracked point
    pub landmark_index: usize,
}

/// Gesture recognition parameters.
///
/// Keys are gesture and macro names; unknown keys are ignored with a
/// warning when the typed maps are built, never propagated further.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Minimum interval between repeated firings of one gesture (ms)
    pub repeat_delay_ms: u64,

    /// Per-gesture confidence thresholds on a 0-100 scale
    pub confidence: BTreeMap<String, f64>,

    /// Gesture name to macro name bindings
    pub bindings: BTreeMap<String, String>,
}

/// Scroll mode parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Minimum interval between scroll emissions (ms)
    pub rate_limit_ms: u64,

    /// Dead-zone radius around the scroll center in pixels
    pub dead_zone_px: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            mouse: MouseConfig::default(),
            gestures: GestureConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            left: 0,
            top: 0,
            width: 1920,
            height: 1080,
        }
    }
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            speed_left: DEFAULT_SPEED,
            speed_right: DEFAULT_SPEED,
            speed_up: DEFAULT_SPEED,
            speed_down: DEFAULT_SPEED,
            acceleration: false,
            suppression_window_ms: PHYSICAL_SUPPRESSION_MS,
            tick_interval_ms: TICK_INTERVAL_MS,
            landmark_index: 0,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        let confidence = [
            ("jaw_open", 60.0),
            ("mouth_pucker", 60.0),
            ("brows_down", 60.0),
            ("brow_inner_up", 60.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let bindings = [
            ("jaw_open", "click_left"),
            ("mouth_pucker", "click_right"),
            ("brows_down", "toggle_scroll_mode"),
            ("brow_inner_up", "reset_cursor"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            repeat_delay_ms: GESTURE_REPEAT_DELAY_MS,
            confidence,
            bindings,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            rate_limit_ms: SCROLL_RATE_LIMIT_MS,
            dead_zone_px: SCROLL_DEAD_ZONE_PX,
        }
    }
}

impl ScreenConfig {
    /// Bounds of the active display
    #[must_use]
    pub const fn bounds(&self) -> ScreenBounds {
        ScreenBounds::new(self.left, self.top, self.width, self.height)
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Directional speed scalars for the velocity shaper
    #[must_use]
    pub const fn speed_settings(&self) -> SpeedSettings {
        SpeedSettings {
            left: self.mouse.speed_left,
            right: self.mouse.speed_right,
            up: self.mouse.speed_up,
            down: self.mouse.speed_down,
        }
    }

    /// Build the typed per-gesture confidence map, normalizing the
    /// external 0-100 scale to `[0, 1]` and dropping unknown gesture
    /// names with a warning.
    #[must_use]
    pub fn gesture_confidence(&self) -> HashMap<FaceGesture, f64> {
        let mut map = HashMap::new();
        for (key, value) in &self.gestures.confidence {
            match FaceGesture::from_key(key) {
                Some(gesture) => {
                    map.insert(gesture, value / 100.0);
                }
                None => warn!("Ignoring confidence for unknown gesture '{key}'"),
            }
        }
        map
    }

    /// Build the typed gesture-to-macro binding map, dropping unknown
    /// gesture or macro names with a warning.
    #[must_use]
    pub fn gesture_bindings(&self) -> HashMap<FaceGesture, MacroAction> {
        let mut map = HashMap::new();
        for (gesture_key, macro_key) in &self.gestures.bindings {
            let Some(gesture) = FaceGesture::from_key(gesture_key) else {
                warn!("Ignoring binding for unknown gesture '{gesture_key}'");
                continue;
            };
            let Some(action) = MacroAction::from_key(macro_key) else {
                warn!("Ignoring unknown macro '{macro_key}' bound to '{gesture_key}'");
                continue;
            };
            map.insert(gesture, action);
        }
        map
    }

    /// Pointer tick interval
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.mouse.tick_interval_ms)
    }

    /// Physical-movement suppression window
    #[must_use]
    pub const fn suppression_window(&self) -> Duration {
        Duration::from_millis(self.mouse.suppression_window_ms)
    }

    /// Gesture repeat-suppression interval
    #[must_use]
    pub const fn repeat_delay(&self) -> Duration {
        Duration::from_millis(self.gestures.repeat_delay_ms)
    }

    /// Scroll rate-limit interval
    #[must_use]
    pub const fn scroll_rate_limit(&self) -> Duration {
        Duration::from_millis(self.scroll.rate_limit_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.screen.width <= 0 || self.screen.height <= 0 {
            return Err(Error::ConfigError(
                "Screen dimensions must be positive".to_string(),
            ));
        }

        if self.mouse.buffer_size == 0 {
            return Err(Error::ConfigError(
                "Smoothing buffer size must be at least 1".to_string(),
            ));
        }
        for (name, speed) in [
            ("speed_left", self.mouse.speed_left),
            ("speed_right", self.mouse.speed_right),
            ("speed_up", self.mouse.speed_up),
            ("speed_down", self.mouse.speed_down),
        ] {
            if !(speed > 0.0 && speed.is_finite()) {
                return Err(Error::ConfigError(format!(
                    "{name} must be a positive finite number"
                )));
            }
        }
        if self.mouse.tick_interval_ms == 0 {
            return Err(Error::ConfigError(
                "Tick interval must be greater than 0".to_string(),
            ));
        }

        for (key, value) in &self.gestures.confidence {
            if !(0.0..=100.0).contains(value) {
                return Err(Error::ConfigError(format!(
                    "Confidence for '{key}' must be between 0 and 100"
                )));
            }
        }

        if !(self.scroll.dead_zone_px >= 0.0 && self.scroll.dead_zone_px.is_finite()) {
            return Err(Error::ConfigError(
                "Scroll dead zone must be a non-negative finite number".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Facepointer Configuration

# Active display geometry
screen:
  left: 0
  top: 0
  width: 1920
  height: 1080

# Pointer control
mouse:
  buffer_size: 6
  speed_left: 1.0
  speed_right: 1.0
  speed_up: 1.0
  speed_down: 1.0
  acceleration: false
  suppression_window_ms: 500
  tick_interval_ms: 16
  landmark_index: 0

# Gesture recognition (confidence on a 0-100 scale)
gestures:
  repeat_delay_ms: 500
  confidence:
    jaw_open: 60.0
    mouth_pucker: 60.0
    brows_down: 60.0
    brow_inner_up: 60.0
  bindings:
    jaw_open: click_left
    mouth_pucker: click_right
    brows_down: toggle_scroll_mode
    brow_inner_up: reset_cursor

# Scroll mode
scroll:
  rate_limit_ms: 250
  dead_zone_px: 100.0
"#;
