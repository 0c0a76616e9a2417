//! Facial gesture recognition and dispatch.
//!
//! The vocabulary is closed: per-frame expression signals
//! ([`FaceExpression`]), application-level gestures ([`FaceGesture`],
//! possibly compound), and the executable actions gestures can be
//! bound to ([`MacroAction`]). External configuration refers to these
//! by name and is validated at the boundary; unknown names are dropped,
//! never propagated.

/// Gesture detection over per-frame expression scores
pub mod detector;

/// Debounced gesture-to-macro dispatch
pub mod handler;

pub use detector::GestureDetector;
pub use handler::GestureHandler;

/// An underlying facial expression signal reported by the landmark
/// source, scored in `[0, 1]` per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceExpression {
    /// Left brow lowered
    BrowDownLeft,
    /// Right brow lowered
    BrowDownRight,
    /// Inner brows raised
    BrowInnerUp,
    /// Left eye closed
    EyeBlinkLeft,
    /// Right eye closed
    EyeBlinkRight,
    /// Left eye squinted
    EyeSquintLeft,
    /// Right eye squinted
    EyeSquintRight,
    /// Jaw moved left
    JawLeft,
    /// Jaw opened
    JawOpen,
    /// Jaw moved right
    JawRight,
    /// Mouth stretched left
    MouthLeft,
    /// Lips puckered
    MouthPucker,
    /// Mouth stretched right
    MouthRight,
    /// Left smile corner raised
    MouthSmileLeft,
    /// Right smile corner raised
    MouthSmileRight,
}

impl FaceExpression {
    /// Parse the wire name used by the landmark source.
    ///
    /// Returns `None` for names outside the closed vocabulary.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "browDownLeft" => Some(Self::BrowDownLeft),
            "browDownRight" => Some(Self::BrowDownRight),
            "browInnerUp" => Some(Self::BrowInnerUp),
            "eyeBlinkLeft" => Some(Self::EyeBlinkLeft),
            "eyeBlinkRight" => Some(Self::EyeBlinkRight),
            "eyeSquintLeft" => Some(Self::EyeSquintLeft),
            "eyeSquintRight" => Some(Self::EyeSquintRight),
            "jawLeft" => Some(Self::JawLeft),
            "jawOpen" => Some(Self::JawOpen),
            "jawRight" => Some(Self::JawRight),
            "mouthLeft" => Some(Self::MouthLeft),
            "mouthPucker" => Some(Self::MouthPucker),
            "mouthRight" => Some(Self::MouthRight),
            "mouthSmileLeft" => Some(Self::MouthSmileLeft),
            "mouthSmileRight" => Some(Self::MouthSmileRight),
            _ => None,
        }
    }
}

/// An application-level gesture, possibly compound (requiring several
/// expression signals to co-occur)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceGesture {
    /// Inner brows raised
    BrowInnerUp,
    /// Both brows lowered
    BrowsDown,
    /// Both eyes closed
    EyesBlink,
    /// Left eye squinted
    EyeSquintLeft,
    /// Right eye squinted
    EyeSquintRight,
    /// Jaw moved left
    JawLeft,
    /// Jaw opened
    JawOpen,
    /// Jaw moved right
    JawRight,
    /// Mouth stretched left
    MouthLeft,
    /// Lips puckered
    MouthPucker,
    /// Mouth stretched right
    MouthRight,
    /// Smile with both corners
    MouthSmile,
}

impl FaceGesture {
    /// Canonical recognition/dispatch order of all gestures
    pub const ALL: [Self; 12] = [
        Self::BrowInnerUp,
        Self::BrowsDown,
        Self::EyesBlink,
        Self::EyeSquintLeft,
        Self::EyeSquintRight,
        Self::JawLeft,
        Self::JawOpen,
        Self::JawRight,
        Self::MouthLeft,
        Self::MouthPucker,
        Self::MouthRight,
        Self::MouthSmile,
    ];

    /// The underlying expression signals this gesture is built from.
    ///
    /// Compound gestures list more than one part; every part must be
    /// present in a frame for the gesture to be recognized.
    #[must_use]
    pub const fn parts(self) -> &'static [FaceExpression] {
        match self {
            Self::BrowInnerUp => &[FaceExpression::BrowInnerUp],
            Self::BrowsDown => &[FaceExpression::BrowDownLeft, FaceExpression::BrowDownRight],
            Self::EyesBlink => &[FaceExpression::EyeBlinkLeft, FaceExpression::EyeBlinkRight],
            Self::EyeSquintLeft => &[FaceExpression::EyeSquintLeft],
            Self::EyeSquintRight => &[FaceExpression::EyeSquintRight],
            Self::JawLeft => &[FaceExpression::JawLeft],
            Self::JawOpen => &[FaceExpression::JawOpen],
            Self::JawRight => &[FaceExpression::JawRight],
            Self::MouthLeft => &[FaceExpression::MouthLeft],
            Self::MouthPucker => &[FaceExpression::MouthPucker],
            Self::MouthRight => &[FaceExpression::MouthRight],
            Self::MouthSmile => &[FaceExpression::MouthSmileLeft, FaceExpression::MouthSmileRight],
        }
    }

    /// Parse the configuration key for a gesture
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "brow_inner_up" => Some(Self::BrowInnerUp),
            "brows_down" => Some(Self::BrowsDown),
            "eyes_blink" => Some(Self::EyesBlink),
            "eye_squint_left" => Some(Self::EyeSquintLeft),
            "eye_squint_right" => Some(Self::EyeSquintRight),
            "jaw_left" => Some(Self::JawLeft),
            "jaw_open" => Some(Self::JawOpen),
            "jaw_right" => Some(Self::JawRight),
            "mouth_left" => Some(Self::MouthLeft),
            "mouth_pucker" => Some(Self::MouthPucker),
            "mouth_right" => Some(Self::MouthRight),
            "mouth_smile" => Some(Self::MouthSmile),
            _ => None,
        }
    }
}

/// An executable action a recognized gesture can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroAction {
    /// Synthesize a left click at the pointer
    ClickLeft,
    /// Synthesize a left double click at the pointer
    ClickLeftDouble,
    /// Synthesize a right click at the pointer
    ClickRight,
    /// Toggle a held left press (press on first firing, release on the
    /// next)
    LongClickLeft,
    /// Move the pointer back to the screen center
    ResetCursor,
    /// Enter or leave scroll mode
    ToggleScrollMode,
    /// Pause or resume cursor control
    ToggleCursorControl,
}

impl MacroAction {
    /// Parse the configuration key for a macro
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "click_left" => Some(Self::ClickLeft),
            "click_left_double" => Some(Self::ClickLeftDouble),
            "click_right" => Some(Self::ClickRight),
            "long_click_left" => Some(Self::LongClickLeft),
            "reset_cursor" => Some(Self::ResetCursor),
            "toggle_scroll_mode" => Some(Self::ToggleScrollMode),
            "toggle_cursor_control" => Some(Self::ToggleCursorControl),
            _ => None,
        }
    }
}
