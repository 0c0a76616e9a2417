//! Debounced dispatch of recognized gestures to bound macros.

use super::{FaceGesture, MacroAction};
use log::debug;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Stateful dispatcher applying per-gesture repeat suppression and the
/// gesture-to-macro binding map.
///
/// A compound gesture has a single binding entry, so its parts can
/// never double-fire one logical action.
pub struct GestureHandler {
    bindings: HashMap<FaceGesture, MacroAction>,
    repeat_delay: Duration,
    last_recognized: HashMap<FaceGesture, Instant>,
}

impl GestureHandler {
    /// Create a handler with the given bindings and minimum repeat
    /// interval
    #[must_use]
    pub fn new(bindings: HashMap<FaceGesture, MacroAction>, repeat_delay: Duration) -> Self {
        Self {
            bindings,
            repeat_delay,
            last_recognized: HashMap::new(),
        }
    }

    /// Process the gestures recognized in one frame, returning the
    /// macros to dispatch in recognition order.
    ///
    /// A gesture that fired within the repeat delay is suppressed;
    /// otherwise its firing time is recorded, bound or not. A gesture
    /// with no bound macro is then silently ignored.
    pub fn handle(&mut self, gestures: &[FaceGesture], now: Instant) -> Vec<MacroAction> {
        let mut macros = Vec::new();
        for &gesture in gestures {
            if let Some(&last) = self.last_recognized.get(&gesture) {
                if now.duration_since(last) < self.repeat_delay {
                    continue;
                }
            }
            self.last_recognized.insert(gesture, now);
            let Some(&action) = self.bindings.get(&gesture) else {
                continue;
            };
            debug!("Gesture {gesture:?} -> {action:?}");
            macros.push(action);
        }
        macros
    }

    /// Replace the gesture-to-macro bindings
    pub fn set_bindings(&mut self, bindings: HashMap<FaceGesture, MacroAction>) {
        self.bindings = bindings;
    }

    /// Forget all recorded firing times (session reset)
    pub fn clear_history(&mut self) {
        self.last_recognized.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> GestureHandler {
        let bindings = [
            (FaceGesture::JawOpen, MacroAction::ClickLeft),
            (FaceGesture::BrowsDown, MacroAction::ToggleScrollMode),
        ]
        .into_iter()
        .collect();
        GestureHandler::new(bindings, Duration::from_millis(500))
    }

    #[test]
    fn test_repeat_suppression() {
        let mut h = handler();
        let t0 = Instant::now();

        let first = h.handle(&[FaceGesture::JawOpen], t0);
        assert_eq!(first, vec![MacroAction::ClickLeft]);

        // Second firing inside the window is suppressed
        let second = h.handle(&[FaceGesture::JawOpen], t0 + Duration::from_millis(100));
        assert!(second.is_empty());

        // After the window it fires again
        let third = h.handle(&[FaceGesture::JawOpen], t0 + Duration::from_millis(600));
        assert_eq!(third, vec![MacroAction::ClickLeft]);
    }

    #[test]
    fn test_suppression_is_per_gesture() {
        let mut h = handler();
        let t0 = Instant::now();
        h.handle(&[FaceGesture::JawOpen], t0);

        let later = h.handle(
            &[FaceGesture::JawOpen, FaceGesture::BrowsDown],
            t0 + Duration::from_millis(100),
        );
        assert_eq!(later, vec![MacroAction::ToggleScrollMode]);
    }

    #[test]
    fn test_unbound_gesture_ignored() {
        let mut h = handler();
        let macros = h.handle(&[FaceGesture::MouthPucker], Instant::now());
        assert!(macros.is_empty());
    }

    #[test]
    fn test_dispatch_preserves_recognition_order() {
        let mut h = handler();
        let macros = h.handle(&[FaceGesture::BrowsDown, FaceGesture::JawOpen], Instant::now());
        assert_eq!(
            macros,
            vec![MacroAction::ToggleScrollMode, MacroAction::ClickLeft]
        );
    }

    #[test]
    fn test_clear_history_allows_immediate_refire() {
        let mut h = handler();
        let t0 = Instant::now();
        h.handle(&[FaceGesture::JawOpen], t0);
        h.clear_history();
        let refired = h.handle(&[FaceGesture::JawOpen], t0 + Duration::from_millis(1));
        assert_eq!(refired, vec![MacroAction::ClickLeft]);
    }

    #[test]
    fn test_rebinding_takes_effect() {
        let mut h = handler();
        h.set_bindings(
            [(FaceGesture::JawOpen, MacroAction::ClickRight)]
                .into_iter()
                .collect(),
        );
        let macros = h.handle(&[FaceGesture::JawOpen], Instant::now());
        assert_eq!(macros, vec![MacroAction::ClickRight]);
    }
}
