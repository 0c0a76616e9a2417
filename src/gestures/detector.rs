//! Per-frame gesture detection from raw expression scores.

use super::{FaceExpression, FaceGesture};
use std::collections::HashMap;

/// Stateless classifier mapping a frame's expression scores to
/// recognized gestures.
///
/// The confidence map comes from user preferences and is read-only
/// here; a gesture with no configured threshold is never reported.
pub struct GestureDetector {
    confidence: HashMap<FaceGesture, f64>,
}

impl GestureDetector {
    /// Create a detector with per-gesture confidence thresholds in
    /// `[0, 1]`
    #[must_use]
    pub fn new(confidence: HashMap<FaceGesture, f64>) -> Self {
        Self { confidence }
    }

    /// Replace the confidence thresholds
    pub fn set_confidence(&mut self, confidence: HashMap<FaceGesture, f64>) {
        self.confidence = confidence;
    }

    /// Classify one frame's expression scores.
    ///
    /// A compound gesture requires every part to be present in the
    /// frame, but scores combine by maximum: asymmetric facial strength
    /// must not block recognition. Results follow the canonical gesture
    /// order so dispatch is deterministic.
    #[must_use]
    pub fn detect(&self, scores: &HashMap<FaceExpression, f64>) -> Vec<FaceGesture> {
        FaceGesture::ALL
            .into_iter()
            .filter(|gesture| {
                let Some(&threshold) = self.confidence.get(gesture) else {
                    return false;
                };
                let mut best = f64::NEG_INFINITY;
                for part in gesture.parts() {
                    match scores.get(part) {
                        Some(&score) => best = best.max(score),
                        None => return false,
                    }
                }
                best >= threshold
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(FaceExpression, f64)]) -> HashMap<FaceExpression, f64> {
        entries.iter().copied().collect()
    }

    fn detector(entries: &[(FaceGesture, f64)]) -> GestureDetector {
        GestureDetector::new(entries.iter().copied().collect())
    }

    #[test]
    fn test_simple_gesture_threshold() {
        let d = detector(&[(FaceGesture::JawOpen, 0.6)]);

        let recognized = d.detect(&scores(&[(FaceExpression::JawOpen, 0.7)]));
        assert_eq!(recognized, vec![FaceGesture::JawOpen]);

        let below = d.detect(&scores(&[(FaceExpression::JawOpen, 0.5)]));
        assert!(below.is_empty());

        // Exactly at the threshold counts
        let at = d.detect(&scores(&[(FaceExpression::JawOpen, 0.6)]));
        assert_eq!(at, vec![FaceGesture::JawOpen]);
    }

    #[test]
    fn test_unconfigured_gesture_never_reported() {
        let d = detector(&[]);
        let recognized = d.detect(&scores(&[(FaceExpression::JawOpen, 1.0)]));
        assert!(recognized.is_empty());
    }

    #[test]
    fn test_compound_gesture_uses_max_score() {
        let d = detector(&[(FaceGesture::BrowsDown, 0.6)]);

        // Weak left brow, strong right brow: max carries it
        let recognized = d.detect(&scores(&[
            (FaceExpression::BrowDownLeft, 0.1),
            (FaceExpression::BrowDownRight, 0.9),
        ]));
        assert_eq!(recognized, vec![FaceGesture::BrowsDown]);

        // Both weak
        let weak = d.detect(&scores(&[
            (FaceExpression::BrowDownLeft, 0.2),
            (FaceExpression::BrowDownRight, 0.3),
        ]));
        assert!(weak.is_empty());
    }

    #[test]
    fn test_compound_gesture_requires_all_parts() {
        let d = detector(&[(FaceGesture::BrowsDown, 0.6)]);

        // Missing right brow: never recognized regardless of score
        let recognized = d.detect(&scores(&[(FaceExpression::BrowDownLeft, 1.0)]));
        assert!(recognized.is_empty());
    }

    #[test]
    fn test_multiple_gestures_in_canonical_order() {
        let d = detector(&[
            (FaceGesture::MouthPucker, 0.5),
            (FaceGesture::JawOpen, 0.5),
            (FaceGesture::BrowInnerUp, 0.5),
        ]);
        let recognized = d.detect(&scores(&[
            (FaceExpression::MouthPucker, 0.9),
            (FaceExpression::JawOpen, 0.9),
            (FaceExpression::BrowInnerUp, 0.9),
        ]));
        assert_eq!(
            recognized,
            vec![
                FaceGesture::BrowInnerUp,
                FaceGesture::JawOpen,
                FaceGesture::MouthPucker,
            ]
        );
    }

    #[test]
    fn test_empty_frame_recognizes_nothing() {
        let d = detector(&[(FaceGesture::JawOpen, 0.0)]);
        assert!(d.detect(&HashMap::new()).is_empty());
    }
}
