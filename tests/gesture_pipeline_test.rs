//! Tests for gesture recognition feeding debounced macro dispatch

use facepointer::gestures::{
    FaceExpression, FaceGesture, GestureDetector, GestureHandler, MacroAction,
};
use std::collections::HashMap;
use std::time::{Duration, Instant};

fn scores(entries: &[(FaceExpression, f64)]) -> HashMap<FaceExpression, f64> {
    entries.iter().copied().collect()
}

/// A compound gesture fires iff both parts are present and the maximum
/// part score clears the threshold
#[test]
fn test_compound_gesture_recognition_matrix() {
    let detector = GestureDetector::new([(FaceGesture::BrowsDown, 0.7)].into_iter().collect());

    // Both present, max clears threshold
    assert_eq!(
        detector.detect(&scores(&[
            (FaceExpression::BrowDownLeft, 0.2),
            (FaceExpression::BrowDownRight, 0.7),
        ])),
        vec![FaceGesture::BrowsDown]
    );

    // Both present, max below threshold
    assert!(detector
        .detect(&scores(&[
            (FaceExpression::BrowDownLeft, 0.69),
            (FaceExpression::BrowDownRight, 0.5),
        ]))
        .is_empty());

    // One part missing: never recognized, score irrelevant
    assert!(detector
        .detect(&scores(&[(FaceExpression::BrowDownRight, 1.0)]))
        .is_empty());
    assert!(detector
        .detect(&scores(&[(FaceExpression::BrowDownLeft, 1.0)]))
        .is_empty());
}

/// An unconfigured gesture is never reported even at full raw score
#[test]
fn test_unconfigured_gesture_is_absent() {
    let detector = GestureDetector::new([(FaceGesture::JawOpen, 0.5)].into_iter().collect());
    let frame = scores(&[
        (FaceExpression::JawOpen, 1.0),
        (FaceExpression::MouthPucker, 1.0),
    ]);
    assert_eq!(detector.detect(&frame), vec![FaceGesture::JawOpen]);
}

/// Repeat suppression over the full detect-then-dispatch path
#[test]
fn test_detect_dispatch_repeat_suppression() {
    let detector = GestureDetector::new([(FaceGesture::JawOpen, 0.5)].into_iter().collect());
    let mut handler = GestureHandler::new(
        [(FaceGesture::JawOpen, MacroAction::ClickLeft)]
            .into_iter()
            .collect(),
        Duration::from_millis(500),
    );

    let frame = scores(&[(FaceExpression::JawOpen, 0.9)]);
    let t0 = Instant::now();

    // The user holds the gesture over many consecutive frames
    let mut dispatched = 0;
    for i in 0..30 {
        let gestures = detector.detect(&frame);
        let at = t0 + Duration::from_millis(i * 33);
        dispatched += handler.handle(&gestures, at).len();
    }
    // 30 frames over ~1s with a 500ms window: exactly two firings
    assert_eq!(dispatched, 2);
}

/// A compound gesture dispatches a single macro, never one per part
#[test]
fn test_compound_gesture_fires_once() {
    let detector = GestureDetector::new([(FaceGesture::EyesBlink, 0.4)].into_iter().collect());
    let mut handler = GestureHandler::new(
        [(FaceGesture::EyesBlink, MacroAction::ClickRight)]
            .into_iter()
            .collect(),
        Duration::from_millis(500),
    );

    let frame = scores(&[
        (FaceExpression::EyeBlinkLeft, 0.8),
        (FaceExpression::EyeBlinkRight, 0.9),
    ]);
    let macros = handler.handle(&detector.detect(&frame), Instant::now());
    assert_eq!(macros, vec![MacroAction::ClickRight]);
}

/// Distinct gestures in one frame dispatch in recognition order and
/// debounce independently
#[test]
fn test_independent_debounce_of_distinct_gestures() {
    let detector = GestureDetector::new(
        [
            (FaceGesture::JawOpen, 0.5),
            (FaceGesture::MouthPucker, 0.5),
        ]
        .into_iter()
        .collect(),
    );
    let mut handler = GestureHandler::new(
        [
            (FaceGesture::JawOpen, MacroAction::ClickLeft),
            (FaceGesture::MouthPucker, MacroAction::ClickRight),
        ]
        .into_iter()
        .collect(),
        Duration::from_millis(500),
    );
    let t0 = Instant::now();

    let both = detector.detect(&scores(&[
        (FaceExpression::JawOpen, 0.9),
        (FaceExpression::MouthPucker, 0.9),
    ]));
    assert_eq!(
        handler.handle(&both, t0),
        vec![MacroAction::ClickLeft, MacroAction::ClickRight]
    );

    // Re-firing one gesture after its window leaves the other alone
    let pucker_only = detector.detect(&scores(&[(FaceExpression::MouthPucker, 0.9)]));
    assert_eq!(
        handler.handle(&pucker_only, t0 + Duration::from_millis(600)),
        vec![MacroAction::ClickRight]
    );
}
