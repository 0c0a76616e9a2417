//! Input event stream feeding the pipeline.
//!
//! A frame carries whatever the landmark source produced: zero or more
//! landmark sets and zero or more named expression scores. Empty or
//! partial frames are valid no-ops. The bundled [`JsonLineSource`]
//! reads one JSON object per line, which is how the binary is driven.

use crate::error::Result;
use crate::gestures::FaceExpression;
use crate::geometry::{NormalizedPoint, ScreenPoint};
use log::warn;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::io::BufRead;

/// One frame of landmark-source output
#[derive(Debug, Clone, Default)]
pub struct FaceFrame {
    /// Tracked landmark positions, normalized to `[0, 1]`; only the
    /// configured index is consumed
    pub landmarks: Vec<NormalizedPoint>,
    /// Expression confidence scores in `[0, 1]`
    pub expressions: HashMap<FaceExpression, f64>,
}

/// One event from the outside world
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// A landmark-source frame
    Frame(FaceFrame),
    /// A pointer movement reported by the platform
    PointerMoved {
        /// New absolute position
        position: ScreenPoint,
        /// True when the movement was synthesized by us rather than a
        /// physical device
        synthesized: bool,
    },
    /// The stream is exhausted
    End,
}

/// Source of input events
pub trait FrameSource {
    /// Produce the next event. Returns [`InputEvent::End`] once the
    /// stream is exhausted.
    fn next_event(&mut self) -> Result<InputEvent>;
}

#[derive(Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct RawPointer {
    x: i32,
    y: i32,
    #[serde(default)]
    synthesized: bool,
}

#[derive(Deserialize)]
struct RawLine {
    #[serde(default)]
    landmarks: Vec<RawPoint>,
    #[serde(default)]
    expressions: BTreeMap<String, f64>,
    #[serde(default)]
    pointer: Option<RawPointer>,
}

/// Frame source reading one JSON object per line from a reader.
///
/// Expression names outside the closed vocabulary are dropped at this
/// boundary; malformed lines are skipped with a warning, never failing
/// the stream.
pub struct JsonLineSource<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> JsonLineSource<R> {
    /// Wrap a buffered reader
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> FrameSource for JsonLineSource<R> {
    fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(InputEvent::End);
            }
            let trimmed = self.line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let raw: RawLine = match serde_json::from_str(trimmed) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("Skipping malformed frame line: {e}");
                    continue;
                }
            };

            if let Some(pointer) = raw.pointer {
                return Ok(InputEvent::PointerMoved {
                    position: ScreenPoint::new(pointer.x, pointer.y),
                    synthesized: pointer.synthesized,
                });
            }

            let mut expressions = HashMap::new();
            for (name, score) in raw.expressions {
                match FaceExpression::from_name(&name) {
                    Some(expression) => {
                        expressions.insert(expression, score);
                    }
                    None => warn!("Ignoring unknown expression '{name}'"),
                }
            }
            return Ok(InputEvent::Frame(FaceFrame {
                landmarks: raw
                    .landmarks
                    .into_iter()
                    .map(|p| NormalizedPoint::new(p.x, p.y))
                    .collect(),
                expressions,
            }));
        }
    }
}
