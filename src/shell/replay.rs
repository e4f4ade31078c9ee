//! Capability source that replays recorded hand landmarks.
//!
//! The recording is JSON lines, one frame per line:
//!
//! ```text
//! {"width": 640, "height": 480, "landmarks": [{"x": 0.51, "y": 0.83}, ...]}
//! {"width": 640, "height": 480, "landmarks": null}
//! null
//! ```
//!
//! A `null` line is a dropped frame; `"landmarks": null` is a frame with no
//! hand in view. Frames repeat once the recording runs out.

use super::source::{CapabilitySource, Image};
use crate::core::Point;
use crate::error::SourceError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One recorded frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayFrame {
    pub width: u32,
    pub height: u32,
    pub landmarks: Option<Vec<Point>>,
}

impl ReplayFrame {
    pub fn new(width: u32, height: u32, landmarks: Option<Vec<Point>>) -> Self {
        Self {
            width,
            height,
            landmarks,
        }
    }
}

impl Image for ReplayFrame {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

pub struct ReplaySource {
    frames: Vec<Option<ReplayFrame>>,
    cursor: usize,
    released: bool,
}

impl ReplaySource {
    /// Replay the given frames in a loop. `None` entries are dropped frames.
    pub fn from_frames(frames: Vec<Option<ReplayFrame>>) -> Self {
        Self {
            frames,
            cursor: 0,
            released: false,
        }
    }

    /// Open a JSON-lines recording.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SourceError::DeviceInit {
            device: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let source = Self::parse(&text)?;
        if source.frames.is_empty() {
            return Err(SourceError::DeviceInit {
                device: path.display().to_string(),
                reason: "recording holds no frames".to_string(),
            });
        }
        log::info!("replaying {} frames from {}", source.frames.len(), path.display());
        Ok(source)
    }

    /// Parse a JSON-lines recording. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, SourceError> {
        let frames = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str::<Option<ReplayFrame>>(line).map_err(|e| {
                    SourceError::MalformedRecord {
                        line: i + 1,
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_frames(frames))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl CapabilitySource for ReplaySource {
    type Frame = ReplayFrame;

    fn next_frame(&mut self) -> Option<ReplayFrame> {
        if self.released || self.frames.is_empty() {
            return None;
        }
        let frame = self.frames[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.frames.len();
        frame
    }

    fn detect_hand_landmarks(&mut self, frame: &ReplayFrame) -> Option<Vec<Point>> {
        frame.landmarks.clone()
    }

    fn release(&mut self) {
        log::debug!("releasing replay source");
        self.released = true;
    }
}
