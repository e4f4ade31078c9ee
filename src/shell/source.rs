//! Camera and hand-detection capabilities consumed by a session.

use crate::core::Point;

/// Anything with pixel dimensions.
pub trait Image {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// Frame source plus hand-landmark detector.
///
/// Frames are expected already mirrored for display, so the classifier's
/// thumb rule reads a right hand correctly. Both methods are polled from the
/// event loop and must not block.
pub trait CapabilitySource {
    type Frame: Image;

    /// Next frame, or `None` when none is ready this tick.
    fn next_frame(&mut self) -> Option<Self::Frame>;

    /// Landmarks of the single tracked hand, or `None` when no hand is seen.
    fn detect_hand_landmarks(&mut self, frame: &Self::Frame) -> Option<Vec<Point>>;

    /// Release the device and any detector resources. Called exactly once.
    fn release(&mut self) {}
}
