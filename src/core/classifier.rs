//! Finger-counting gesture classifier.
//!
//! Landmarks follow the 21-point hand layout used by common hand trackers:
//! index 0 is the wrist, then four points per digit from thumb to pinky.
//! Coordinates are normalized to the frame, `(0, 0)` top-left.

use super::gesture::Gesture;
use serde::{Deserialize, Serialize};

/// Number of landmarks in a complete hand detection.
pub const HAND_LANDMARKS: usize = 21;

/// Tip landmark per finger, thumb first.
pub const FINGER_TIPS: [usize; 5] = [4, 8, 12, 16, 20];

/// Proximal joint compared against each tip.
pub const FINGER_JOINTS: [usize; 5] = [3, 6, 10, 14, 18];

/// Normalized 2D landmark.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Integer pixel position in a `width` x `height` frame.
    fn to_pixel(self, width: u32, height: u32) -> (i64, i64) {
        (
            (self.x * width as f32) as i64,
            (self.y * height as f32) as i64,
        )
    }
}

/// Count extended fingers on a mirrored camera frame.
///
/// A finger is extended when its tip sits above its joint. The thumb is
/// extended when its tip sits to the left of its joint, which is outward for
/// a right hand once the frame has been flipped horizontally.
///
/// Returns `None` when the detection is incomplete.
pub fn count_extended_fingers(landmarks: &[Point], width: u32, height: u32) -> Option<usize> {
    if landmarks.len() < HAND_LANDMARKS {
        return None;
    }
    let px = |i: usize| landmarks[i].to_pixel(width, height);

    let thumb = usize::from(px(FINGER_TIPS[0]).0 < px(FINGER_JOINTS[0]).0);
    let fingers = FINGER_TIPS[1..]
        .iter()
        .zip(&FINGER_JOINTS[1..])
        .filter(|&(&tip, &joint)| px(tip).1 < px(joint).1)
        .count();

    Some(thumb + fingers)
}

/// Map an extended-finger count to a gesture.
pub fn gesture_for_count(count: usize) -> Gesture {
    match count {
        0 => Gesture::Rock,
        2 => Gesture::Scissors,
        5 => Gesture::Paper,
        _ => Gesture::Unknown,
    }
}

/// Classify a hand pose. Never fails; ambiguous poses come back `Unknown`.
///
/// # Example
///
/// ```rust
/// use gesture_rps::core::{classify, Gesture, Point};
///
/// assert_eq!(classify(&[Point::default(); 3], 640, 480), Gesture::Unknown);
/// ```
pub fn classify(landmarks: &[Point], frame_width: u32, frame_height: u32) -> Gesture {
    if frame_width == 0 || frame_height == 0 {
        return Gesture::Unknown;
    }
    count_extended_fingers(landmarks, frame_width, frame_height)
        .map(gesture_for_count)
        .unwrap_or(Gesture::Unknown)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a hand with the given digits extended, thumb first.
    pub fn hand(extended: [bool; 5]) -> Vec<Point> {
        let mut points = vec![Point::new(0.5, 0.8); HAND_LANDMARKS];
        for (finger, &up) in extended.iter().enumerate() {
            let tip = FINGER_TIPS[finger];
            let joint = FINGER_JOINTS[finger];
            let column = 0.3 + finger as f32 * 0.1;
            points[joint] = Point::new(column, 0.5);
            points[tip] = if finger == 0 {
                let dx = if up { -0.1 } else { 0.1 };
                Point::new(column + dx, 0.5)
            } else {
                let dy = if up { -0.2 } else { 0.1 };
                Point::new(column, 0.5 + dy)
            };
        }
        points
    }

    pub fn rock() -> Vec<Point> {
        hand([false; 5])
    }

    pub fn paper() -> Vec<Point> {
        hand([true; 5])
    }

    pub fn scissors() -> Vec<Point> {
        hand([false, true, true, false, false])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn closed_fist_is_rock() {
        assert_eq!(classify(&rock(), 640, 480), Gesture::Rock);
    }

    #[test]
    fn open_hand_is_paper() {
        assert_eq!(classify(&paper(), 640, 480), Gesture::Paper);
    }

    #[test]
    fn two_fingers_are_scissors() {
        assert_eq!(classify(&scissors(), 640, 480), Gesture::Scissors);
    }

    #[test]
    fn thumb_and_index_count_as_two() {
        let landmarks = hand([true, true, false, false, false]);
        assert_eq!(count_extended_fingers(&landmarks, 640, 480), Some(2));
        assert_eq!(classify(&landmarks, 640, 480), Gesture::Scissors);
    }

    #[test]
    fn other_counts_are_unknown() {
        assert_eq!(
            classify(&hand([false, true, false, false, false]), 640, 480),
            Gesture::Unknown
        );
        assert_eq!(
            classify(&hand([false, true, true, true, false]), 640, 480),
            Gesture::Unknown
        );
        assert_eq!(
            classify(&hand([false, true, true, true, true]), 640, 480),
            Gesture::Unknown
        );
    }

    #[test]
    fn count_mapping_covers_every_count() {
        assert_eq!(gesture_for_count(0), Gesture::Rock);
        assert_eq!(gesture_for_count(1), Gesture::Unknown);
        assert_eq!(gesture_for_count(2), Gesture::Scissors);
        assert_eq!(gesture_for_count(3), Gesture::Unknown);
        assert_eq!(gesture_for_count(4), Gesture::Unknown);
        assert_eq!(gesture_for_count(5), Gesture::Paper);
    }

    #[test]
    fn incomplete_detection_is_unknown() {
        let mut landmarks = paper();
        landmarks.truncate(HAND_LANDMARKS - 1);
        assert_eq!(count_extended_fingers(&landmarks, 640, 480), None);
        assert_eq!(classify(&landmarks, 640, 480), Gesture::Unknown);
        assert_eq!(classify(&[], 640, 480), Gesture::Unknown);
    }

    #[test]
    fn zero_sized_frame_is_unknown() {
        assert_eq!(classify(&paper(), 0, 480), Gesture::Unknown);
        assert_eq!(classify(&paper(), 640, 0), Gesture::Unknown);
    }

    #[test]
    fn comparisons_use_truncated_pixels() {
        // Tip is above the joint in normalized space but lands on the same
        // pixel row, so the finger does not count.
        let mut landmarks = rock();
        landmarks[FINGER_TIPS[1]] = Point::new(0.4, 0.5001);
        landmarks[FINGER_JOINTS[1]] = Point::new(0.4, 0.5009);
        assert_eq!(count_extended_fingers(&landmarks, 640, 480), Some(0));
    }
}
