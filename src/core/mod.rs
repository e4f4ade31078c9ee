//! Pure game logic.
//!
//! - Gestures and round outcomes
//! - The finger-counting classifier
//! - Computer move selection and round resolution
//! - Phases of the round lifecycle
//! - Bounded round history
//!
//! Nothing in this module performs I/O or reads the clock beyond stamping
//! round results.

mod classifier;
mod gesture;
mod history;
mod resolver;
mod state;

#[cfg(test)]
pub(crate) use classifier::fixtures;

pub use classifier::{
    classify, count_extended_fingers, gesture_for_count, Point, FINGER_JOINTS, FINGER_TIPS,
    HAND_LANDMARKS,
};
pub use gesture::{Gesture, Outcome};
pub use history::{RoundHistory, RoundResult};
pub use resolver::{beats, computer_move, resolve};
pub use state::Phase;
