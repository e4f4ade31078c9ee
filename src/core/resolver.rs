//! Computer move selection and round resolution.

use super::gesture::{Gesture, Outcome};

/// The gesture that `gesture` beats, if it is playable.
pub fn beats(gesture: Gesture) -> Option<Gesture> {
    match gesture {
        Gesture::Rock => Some(Gesture::Scissors),
        Gesture::Scissors => Some(Gesture::Paper),
        Gesture::Paper => Some(Gesture::Rock),
        Gesture::Unknown => None,
    }
}

/// Deterministic counter-pick for the user's gesture.
///
/// # Example
///
/// ```rust
/// use gesture_rps::core::{computer_move, Gesture};
///
/// assert_eq!(computer_move(Gesture::Rock), Gesture::Paper);
/// assert_eq!(computer_move(Gesture::Unknown), Gesture::Unknown);
/// ```
pub fn computer_move(user: Gesture) -> Gesture {
    match user {
        Gesture::Rock => Gesture::Paper,
        Gesture::Paper => Gesture::Scissors,
        Gesture::Scissors => Gesture::Rock,
        Gesture::Unknown => Gesture::Unknown,
    }
}

/// Decide who takes the round.
///
/// An unreadable gesture on either side is scored as a win for the human,
/// so a classifier miss never costs the player a point.
pub fn resolve(user: Gesture, computer: Gesture) -> Outcome {
    if !user.is_known() || !computer.is_known() {
        return Outcome::User;
    }
    if user == computer {
        Outcome::Tie
    } else if beats(user) == Some(computer) {
        Outcome::User
    } else {
        Outcome::Computer
    }
}
