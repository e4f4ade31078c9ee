//! Gestures a player can show and the outcome of a round.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A hand pose as read by the classifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    /// The classifier could not map the hand pose to a move.
    Unknown,
}

impl Gesture {
    /// The three playable gestures, in beats-cycle order.
    pub const KNOWN: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Who took a round.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    User,
    Computer,
    Tie,
}

impl Outcome {
    /// The same result seen from the other side of the table.
    pub fn swapped(self) -> Self {
        match self {
            Self::User => Self::Computer,
            Self::Computer => Self::User,
            Self::Tie => Self::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Computer => "computer",
            Self::Tie => "tie",
        })
    }
}
