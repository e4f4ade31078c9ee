//! Phases of a game.
//!
//! All methods are pure inspections of the current phase; transitions
//! between phases are owned by [`crate::game::GameMachine`].

use serde::{Deserialize, Serialize};

/// Position of the round state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Before the first game starts.
    #[default]
    Idle,
    /// Counting down to the next capture.
    Countdown,
    /// Waiting for exactly one classifier verdict.
    Capturing,
    /// Showing the result of the round just played.
    RoundEnd,
    /// All rounds played; terminal until restart.
    Finished,
}

impl Phase {
    /// Get the phase's name for display/logging.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gesture_rps::core::Phase;
    ///
    /// assert_eq!(Phase::Countdown.name(), "Countdown");
    /// assert!(Phase::Finished.is_final());
    /// assert!(Phase::Capturing.is_active());
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Countdown => "Countdown",
            Self::Capturing => "Capturing",
            Self::RoundEnd => "RoundEnd",
            Self::Finished => "Finished",
        }
    }

    /// Terminal phase; stays put until an explicit restart.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// A game is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Countdown | Self::Capturing | Self::RoundEnd)
    }
}
