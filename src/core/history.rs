//! Bounded record of the rounds played in a game.
//!
//! History is immutable - `record` returns a new history with the round
//! appended, leaving the original untouched.

use super::gesture::{Gesture, Outcome};
use super::resolver::{computer_move, resolve};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one completed round.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RoundResult {
    /// Zero-based position of the round within its game
    pub round_index: usize,
    /// What the classifier read from the player's hand
    pub user: Gesture,
    /// The computer's counter-pick
    pub computer: Gesture,
    pub outcome: Outcome,
    /// When the capture was resolved
    pub played_at: DateTime<Utc>,
}

impl RoundResult {
    /// Resolve a round from the user's gesture alone.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gesture_rps::core::{Gesture, Outcome, RoundResult};
    ///
    /// let round = RoundResult::play(0, Gesture::Rock);
    /// assert_eq!(round.computer, Gesture::Paper);
    /// assert_eq!(round.outcome, Outcome::Computer);
    /// ```
    pub fn play(round_index: usize, user: Gesture) -> Self {
        let computer = computer_move(user);
        Self {
            round_index,
            user,
            computer,
            outcome: resolve(user, computer),
            played_at: Utc::now(),
        }
    }
}

/// Ordered round history holding at most `capacity` rounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundHistory {
    capacity: usize,
    rounds: Vec<RoundResult>,
}

impl RoundHistory {
    /// Create a new empty history.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            rounds: Vec::with_capacity(capacity),
        }
    }

    /// Record a round, returning a new history.
    ///
    /// Returns `None` once the history is full; the original is unchanged
    /// either way.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gesture_rps::core::{Gesture, RoundHistory, RoundResult};
    ///
    /// let history = RoundHistory::new(1);
    /// let history = history.record(RoundResult::play(0, Gesture::Rock)).unwrap();
    /// assert_eq!(history.len(), 1);
    /// assert!(history.record(RoundResult::play(1, Gesture::Paper)).is_none());
    /// ```
    pub fn record(&self, round: RoundResult) -> Option<Self> {
        if self.is_full() {
            return None;
        }
        let mut rounds = self.rounds.clone();
        rounds.push(round);
        Some(Self {
            capacity: self.capacity,
            rounds,
        })
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.rounds.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get all rounds in play order.
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    pub fn last(&self) -> Option<&RoundResult> {
        self.rounds.last()
    }

    /// Number of rounds that ended with `outcome`.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.rounds.iter().filter(|r| r.outcome == outcome).count()
    }
}
