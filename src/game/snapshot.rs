//! Read-only views of a game handed to presenters.
//!
//! Snapshots serialize to JSON so a presenter can live out of process.

use crate::core::{Gesture, Phase, RoundResult};
use crate::error::SnapshotError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Shown over the video while an unreadable gesture is being scored.
pub const NOTICE_TEXT: &str = ":( Not recognized, you win!";

/// Scores, counters and flags of the game in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub rounds_played: usize,
    pub user_score: usize,
    pub computer_score: usize,
    pub ties: usize,
    pub phase: Phase,
    /// Slow ticks left before the capture
    pub countdown_remaining: u32,
    pub paused: bool,
    /// Whether the "not recognized" notice is up
    pub notice_visible: bool,
}

/// Serializable picture of the game at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Rounds per game
    pub max_rounds: usize,

    pub state: GameState,

    /// Completed rounds in play order
    pub history: Vec<RoundResult>,
}

impl GameSnapshot {
    pub fn new(state: GameState, max_rounds: usize, history: Vec<RoundResult>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            taken_at: Utc::now(),
            max_rounds,
            state,
            history,
        }
    }

    /// Round number to show: the round being played while a game is
    /// running, otherwise the number of rounds completed.
    pub fn display_round(&self) -> usize {
        if self.state.phase.is_active() {
            (self.state.rounds_played + 1).min(self.max_rounds)
        } else {
            self.state.rounds_played
        }
    }

    /// "Round: n/max"
    pub fn round_label(&self) -> String {
        format!("Round: {}/{}", self.display_round(), self.max_rounds)
    }

    /// Text for the countdown display.
    pub fn countdown_label(&self) -> String {
        match self.state.phase {
            Phase::Capturing => "GO!".to_string(),
            Phase::Finished => "Done".to_string(),
            _ => self.state.countdown_remaining.to_string(),
        }
    }

    /// One `(user, computer)` pair per round slot; unplayed slots are
    /// `Unknown`.
    pub fn history_slots(&self) -> Vec<(Gesture, Gesture)> {
        (0..self.max_rounds)
            .map(|i| {
                self.history
                    .get(i)
                    .map(|r| (r.user, r.computer))
                    .unwrap_or((Gesture::Unknown, Gesture::Unknown))
            })
            .collect()
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(&self.state, self.max_rounds)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}

/// Score totals, as shown by the quiz dialog and at the end of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub rounds_played: usize,
    pub max_rounds: usize,
    pub user: usize,
    pub computer: usize,
    pub ties: usize,
}

impl ScoreSummary {
    pub fn new(state: &GameState, max_rounds: usize) -> Self {
        Self {
            rounds_played: state.rounds_played,
            max_rounds,
            user: state.user_score,
            computer: state.computer_score,
            ties: state.ties,
        }
    }
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rounds: {}/{}", self.rounds_played, self.max_rounds)?;
        writeln!(f, "You: {}", self.user)?;
        writeln!(f, "Computer: {}", self.computer)?;
        write!(f, "Ties: {}", self.ties)
    }
}
