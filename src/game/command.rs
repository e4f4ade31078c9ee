//! Outputs of the round state machine.

use super::snapshot::{GameSnapshot, ScoreSummary};
use crate::core::RoundResult;
use std::time::Duration;

/// Instruction for the presenter. Commands are plain values; the presenter
/// never shares state with the machine.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    /// Full picture after any state change
    Snapshot(GameSnapshot),

    /// Countdown moved to this value
    Countdown(u32),

    /// Countdown reached zero; show the hand now
    Go,

    /// A round was resolved and appended to the history
    RoundRecorded(RoundResult),

    /// Show or hide the "not recognized" notice
    Notice { visible: bool, window: Duration },

    /// Game over with these totals
    Finished(ScoreSummary),
}

/// Request for a one-shot callback into
/// [`GameMachine::on_round_end_elapsed`](super::GameMachine::on_round_end_elapsed).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceTimer {
    /// Must be handed back when the timer fires
    pub token: u64,
    pub after: Duration,
}

/// Everything a machine input can produce.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Render(RenderCommand),
    ScheduleAdvance(AdvanceTimer),
}

impl Command {
    pub fn as_timer(&self) -> Option<AdvanceTimer> {
        match self {
            Self::ScheduleAdvance(timer) => Some(*timer),
            Self::Render(_) => None,
        }
    }
}
