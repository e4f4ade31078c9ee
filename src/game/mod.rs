//! The round state machine and the commands it emits.
//!
//! This is the "pure core" of the game loop: every input is an explicit
//! method call (`start`, `on_slow_tick`, `on_capture_result`,
//! `on_round_end_elapsed`, ...) and every output is a [`Command`] value.
//! Timers, frames and rendering live in [`crate::shell`].

mod command;
mod machine;
mod snapshot;

pub use command::{AdvanceTimer, Command, RenderCommand};
pub use machine::GameMachine;
pub use snapshot::{GameSnapshot, GameState, ScoreSummary, NOTICE_TEXT, SNAPSHOT_VERSION};
