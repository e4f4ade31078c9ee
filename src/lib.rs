//! Gesture RPS: rock-paper-scissors against the computer, played with a
//! hand in front of a camera.
//!
//! The crate follows a "pure core, imperative shell" layout. The core
//! classifies hand landmarks, picks the computer's move and runs the round
//! state machine without touching clocks, cameras or widgets. The shell
//! wires that machine to a frame source, a presenter and the timers.
//!
//! # Core Concepts
//!
//! - **Gesture**: rock, paper, scissors, or unknown, read from hand landmarks
//! - **Phase**: Idle, Countdown, Capturing, RoundEnd, Finished
//! - **Commands**: immutable render instructions emitted by the machine
//! - **Capability source**: camera plus hand detector, behind a trait
//!
//! # Example
//!
//! ```rust
//! use gesture_rps::config::GameConfig;
//! use gesture_rps::core::{Gesture, Outcome, Phase};
//! use gesture_rps::game::{Command, GameMachine};
//!
//! let mut machine = GameMachine::new(GameConfig::default());
//! machine.start();
//! while machine.phase() == Phase::Countdown {
//!     machine.on_slow_tick();
//! }
//!
//! let commands = machine.on_capture_result(Gesture::Unknown);
//! assert_eq!(machine.history().last().map(|r| r.outcome), Some(Outcome::User));
//!
//! let timer = commands.iter().find_map(Command::as_timer).unwrap();
//! machine.on_round_end_elapsed(timer.token);
//! assert_eq!(machine.phase(), Phase::Countdown);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod shell;

// Re-export commonly used types
pub use self::config::GameConfig;
pub use self::core::{classify, computer_move, resolve, Gesture, Outcome, Phase, Point};
pub use error::{GameError, SnapshotError, SourceError};
pub use game::{Command, GameMachine, GameSnapshot, GameState, RenderCommand};
