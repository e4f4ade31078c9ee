//! Imperative shell around the game machine.
//!
//! The shell owns everything with side effects: the capability source, the
//! presenter, and the timers. It turns timer fires into machine inputs and
//! machine commands into presenter calls.

mod controls;
mod presenter;
mod replay;
mod runner;
mod session;
mod source;

pub use controls::{spawn_control_reader, Control};
pub use presenter::{JsonPresenter, Presenter, RecordingPresenter, TerminalPresenter};
pub use replay::{ReplayFrame, ReplaySource};
pub use runner::{run, RunOptions};
pub use session::Session;
pub use source::{CapabilitySource, Image};
