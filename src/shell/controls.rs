//! User controls and the line reader that feeds them to the event loop.

use std::io::BufRead;
use std::thread;
use tokio::sync::mpsc;

/// User controls, the equivalent of the game window's buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Start,
    Pause,
    Resume,
    TogglePause,
    /// Show the current score
    Summary,
    Quit,
}

impl Control {
    /// Parse one line of user input: `s`, `p`, `?`, `q` or the long names.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "s" | "start" => Some(Self::Start),
            "p" | "pause" => Some(Self::TogglePause),
            "resume" => Some(Self::Resume),
            "?" | "quiz" => Some(Self::Summary),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Read controls line by line on a dedicated OS thread.
///
/// Blocking reads cannot be cancelled, so they stay off the async runtime:
/// the event loop and the runtime can shut down while the thread is still
/// waiting for input, and the thread dies with the process. The thread ends
/// on EOF, on a read error, or once the receiving side is dropped.
pub fn spawn_control_reader<R>(
    input: R,
    tx: mpsc::UnboundedSender<Control>,
) -> thread::JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || read_controls(input, &tx))
}

fn read_controls<R: BufRead>(input: R, tx: &mpsc::UnboundedSender<Control>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("failed to read controls: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some(control) = Control::parse(&line) else {
            log::warn!("unknown control '{}'", line.trim());
            continue;
        };
        if tx.send(control).is_err() {
            log::debug!("event loop gone, no longer reading controls");
            break;
        }
    }
}
