//! Presentation side of a session.

use super::source::Image;
use crate::core::{Phase, Point};
use crate::game::{GameSnapshot, RenderCommand, ScoreSummary, NOTICE_TEXT};
use std::io::Write;

/// Consumer of frames and render commands.
///
/// Implementations own all widget or terminal state; the session only hands
/// them values.
pub trait Presenter<F: Image> {
    /// Called on every fast tick that produced a frame, with the detected
    /// landmarks for annotation.
    fn present_frame(&mut self, frame: &F, landmarks: Option<&[Point]>);

    fn render(&mut self, command: &RenderCommand);

    /// Answer a score query made outside the command stream.
    fn show_summary(&mut self, summary: &ScoreSummary) {
        log::info!("{}", summary.to_string().replace('\n', ", "));
    }
}

/// Keeps every command it receives. Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub frames: usize,
    pub annotated_frames: usize,
    pub commands: Vec<RenderCommand>,
    pub summaries: Vec<ScoreSummary>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notice toggles in the order they were rendered.
    pub fn notices(&self) -> Vec<bool> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Notice { visible, .. } => Some(*visible),
                _ => None,
            })
            .collect()
    }
}

impl<F: Image> Presenter<F> for RecordingPresenter {
    fn present_frame(&mut self, _frame: &F, landmarks: Option<&[Point]>) {
        self.frames += 1;
        if landmarks.is_some() {
            self.annotated_frames += 1;
        }
    }

    fn render(&mut self, command: &RenderCommand) {
        self.commands.push(command.clone());
    }

    fn show_summary(&mut self, summary: &ScoreSummary) {
        self.summaries.push(*summary);
    }
}

/// Line-oriented presenter for a terminal.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::warn!("failed to write to terminal: {}", e);
        }
    }
}

impl<F: Image, W: Write> Presenter<F> for TerminalPresenter<W> {
    fn present_frame(&mut self, frame: &F, landmarks: Option<&[Point]>) {
        log::trace!(
            "frame {}x{} with {} landmarks",
            frame.width(),
            frame.height(),
            landmarks.map_or(0, <[Point]>::len)
        );
    }

    fn render(&mut self, command: &RenderCommand) {
        match command {
            RenderCommand::Snapshot(snapshot) => {
                log::debug!(
                    "{} | {} | you {} comp {} ties {}",
                    snapshot.round_label(),
                    snapshot.countdown_label(),
                    snapshot.state.user_score,
                    snapshot.state.computer_score,
                    snapshot.state.ties
                );
                if snapshot.state.phase == Phase::Finished {
                    self.line(&history_line(snapshot));
                }
            }
            RenderCommand::Countdown(n) => self.line(&n.to_string()),
            RenderCommand::Go => self.line("GO!"),
            RenderCommand::RoundRecorded(round) => self.line(&format!(
                "Round {}: you {} / computer {} -> {}",
                round.round_index + 1,
                round.user,
                round.computer,
                round.outcome
            )),
            RenderCommand::Notice { visible: true, .. } => self.line(NOTICE_TEXT),
            RenderCommand::Notice { visible: false, .. } => {}
            RenderCommand::Finished(summary) => {
                self.line("Done");
                self.line(&summary.to_string());
            }
        }
    }

    fn show_summary(&mut self, summary: &ScoreSummary) {
        self.line(&summary.to_string());
    }
}

/// One `you/computer` pair per round slot, `-` for unplayed slots.
fn history_line(snapshot: &GameSnapshot) -> String {
    let slots: Vec<String> = snapshot
        .history_slots()
        .into_iter()
        .enumerate()
        .map(|(i, (user, computer))| {
            if i < snapshot.history.len() {
                format!("{}/{}", user, computer)
            } else {
                "-".to_string()
            }
        })
        .collect();
    format!("History: {}", slots.join(" "))
}

/// Writes every snapshot as one JSON line, for presenters running in
/// another process. Other render commands are already reflected in the
/// snapshot that follows them.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<F: Image, W: Write> Presenter<F> for JsonPresenter<W> {
    fn present_frame(&mut self, _frame: &F, _landmarks: Option<&[Point]>) {}

    fn render(&mut self, command: &RenderCommand) {
        let RenderCommand::Snapshot(snapshot) = command else {
            return;
        };
        match snapshot.to_json() {
            Ok(json) => {
                if let Err(e) = writeln!(self.out, "{}", json) {
                    log::warn!("failed to write snapshot: {}", e);
                }
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}
