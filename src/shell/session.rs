//! A game wired to its capability source and presenter.

use super::presenter::Presenter;
use super::source::{CapabilitySource, Image};
use crate::config::GameConfig;
use crate::core::{classify, Phase};
use crate::game::{AdvanceTimer, Command, GameMachine, ScoreSummary};

/// Owns the machine, the source and the presenter for one window's life.
///
/// Each input forwards render commands to the presenter and hands back the
/// round-advance timer, if the input scheduled one, for the event loop to
/// arm. The source is released when the session is dropped, whatever phase
/// the game was in.
pub struct Session<S: CapabilitySource, P: Presenter<S::Frame>> {
    machine: GameMachine,
    source: S,
    presenter: P,
    released: bool,
}

impl<S: CapabilitySource, P: Presenter<S::Frame>> Session<S, P> {
    pub fn new(config: GameConfig, source: S, presenter: P) -> Self {
        Self {
            machine: GameMachine::new(config),
            source,
            presenter,
            released: false,
        }
    }

    pub fn machine(&self) -> &GameMachine {
        &self.machine
    }

    pub fn config(&self) -> &GameConfig {
        self.machine.config()
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn start(&mut self) -> Option<AdvanceTimer> {
        let commands = self.machine.start();
        self.dispatch(commands)
    }

    pub fn pause(&mut self) -> Option<AdvanceTimer> {
        let commands = self.machine.pause();
        self.dispatch(commands)
    }

    pub fn resume(&mut self) -> Option<AdvanceTimer> {
        let commands = self.machine.resume();
        self.dispatch(commands)
    }

    pub fn toggle_pause(&mut self) -> Option<AdvanceTimer> {
        let commands = self.machine.toggle_pause();
        self.dispatch(commands)
    }

    /// Poll one frame, show it, and classify it if a capture is wanted.
    ///
    /// A missing frame or a frame with no hand is skipped silently; the
    /// capture is retried on the next tick.
    pub fn on_fast_tick(&mut self) -> Option<AdvanceTimer> {
        if self.released {
            return None;
        }
        let Some(frame) = self.source.next_frame() else {
            log::trace!("no frame this tick");
            return None;
        };
        let landmarks = self.source.detect_hand_landmarks(&frame);
        self.presenter.present_frame(&frame, landmarks.as_deref());

        if !self.machine.on_fast_tick() {
            return None;
        }
        let Some(landmarks) = landmarks else {
            log::trace!("no hand in frame, capture retried next tick");
            return None;
        };
        let gesture = classify(&landmarks, frame.width(), frame.height());
        let commands = self.machine.on_capture_result(gesture);
        self.dispatch(commands)
    }

    pub fn on_slow_tick(&mut self) -> Option<AdvanceTimer> {
        let commands = self.machine.on_slow_tick();
        self.dispatch(commands)
    }

    pub fn on_round_end_elapsed(&mut self, token: u64) -> Option<AdvanceTimer> {
        let commands = self.machine.on_round_end_elapsed(token);
        self.dispatch(commands)
    }

    /// Show the current score outside the command stream.
    pub fn show_summary(&mut self) -> ScoreSummary {
        let summary = self.machine.summary();
        self.presenter.show_summary(&summary);
        summary
    }

    /// Release the capability source. Later calls do nothing.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.source.release();
        }
    }

    fn dispatch(&mut self, commands: Vec<Command>) -> Option<AdvanceTimer> {
        let mut timer = None;
        for command in commands {
            match command {
                Command::Render(render) => self.presenter.render(&render),
                Command::ScheduleAdvance(t) => timer = Some(t),
            }
        }
        timer
    }
}

impl<S: CapabilitySource, P: Presenter<S::Frame>> Drop for Session<S, P> {
    fn drop(&mut self) {
        self.release();
    }
}
