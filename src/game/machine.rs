//! Round state machine driven by explicit tick and capture inputs.

use super::command::{AdvanceTimer, Command, RenderCommand};
use super::snapshot::{GameSnapshot, GameState, ScoreSummary};
use crate::config::GameConfig;
use crate::core::{Gesture, Outcome, Phase, RoundHistory, RoundResult};
use std::time::Duration;

/// Owns the single `GameState` and every transition on it.
///
/// Inputs return the commands they produce; the machine itself never
/// touches a clock, a frame or a widget.
///
/// # Example
///
/// ```rust
/// use gesture_rps::config::GameConfig;
/// use gesture_rps::core::{Gesture, Phase};
/// use gesture_rps::game::GameMachine;
///
/// let mut machine = GameMachine::new(GameConfig::default());
/// machine.start();
/// for _ in 0..3 {
///     machine.on_slow_tick();
/// }
/// assert_eq!(machine.phase(), Phase::Capturing);
///
/// machine.on_capture_result(Gesture::Rock);
/// assert_eq!(machine.state().computer_score, 1);
/// ```
pub struct GameMachine {
    config: GameConfig,
    state: GameState,
    history: RoundHistory,
    pending_advance: Option<u64>,
    next_token: u64,
}

impl GameMachine {
    /// Create a machine in `Idle`.
    pub fn new(config: GameConfig) -> Self {
        let history = RoundHistory::new(config.max_rounds);
        Self {
            config,
            state: GameState::default(),
            history,
            pending_advance: None,
            next_token: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Whether the machine is waiting for a classifier verdict.
    pub fn is_capturing(&self) -> bool {
        self.state.phase == Phase::Capturing
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.state,
            self.config.max_rounds,
            self.history.rounds().to_vec(),
        )
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(&self.state, self.config.max_rounds)
    }

    /// Start a new game from any phase, discarding the current one.
    pub fn start(&mut self) -> Vec<Command> {
        if self.pending_advance.take().is_some() {
            log::debug!("dropping pending round advance");
        }
        self.history = RoundHistory::new(self.config.max_rounds);
        self.state = GameState {
            countdown_remaining: self.config.countdown_ticks,
            ..GameState::default()
        };
        log::info!("starting game of {} rounds", self.config.max_rounds);
        self.enter(Phase::Countdown);

        vec![
            self.render_snapshot(),
            Command::Render(RenderCommand::Countdown(self.state.countdown_remaining)),
        ]
    }

    /// Freeze the countdown. Ignored unless a game is running.
    pub fn pause(&mut self) -> Vec<Command> {
        self.set_paused(true)
    }

    /// Let the countdown run again. Ignored unless a game is running.
    pub fn resume(&mut self) -> Vec<Command> {
        self.set_paused(false)
    }

    pub fn toggle_pause(&mut self) -> Vec<Command> {
        self.set_paused(!self.state.paused)
    }

    fn set_paused(&mut self, paused: bool) -> Vec<Command> {
        if !self.state.phase.is_active() || self.state.paused == paused {
            return Vec::new();
        }
        self.state.paused = paused;
        log::debug!(
            "{} in {}",
            if paused { "paused" } else { "resumed" },
            self.state.phase.name()
        );
        vec![self.render_snapshot()]
    }

    /// Frame polling happens in the shell; the machine only tells it
    /// whether a verdict is wanted.
    pub fn on_fast_tick(&self) -> bool {
        self.is_capturing()
    }

    /// Advance the countdown by one tick.
    pub fn on_slow_tick(&mut self) -> Vec<Command> {
        if self.state.phase != Phase::Countdown || self.state.paused {
            return Vec::new();
        }
        self.state.countdown_remaining = self.state.countdown_remaining.saturating_sub(1);

        if self.state.countdown_remaining == 0 {
            self.enter(Phase::Capturing);
            vec![Command::Render(RenderCommand::Go), self.render_snapshot()]
        } else {
            vec![
                Command::Render(RenderCommand::Countdown(self.state.countdown_remaining)),
                self.render_snapshot(),
            ]
        }
    }

    /// Score the classifier's verdict for the current round.
    ///
    /// Only the first verdict after the countdown counts; anything arriving
    /// outside `Capturing` is dropped.
    pub fn on_capture_result(&mut self, gesture: Gesture) -> Vec<Command> {
        if self.state.phase != Phase::Capturing {
            log::trace!("ignoring {} capture in {}", gesture, self.state.phase.name());
            return Vec::new();
        }

        let round = RoundResult::play(self.history.len(), gesture);
        let Some(history) = self.history.record(round.clone()) else {
            log::warn!("round history full, ending game");
            return self.finish();
        };
        self.history = history;
        self.state.rounds_played = self.history.len();
        match round.outcome {
            Outcome::User => self.state.user_score += 1,
            Outcome::Computer => self.state.computer_score += 1,
            Outcome::Tie => self.state.ties += 1,
        }
        log::info!(
            "round {}: user {} vs computer {} -> {}",
            round.round_index + 1,
            round.user,
            round.computer,
            round.outcome
        );

        let token = self.next_token;
        self.next_token += 1;
        self.pending_advance = Some(token);
        self.enter(Phase::RoundEnd);

        let mut commands = vec![Command::Render(RenderCommand::RoundRecorded(round))];
        if !gesture.is_known() {
            self.state.notice_visible = true;
            commands.push(Command::Render(RenderCommand::Notice {
                visible: true,
                window: self.config.round_end_delay,
            }));
        }
        commands.push(self.render_snapshot());
        commands.push(Command::ScheduleAdvance(AdvanceTimer {
            token,
            after: self.config.round_end_delay,
        }));
        commands
    }

    /// The round-end delay for `token` has elapsed.
    ///
    /// Timers left over from a game that has since been restarted carry a
    /// stale token and are ignored.
    pub fn on_round_end_elapsed(&mut self, token: u64) -> Vec<Command> {
        if self.state.phase != Phase::RoundEnd || self.pending_advance != Some(token) {
            log::warn!("ignoring stale round advance {}", token);
            return Vec::new();
        }
        self.pending_advance = None;

        let mut commands = Vec::new();
        if self.state.notice_visible {
            self.state.notice_visible = false;
            commands.push(Command::Render(RenderCommand::Notice {
                visible: false,
                window: Duration::ZERO,
            }));
        }

        if self.state.rounds_played >= self.config.max_rounds {
            commands.extend(self.finish());
        } else {
            self.state.countdown_remaining = self.config.countdown_ticks;
            self.enter(Phase::Countdown);
            commands.push(Command::Render(RenderCommand::Countdown(
                self.state.countdown_remaining,
            )));
            commands.push(self.render_snapshot());
        }
        commands
    }

    fn finish(&mut self) -> Vec<Command> {
        self.pending_advance = None;
        self.enter(Phase::Finished);
        let summary = self.summary();
        log::info!(
            "game finished: user {} computer {} ties {}",
            summary.user,
            summary.computer,
            summary.ties
        );
        vec![
            self.render_snapshot(),
            Command::Render(RenderCommand::Finished(summary)),
        ]
    }

    fn enter(&mut self, phase: Phase) {
        log::debug!("{} -> {}", self.state.phase.name(), phase.name());
        self.state.phase = phase;
        self.debug_check();
    }

    fn render_snapshot(&self) -> Command {
        Command::Render(RenderCommand::Snapshot(self.snapshot()))
    }

    fn debug_check(&self) {
        let s = &self.state;
        debug_assert_eq!(s.rounds_played, self.history.len());
        debug_assert!(s.rounds_played <= self.config.max_rounds);
        debug_assert_eq!(s.user_score, self.history.count(Outcome::User));
        debug_assert_eq!(s.computer_score, self.history.count(Outcome::Computer));
        debug_assert_eq!(s.ties, self.history.count(Outcome::Tie));
        debug_assert!(!s.phase.is_final() || s.rounds_played == self.config.max_rounds);
    }
}
