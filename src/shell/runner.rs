//! Single-task event loop driving a session from timers and controls.

use super::controls::Control;
use super::presenter::Presenter;
use super::session::Session;
use super::source::CapabilitySource;
use crate::core::Phase;
use crate::game::{AdvanceTimer, ScoreSummary};
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Return as soon as a game reaches `Finished`
    pub exit_on_finish: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            exit_on_finish: true,
        }
    }
}

/// Drive `session` until `Quit`, or until the game finishes when
/// `exit_on_finish` is set.
///
/// The fast tick polls frames, the slow tick runs the countdown, and the
/// round-end delay is a one-shot sleep re-armed per round. Nothing blocks;
/// all work happens on the calling task. The session is released before
/// returning.
pub async fn run<S, P>(
    session: &mut Session<S, P>,
    mut controls: mpsc::UnboundedReceiver<Control>,
    options: RunOptions,
) -> ScoreSummary
where
    S: CapabilitySource,
    P: Presenter<S::Frame>,
{
    let config = session.config().clone();
    let mut fast = time::interval(config.fast_tick);
    fast.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut slow = time::interval_at(Instant::now() + config.slow_tick, config.slow_tick);
    slow.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let advance_sleep = time::sleep(config.round_end_delay);
    tokio::pin!(advance_sleep);
    let mut advance: Option<AdvanceTimer> = None;
    let mut controls_open = true;

    loop {
        if options.exit_on_finish && session.phase().is_final() {
            log::info!("game over, leaving event loop");
            break;
        }

        let (timer, countdown_restarted) = tokio::select! {
            _ = fast.tick() => (session.on_fast_tick(), false),
            _ = slow.tick() => (session.on_slow_tick(), false),
            () = &mut advance_sleep, if advance.is_some() => {
                let token = advance.take().map(|t| t.token).unwrap_or_default();
                let timer = session.on_round_end_elapsed(token);
                (timer, session.phase() == Phase::Countdown)
            }
            control = controls.recv(), if controls_open => match control {
                None => {
                    log::debug!("control channel closed");
                    controls_open = false;
                    (None, false)
                }
                Some(Control::Quit) => {
                    log::info!("quit requested");
                    break;
                }
                Some(Control::Start) => {
                    advance = None;
                    (session.start(), true)
                }
                Some(Control::Pause) => (session.pause(), false),
                Some(Control::Resume) => {
                    let was_paused = session.machine().state().paused;
                    let timer = session.resume();
                    (timer, was_paused && !session.machine().state().paused)
                }
                Some(Control::TogglePause) => {
                    let was_paused = session.machine().state().paused;
                    let timer = session.toggle_pause();
                    (timer, was_paused && !session.machine().state().paused)
                }
                Some(Control::Summary) => {
                    session.show_summary();
                    (None, false)
                }
            },
        };

        if let Some(timer) = timer {
            advance_sleep.as_mut().reset(Instant::now() + timer.after);
            advance = Some(timer);
        }
        // A fresh or resumed countdown gets a full interval before its first tick.
        if countdown_restarted {
            slow.reset();
        }
    }

    let summary = session.machine().summary();
    session.release();
    summary
}
