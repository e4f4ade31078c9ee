//! End-to-end rounds through a session, from landmarks to render commands.

use gesture_rps::config::GameConfig;
use gesture_rps::core::{Gesture, Outcome, Phase, Point, FINGER_JOINTS, FINGER_TIPS, HAND_LANDMARKS};
use gesture_rps::game::RenderCommand;
use gesture_rps::shell::{RecordingPresenter, ReplayFrame, ReplaySource, Session};

/// Hand with the given digits raised, thumb first.
fn hand(extended: [bool; 5]) -> Vec<Point> {
    let mut points = vec![Point::new(0.5, 0.9); HAND_LANDMARKS];
    for (finger, &up) in extended.iter().enumerate() {
        let column = 0.2 + finger as f32 * 0.15;
        points[FINGER_JOINTS[finger]] = Point::new(column, 0.5);
        points[FINGER_TIPS[finger]] = match (finger, up) {
            (0, true) => Point::new(column - 0.1, 0.5),
            (0, false) => Point::new(column + 0.1, 0.5),
            (_, true) => Point::new(column, 0.3),
            (_, false) => Point::new(column, 0.6),
        };
    }
    points
}

fn frame(extended: [bool; 5]) -> Option<ReplayFrame> {
    Some(ReplayFrame::new(1280, 720, Some(hand(extended))))
}

const ROCK: [bool; 5] = [false; 5];
const PAPER: [bool; 5] = [true; 5];
const ONE_FINGER: [bool; 5] = [false, true, false, false, false];

type TestSession = Session<ReplaySource, RecordingPresenter>;

/// Count down, capture from the next frame, and let the round end.
fn play_round(session: &mut TestSession) {
    for _ in 0..session.config().countdown_ticks {
        session.on_slow_tick();
    }
    let timer = loop {
        if let Some(timer) = session.on_fast_tick() {
            break timer;
        }
    };
    session.on_round_end_elapsed(timer.token);
}

#[test]
fn alternating_rock_and_paper_loses_every_round() {
    let source = ReplaySource::from_frames(vec![frame(ROCK), frame(PAPER)]);
    let mut session = Session::new(GameConfig::default(), source, RecordingPresenter::new());
    session.start();

    for _ in 0..8 {
        play_round(&mut session);
    }

    let machine = session.machine();
    assert_eq!(machine.phase(), Phase::Finished);
    assert_eq!(machine.state().rounds_played, 8);
    assert_eq!(machine.state().computer_score, 8);

    let users: Vec<_> = machine.history().rounds().iter().map(|r| r.user).collect();
    assert_eq!(
        users,
        [Gesture::Rock, Gesture::Paper].repeat(4),
        "each capture reads the frame after the previous one"
    );

    assert!(matches!(
        session.presenter().commands.last(),
        Some(RenderCommand::Finished(summary)) if summary.computer == 8
    ));
}

#[test]
fn unreadable_hand_scores_for_the_player() {
    let source = ReplaySource::from_frames(vec![frame(ONE_FINGER)]);
    let mut session = Session::new(GameConfig::default(), source, RecordingPresenter::new());
    session.start();

    play_round(&mut session);

    let state = *session.machine().state();
    assert_eq!(state.user_score, 1);
    assert!(!state.notice_visible);
    assert_eq!(session.presenter().notices(), vec![true, false]);
    assert_eq!(
        session.machine().history().last().map(|r| r.outcome),
        Some(Outcome::User)
    );
}

#[test]
fn restart_after_finish_clears_the_board() {
    let config = GameConfig::builder().max_rounds(2).build().unwrap();
    let source = ReplaySource::from_frames(vec![frame(PAPER)]);
    let mut session = Session::new(config, source, RecordingPresenter::new());
    session.start();
    play_round(&mut session);
    play_round(&mut session);
    assert_eq!(session.phase(), Phase::Finished);

    session.start();

    let snapshot = session.machine().snapshot();
    assert_eq!(snapshot.state.phase, Phase::Countdown);
    assert_eq!(snapshot.state.rounds_played, 0);
    assert!(snapshot.history.is_empty());
    assert_eq!(snapshot.round_label(), "Round: 1/2");
}

#[test]
fn recording_from_disk_drives_a_round() {
    let path = std::env::temp_dir().join(format!("gesture-rps-{}.jsonl", std::process::id()));
    let record = serde_json::to_string(&frame(ROCK)).unwrap();
    std::fs::write(&path, format!("null\n{}\n", record)).unwrap();

    let source = ReplaySource::open(&path).unwrap();
    let mut session = Session::new(GameConfig::default(), source, RecordingPresenter::new());
    session.start();
    play_round(&mut session);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        session.machine().history().last().map(|r| r.user),
        Some(Gesture::Rock)
    );
}
