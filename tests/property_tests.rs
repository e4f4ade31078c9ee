//! Property-based tests for the classifier, resolver and round machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use gesture_rps::config::GameConfig;
use gesture_rps::core::{
    classify, computer_move, count_extended_fingers, resolve, Gesture, Outcome, Phase, Point,
    HAND_LANDMARKS,
};
use gesture_rps::game::{Command, GameMachine};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Input {
    Start,
    Pause,
    Resume,
    SlowTick,
    Capture(Gesture),
    /// Fire the most recent round-end timer
    Elapse,
    /// Fire a timer with a token that was never handed out
    StaleElapse,
}

prop_compose! {
    fn arbitrary_gesture()(variant in 0..4u8) -> Gesture {
        match variant {
            0 => Gesture::Rock,
            1 => Gesture::Paper,
            2 => Gesture::Scissors,
            _ => Gesture::Unknown,
        }
    }
}

prop_compose! {
    fn known_gesture()(variant in 0..3u8) -> Gesture {
        Gesture::KNOWN[variant as usize]
    }
}

prop_compose! {
    fn arbitrary_point()(x in 0.0f32..1.0, y in 0.0f32..1.0) -> Point {
        Point::new(x, y)
    }
}

fn arbitrary_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        1 => Just(Input::Start),
        1 => Just(Input::Pause),
        2 => Just(Input::Resume),
        6 => Just(Input::SlowTick),
        4 => arbitrary_gesture().prop_map(Input::Capture),
        4 => Just(Input::Elapse),
        1 => Just(Input::StaleElapse),
    ]
}

fn assert_invariants(machine: &GameMachine) -> Result<(), TestCaseError> {
    let state = machine.state();
    let max = machine.config().max_rounds;
    prop_assert_eq!(
        state.user_score + state.computer_score + state.ties,
        state.rounds_played
    );
    prop_assert_eq!(state.rounds_played, machine.history().len());
    prop_assert!(state.rounds_played <= max);
    if state.phase.is_final() {
        prop_assert_eq!(state.rounds_played, max);
    }
    if state.notice_visible {
        prop_assert_eq!(state.phase, Phase::RoundEnd);
    }
    Ok(())
}

proptest! {
    #[test]
    fn resolve_is_antisymmetric(a in known_gesture(), b in known_gesture()) {
        prop_assert_eq!(resolve(a, b), resolve(b, a).swapped());
    }

    #[test]
    fn counter_pick_beats_every_known_gesture(g in known_gesture()) {
        prop_assert_eq!(resolve(g, computer_move(g)), Outcome::Computer);
    }

    #[test]
    fn unknown_is_always_a_user_win(g in arbitrary_gesture()) {
        prop_assert_eq!(resolve(Gesture::Unknown, g), Outcome::User);
        prop_assert_eq!(resolve(g, Gesture::Unknown), Outcome::User);
    }

    #[test]
    fn classifier_is_total(
        points in prop::collection::vec(arbitrary_point(), 0..30),
        width in 0u32..2000,
        height in 0u32..2000,
    ) {
        let gesture = classify(&points, width, height);
        if points.len() < HAND_LANDMARKS || width == 0 || height == 0 {
            prop_assert_eq!(gesture, Gesture::Unknown);
        } else {
            let count = count_extended_fingers(&points, width, height).unwrap();
            prop_assert!(count <= 5);
        }
    }

    #[test]
    fn classifier_is_deterministic(
        points in prop::collection::vec(arbitrary_point(), HAND_LANDMARKS),
    ) {
        prop_assert_eq!(classify(&points, 640, 480), classify(&points, 640, 480));
    }

    #[test]
    fn invariants_hold_for_any_input_sequence(
        inputs in prop::collection::vec(arbitrary_input(), 0..200),
    ) {
        let mut machine = GameMachine::new(GameConfig::default());
        let mut last_token = None;

        for input in inputs {
            let commands = match input {
                Input::Start => machine.start(),
                Input::Pause => machine.pause(),
                Input::Resume => machine.resume(),
                Input::SlowTick => machine.on_slow_tick(),
                Input::Capture(g) => machine.on_capture_result(g),
                Input::Elapse => match last_token {
                    Some(token) => machine.on_round_end_elapsed(token),
                    None => Vec::new(),
                },
                Input::StaleElapse => machine.on_round_end_elapsed(u64::MAX),
            };
            if let Some(timer) = commands.iter().find_map(Command::as_timer) {
                last_token = Some(timer.token);
            }
            assert_invariants(&machine)?;
        }
    }

    #[test]
    fn paused_countdown_never_moves(ticks in 1usize..50) {
        let mut machine = GameMachine::new(GameConfig::default());
        machine.start();
        machine.pause();
        for _ in 0..ticks {
            machine.on_slow_tick();
        }
        prop_assert_eq!(machine.state().countdown_remaining, 3);
        prop_assert_eq!(machine.phase(), Phase::Countdown);
    }
}
