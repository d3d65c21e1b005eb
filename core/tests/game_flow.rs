use std::collections::HashSet;

use memoria_core::*;

fn distinct_two_digit(grid: &NumberGrid) -> bool {
    let numbers: HashSet<u8> = grid.iter().collect();
    numbers.len() == usize::from(grid.total_cells())
        && numbers.iter().all(|n| (MIN_NUMBER..=MAX_NUMBER).contains(n))
}

#[test]
fn easy_round_from_home_to_result() {
    let mut session = GameSession::with_seed(2024);
    let mut clock = ManualClock::new();

    session
        .select_difficulty(Difficulty::Easy)
        .timer
        .apply_to(&mut clock);
    assert!(clock.is_running());
    assert_eq!(session.phase(), GamePhase::Memorizing);
    assert_eq!(session.grid_size(), 3);
    assert_eq!(session.time_left(), 30);
    assert!(distinct_two_digit(session.numbers()));
    assert!(session.answers().iter().all(str::is_empty));

    assert_eq!(clock.advance(&mut session, 30), 30);
    assert!(!clock.is_running());
    assert_eq!(session.phase(), GamePhase::Answering);
    assert_eq!(session.time_left(), 0);

    session.edit_cell(0, 0, "42");
    session.complete();

    assert_eq!(session.phase(), GamePhase::Result);
    let report = session.report();
    assert_eq!(report.total, 9);
    let expected = if session.numbers()[(0, 0)] == 42 { 1 } else { 0 };
    assert_eq!(report.correct, expected);
    assert_eq!(session.score(), if expected == 1 { 11 } else { 0 });
}

#[test]
fn recalling_everything_scores_hundred() {
    let mut session = GameSession::with_seed(99);
    session.select_difficulty(Difficulty::Medium);
    let numbers = session.numbers().clone();
    while session.wants_ticks() {
        session.tick();
    }

    for row in 0..5 {
        for col in 0..5 {
            session.edit_cell(row, col, numbers[(row, col)].to_string());
        }
    }
    session.complete();

    assert_eq!(session.score(), 100);
    assert_eq!(session.grade(), Some(Grade::APlus));
    assert_eq!(session.report().wrong, 0);
}

#[test]
fn play_again_on_hard_reuses_the_difficulty() {
    let mut session = GameSession::with_seed(7);
    let mut clock = ManualClock::new();

    session
        .select_difficulty(Difficulty::Hard)
        .timer
        .apply_to(&mut clock);
    clock.advance(&mut session, u32::MAX);
    session.give_up();
    assert_eq!(session.score(), 0);

    session.play_again().timer.apply_to(&mut clock);

    assert_eq!(clock.starts(), 2);
    assert_eq!(session.phase(), GamePhase::Memorizing);
    assert_eq!(session.grid_size(), 7);
    assert_eq!(session.time_left(), 90);
    assert!(distinct_two_digit(session.numbers()));
}

#[test]
fn leaving_mid_countdown_stops_the_clock() {
    let mut session = GameSession::with_seed(1);
    let mut clock = ManualClock::new();

    session
        .select_difficulty(Difficulty::Medium)
        .timer
        .apply_to(&mut clock);
    clock.advance(&mut session, 10);
    assert_eq!(session.time_left(), 50);

    session.go_home().timer.apply_to(&mut clock);

    assert!(!clock.is_running());
    assert_eq!(session.phase(), GamePhase::Home);
    assert_eq!(session.difficulty(), None);
    assert_eq!(session.time_left(), 0);
    assert_eq!(session.total_cells(), 0);

    // a tick that was already in flight does nothing
    assert!(!session.tick().changed);
}
