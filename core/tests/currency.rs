//! Currency values, scaling, display, and the spend transaction.

use northpole_core::time::{self, SimDuration};
use northpole_core::{Currency, GameConfig, GameError, GameState};

// ── Value semantics ──────────────────────────────────────────────────

#[test]
fn scaling_multiplies_gold_and_duration_but_not_hearts() {
    let base = Currency::new(10, 3, SimDuration::minutes(10));
    let scaled = Currency::scaled(&base, 1.5, false);

    assert_eq!(scaled.gold, 15);
    assert_eq!(scaled.hearts, 3, "heart prices are flat");
    assert_eq!(scaled.duration, SimDuration::minutes(15));
}

#[test]
fn scaling_can_snap_to_whole_minutes() {
    let base = Currency::new(0, 0, SimDuration::seconds(100));
    let snapped = Currency::scaled(&base, 1.0, true);
    // 100s = 1.67 minutes, nearest whole minute is 2.
    assert_eq!(snapped.duration, SimDuration::minutes(2));

    let unsnapped = Currency::scaled(&base, 1.0, false);
    assert_eq!(unsnapped.duration, SimDuration::seconds(100));
}

#[test]
fn display_renders_only_nonzero_components() {
    let zero = SimDuration::zero();
    assert_eq!(Currency::new(5, 0, zero).to_string(), "5 gold");
    assert_eq!(Currency::new(0, 1, zero).to_string(), "1 heart");
    assert_eq!(Currency::new(0, 2, zero).to_string(), "2 hearts");
    assert_eq!(Currency::new(5, 1, zero).to_string(), "5 gold, 1 heart");
    assert_eq!(
        Currency::new(3, 0, SimDuration::minutes(90)).to_string(),
        "3 gold and 1:30"
    );
    assert_eq!(
        Currency::new(2, 1, SimDuration::minutes(60)).to_string(),
        "2 gold, 1 heart and 1:00"
    );
    assert_eq!(
        Currency::new(0, 0, SimDuration::minutes(5)).to_string(),
        "0:05"
    );
    assert_eq!(Currency::new(0, 0, zero).to_string(), "");
}

// ── Spending ─────────────────────────────────────────────────────────

/// Two calendar days left, santa one hour before the end: the first
/// workday runs from END-2d to END-1d-1h, so 23h of spendable time.
fn spending_config() -> GameConfig {
    let end = time::end_time();
    GameConfig {
        day_start_time: end - time::one_day() * 2,
        santa_arrival_time: end - SimDuration::hours(1),
        gold: 1000,
        hearts: 5,
        daily_gold: 0,
        ..GameConfig::default()
    }
}

#[test]
fn spend_subtracts_and_advances_the_clock() {
    let mut state = GameState::new(spending_config()).expect("game state");
    let t0 = state.current_time();

    let cost = Currency::new(300, 2, SimDuration::hours(2));
    assert!(state.have_enough_currency(&cost));
    state.spend_currency(&cost).expect("spend");

    assert_eq!(state.gold(), 700);
    assert_eq!(state.hearts(), 3);
    assert_eq!(state.current_time(), t0 + SimDuration::hours(2));
}

#[test]
fn spend_fails_when_time_runs_past_the_workday() {
    let mut state = GameState::new(spending_config()).expect("game state");
    let t0 = state.current_time();

    // 23h available, 24h requested.
    let cost = Currency::new(0, 0, SimDuration::hours(24));
    assert!(!state.have_enough_currency(&cost));

    let err = state.spend_currency(&cost).expect_err("must fail");
    assert!(matches!(err, GameError::InsufficientCurrency { .. }));
    assert_eq!(state.gold(), 1000, "failed spend must not touch gold");
    assert_eq!(state.hearts(), 5, "failed spend must not touch hearts");
    assert_eq!(state.current_time(), t0, "failed spend must not move time");
}

#[test]
fn spend_fails_on_gold_or_hearts_shortfall() {
    let mut state = GameState::new(spending_config()).expect("game state");

    let too_much_gold = Currency::new(1001, 0, SimDuration::zero());
    assert!(state.spend_currency(&too_much_gold).is_err());

    let too_many_hearts = Currency::new(0, 6, SimDuration::zero());
    assert!(state.spend_currency(&too_many_hearts).is_err());

    // The exact balance is spendable, and never goes negative.
    let everything = Currency::new(1000, 5, SimDuration::zero());
    state.spend_currency(&everything).expect("exact spend");
    assert_eq!(state.gold(), 0);
    assert_eq!(state.hearts(), 0);
}

#[test]
fn hearts_can_be_granted_and_docked() {
    let mut state = GameState::new(spending_config()).expect("game state");

    state.add_hearts(3);
    assert_eq!(state.hearts(), 8);
    state.add_hearts(-8);
    assert_eq!(state.hearts(), 0);
}
