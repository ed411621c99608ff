//! Day-cycle state machine: calendar boundaries, seed consumption,
//! daily income, terminal behavior.

use northpole_core::time::{self, SimDuration};
use northpole_core::upgrade::{Special, UpgradeDefinition};
use northpole_core::{GameConfig, GameError, GameState};

/// Config whose day window starts `days` before END_TIME, with santa
/// arriving `santa_lead_days` before END_TIME.
fn config_near_end(days: i64, santa_lead_days: i64) -> GameConfig {
    let end = time::end_time();
    GameConfig {
        day_start_time: end - time::one_day() * days as i32,
        santa_arrival_time: end - time::one_day() * santa_lead_days as i32,
        ..GameConfig::default()
    }
}

#[test]
fn claus_scenario() {
    // Seed "Claus", 6 whole days on the calendar, santa 3 days before
    // the end: simulation_duration is exactly 3 days.
    let config = config_near_end(6, 3);

    let mut state = GameState::new(config.clone()).expect("game state");
    assert_eq!(state.num_games(), 0, "construction is not a played game");

    state.reset_state(config).expect("reset");
    assert_eq!(state.num_games(), 1);
    assert_eq!(state.simulation_duration(), time::one_day() * 3);
    assert_eq!(state.current_time(), state.day_start_time());

    // 6 daily seeds drawn; the embedded start_day consumed one.
    assert_eq!(state.daily_random_seeds().len(), 5);

    // A plain next day adds exactly the base daily income.
    let before = state.gold();
    state.end_day();
    state.start_day().expect("start_day");
    assert_eq!(state.gold(), before + state.daily_gold());
}

#[test]
fn seed_count_rounds_partial_days_up() {
    let end = time::end_time();
    let config = GameConfig {
        day_start_time: end - time::one_day() * 2 - SimDuration::hours(12),
        santa_arrival_time: end - SimDuration::hours(1),
        ..GameConfig::default()
    };

    let state = GameState::new(config).expect("game state");
    // 2.5 days remaining => 3 seeds drawn, 1 already consumed.
    assert_eq!(state.daily_random_seeds().len(), 2);
}

#[test]
fn day_window_never_exceeds_one_day() {
    let mut state = GameState::new(GameConfig::default()).expect("game state");

    loop {
        assert!(state.day_start_time() <= state.day_end_time());
        assert!(state.day_end_time() <= time::end_time());
        assert!(
            time::elapsed(state.day_start_time(), state.day_end_time()) <= time::one_day(),
            "day window wider than 24h"
        );
        if state.day_start_time() < time::end_time() {
            assert_eq!(
                state.work_day_end_time(),
                state.day_end_time() - state.simulation_duration()
            );
        }
        if state.day_start_time() == time::end_time() {
            break;
        }
        state.end_day();
    }
}

#[test]
fn calendar_pins_to_end_time_past_the_terminal_day() {
    let mut state = GameState::new(config_near_end(2, 1)).expect("game state");

    state.end_day();
    state.end_day();
    state.end_day(); // already past END_TIME; must stay pinned

    assert_eq!(state.day_start_time(), time::end_time());
    assert_eq!(state.day_end_time(), time::end_time());
    assert_eq!(state.work_day_end_time(), time::end_time());
}

#[test]
fn start_day_fails_once_seeds_run_out() {
    let mut state = GameState::new(config_near_end(3, 1)).expect("game state");

    // 3 seeds; construction used one.
    for _ in 0..2 {
        state.end_day();
        state.start_day().expect("start_day within calendar");
    }

    state.end_day();
    let err = state.start_day().expect_err("seed queue should be empty");
    assert!(matches!(err, GameError::OutOfDailySeeds));
}

#[test]
fn compound_interest_and_extra_income_stack_in_order() {
    let config = GameConfig {
        daily_gold: 1000,
        gold: 1000,
        ..config_near_end(4, 1)
    };
    let mut state = GameState::new(config).expect("game state");
    // Construction's first day: 1000 + 1000 income.
    assert_eq!(state.gold(), 2000);

    state.add_upgrade(UpgradeDefinition::new(
        "savings bond",
        vec![Special::CompoundInterest],
    ));
    state.end_day();
    state.start_day().expect("start_day");
    // 1000 base + round(2000 * 0.5) interest.
    assert_eq!(state.gold(), 2000 + 1000 + 1000);

    state.add_upgrade(UpgradeDefinition::new(
        "side hustle",
        vec![Special::ExtraIncome],
    ));
    state.end_day();
    state.start_day().expect("start_day");
    // 1000 base + round(4000 * 0.5) + round(1000 * 1.0), both bonuses
    // against the pre-update balance and base rate.
    assert_eq!(state.gold(), 4000 + 1000 + 2000 + 1000);
}

#[test]
fn end_day_moves_the_clock_but_starts_nothing() {
    let mut state = GameState::new(GameConfig::default()).expect("game state");
    let seeds_before = state.daily_random_seeds().len();
    let day_end = state.day_end_time();

    state.end_day();

    assert_eq!(state.current_time(), day_end);
    assert_eq!(
        state.daily_random_seeds().len(),
        seeds_before,
        "end_day must not consume a daily seed"
    );
}

#[test]
fn reset_restores_a_spent_ledger() {
    let config = GameConfig::default();
    let mut state = GameState::new(config.clone()).expect("game state");

    state.add_hearts(10);
    state.add_prepper(northpole_core::creature::Creature::new(
        "Tinsel",
        1,
        northpole_core::range::MinMaxFloat::new(0.5, 1.5),
    ));
    state.add_metrics(northpole_core::metrics::Metrics::default());

    state.reset_state(config.clone()).expect("reset");

    assert_eq!(state.num_games(), 1);
    assert_eq!(state.hearts(), config.hearts);
    assert_eq!(state.gold(), config.gold + config.daily_gold);
    assert!(state.preppers().is_empty());
    assert!(state.movers().is_empty());
    assert!(state.upgrades().is_empty());
    assert!(state.metrics().is_empty());
}
