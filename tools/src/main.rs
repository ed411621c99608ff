//! sim-runner: headless day-cycle runner for the northpole core.
//!
//! Usage:
//!   sim-runner --seed Claus --days 5 --gold 1000 --daily-gold 1000

use anyhow::Result;
use northpole_core::{time, GameConfig, GameState};
use std::cell::Cell;
use std::env;
use std::rc::Rc;
use std::str::FromStr;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", "Claus".to_string());
    let max_days = parse_arg(&args, "--days", u32::MAX);
    let gold = parse_arg(&args, "--gold", 1000i64);
    let daily_gold = parse_arg(&args, "--daily-gold", 1000i64);

    println!("northpole — sim-runner");
    println!("  seed:       {seed}");
    println!("  gold:       {gold}");
    println!("  daily gold: {daily_gold}");
    println!();

    let config = GameConfig {
        overall_random_seed: seed,
        daily_gold,
        gold,
        ..GameConfig::default()
    };

    let days_played = Rc::new(Cell::new(0u32));
    let counter = days_played.clone();

    let mut state = GameState::new(config.clone())?;
    state.on_new_day(move || counter.set(counter.get() + 1));
    // Game #1 proper. Construction above doesn't count.
    state.reset_state(config)?;

    while days_played.get() < max_days && !state.daily_random_seeds().is_empty() {
        state.end_day();
        state.start_day()?;
        log::info!(
            "day {} done: {} gold, {} hearts",
            days_played.get(),
            state.gold(),
            state.hearts()
        );
    }

    let summary = serde_json::json!({
        "seed": state.overall_random_seed(),
        "num_games": state.num_games(),
        "days_played": days_played.get(),
        "days_remaining": state.days_remaining(),
        "gold": state.gold(),
        "hearts": state.hearts(),
        "preppers": state.preppers().len(),
        "movers": state.movers().len(),
        "upgrades": state.upgrades().len(),
        "at_end": state.day_start_time() == time::end_time(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn parse_arg<T: FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
