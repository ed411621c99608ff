//! The game-state ledger and day cycle.
//!
//! RULES:
//!   - Every derived random value is a pure function of the one seed
//!     label in `GameConfig`. The seed tree below is drawn in a FIXED
//!     order; reordering any draw changes every replay.
//!   - Mutators emit their signals synchronously, after the state is
//!     fully updated, before returning.
//!   - `GameState` is exclusively owned by one coordinator. Mutators
//!     read-then-write several fields with no internal locking.
//!
//! Seed tree, drawn from `hash(overall_random_seed)` in this order:
//!   1. simulation_generation_seed      (one, reused every day)
//!   2. one daily seed per remaining day (FIFO, popped by start_day)
//!   3. simulation_random_seed          (one, reused every day)
//! Each daily seed then yields, in order: hiring seed, indoor-creature
//! seed.

use crate::creature::Creature;
use crate::currency::Currency;
use crate::error::{GameError, GameResult};
use crate::metrics::Metrics;
use crate::rng::{seed_from_label, SeededRandom};
use crate::signal::{ListenerId, Signal};
use crate::time::{self, SimDuration, SimTime};
use crate::types::{Gold, Hearts};
use crate::upgrade::{Special, UpgradeDefinition};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Share of the current gold balance a CompoundInterest special adds
/// to each day's income.
pub const COMPOUND_INTEREST: f64 = 0.5;

/// Share of the base daily income an ExtraIncome special adds again.
pub const EXTRA_INCOME: f64 = 1.0;

/// Everything needed to (re)start a game. `Default` is the shipped
/// campaign setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The sole reproducibility root.
    pub overall_random_seed: String,
    pub num_tasks: u32,
    pub santa_arrival_time: SimTime,
    pub day_start_time: SimTime,
    pub daily_gold: Gold,
    pub gold: Gold,
    pub hearts: Hearts,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            overall_random_seed: "Claus".to_string(),
            num_tasks: 200,
            santa_arrival_time: time::time_from_millis(1_640_415_600_000),
            day_start_time: time::time_from_millis(1_640_041_200_000),
            daily_gold: 1000,
            gold: 1000,
            hearts: 0,
        }
    }
}

pub struct GameState {
    config: GameConfig,

    // Calendar. work_day_end_time = day_end_time - simulation_duration.
    simulation_duration: SimDuration,
    day_start_time: SimTime,
    day_end_time: SimTime,
    work_day_end_time: SimTime,
    current_time: SimTime,

    // Ledger.
    daily_gold: Gold,
    gold: Gold,
    hearts: Hearts,

    // Rosters and history.
    preppers: Vec<Creature>,
    movers: Vec<Creature>,
    upgrades: Vec<UpgradeDefinition>,
    metrics: Vec<Metrics>,
    num_games: u32,

    // Seed tree.
    simulation_generation_seed: u64,
    simulation_generation_random: SeededRandom,
    daily_random_seeds: VecDeque<u64>,
    simulation_random_seed: u64,
    hiring_random: SeededRandom,
    simulation_random: SeededRandom,
    indoor_creature_random: SeededRandom,

    // Notification signals.
    changed: Signal,
    new_day: Signal,
    reset: Signal,
}

fn next_seed(rng: &mut SeededRandom) -> u64 {
    // Seeds stay in the non-negative 31-bit range so they survive any
    // external serialization that narrows to i32.
    rng.get_int(0, i32::MAX as i64) as u64
}

impl GameState {
    /// Construct and run the first game. Construction itself does not
    /// count as a played game: `num_games` is 0 until the first
    /// explicit `reset_state`.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let mut state = Self {
            config: config.clone(),
            simulation_duration: SimDuration::zero(),
            day_start_time: config.day_start_time,
            day_end_time: config.day_start_time,
            work_day_end_time: config.day_start_time,
            current_time: config.day_start_time,
            daily_gold: 0,
            gold: 0,
            hearts: 0,
            preppers: Vec::new(),
            movers: Vec::new(),
            upgrades: Vec::new(),
            metrics: Vec::new(),
            num_games: 0,
            simulation_generation_seed: 0,
            simulation_generation_random: SeededRandom::new(0),
            daily_random_seeds: VecDeque::new(),
            simulation_random_seed: 0,
            hiring_random: SeededRandom::new(0),
            simulation_random: SeededRandom::new(0),
            indoor_creature_random: SeededRandom::new(0),
            changed: Signal::new(),
            new_day: Signal::new(),
            reset: Signal::new(),
        };
        state.reset_state(config)?;
        state.num_games = 0;
        Ok(state)
    }

    /// Start a fresh game: replaces every collection, rebuilds the
    /// entire seed tree from the config's seed label, recomputes the
    /// calendar, and runs the first day's `start_day`. Emits `reset`
    /// then `changed` (after the embedded day-start notifications).
    pub fn reset_state(&mut self, config: GameConfig) -> GameResult<()> {
        self.num_games += 1;

        self.simulation_duration = time::elapsed(config.santa_arrival_time, time::end_time());
        self.day_start_time = config.day_start_time;
        self.daily_gold = config.daily_gold;
        self.gold = config.gold;
        self.hearts = config.hearts;
        self.config = config;

        self.preppers.clear();
        self.movers.clear();
        self.upgrades.clear();
        self.metrics.clear();

        self.generate_random_seeds();
        self.compute_day_end_time();
        self.start_day()?;

        log::info!(
            "game #{} started: seed '{}', {} daily seeds remaining",
            self.num_games,
            self.config.overall_random_seed,
            self.daily_random_seeds.len()
        );

        self.reset.emit();
        self.changed.emit();
        Ok(())
    }

    /// Draw the whole seed tree from the root. Draw order is
    /// load-bearing — see the module docs.
    fn generate_random_seeds(&mut self) {
        let mut overall = SeededRandom::new(seed_from_label(&self.config.overall_random_seed));

        self.simulation_generation_seed = next_seed(&mut overall);

        let num_days = time::days_remaining(self.day_start_time, time::end_time());
        self.daily_random_seeds.clear();
        for _ in 0..num_days {
            self.daily_random_seeds.push_back(next_seed(&mut overall));
        }

        self.simulation_random_seed = next_seed(&mut overall);
    }

    /// Begin the current day: re-seed the per-day streams, accrue the
    /// day's gold income, emit `new_day` then `changed`.
    ///
    /// Running out of daily seeds means the caller drove past the
    /// terminal day — a logic error, not a recoverable state.
    pub fn start_day(&mut self) -> GameResult<()> {
        let today_seed = self
            .daily_random_seeds
            .pop_front()
            .ok_or(GameError::OutOfDailySeeds)?;

        self.current_time = self.day_start_time;

        // Procedural generation replays identically every day.
        self.simulation_generation_random = SeededRandom::new(self.simulation_generation_seed);

        let mut today = SeededRandom::new(today_seed);
        let hiring_seed = next_seed(&mut today);
        let indoor_creature_seed = next_seed(&mut today);

        self.hiring_random = SeededRandom::new(hiring_seed);
        self.simulation_random = SeededRandom::new(self.simulation_random_seed);
        self.indoor_creature_random = SeededRandom::new(indoor_creature_seed);

        let income = self.compute_daily_gold();
        self.gold += income;

        log::debug!(
            "day started at {}: +{} gold (balance {}), {} daily seeds left",
            self.current_time,
            income,
            self.gold,
            self.daily_random_seeds.len()
        );

        self.new_day.emit();
        self.changed.emit();
        Ok(())
    }

    /// Close the current day and advance the window by 24h. Does NOT
    /// start the next day — the coordinator decides when.
    pub fn end_day(&mut self) {
        self.current_time = self.day_end_time;
        self.day_start_time = self.day_start_time + time::one_day();
        self.compute_day_end_time();
        self.changed.emit();
    }

    /// Clamp the day window to at most 24h and pin everything to
    /// `END_TIME` once the calendar runs past it.
    fn compute_day_end_time(&mut self) {
        let end = time::end_time();
        if end > self.day_start_time {
            self.day_end_time = end;
            while time::elapsed(self.day_start_time, self.day_end_time) > time::one_day() {
                self.day_end_time = self.day_end_time - time::one_day();
            }
            self.work_day_end_time = self.day_end_time - self.simulation_duration;
        } else {
            self.day_start_time = end;
            self.day_end_time = end;
            self.work_day_end_time = end;
        }
    }

    /// Today's gold income: the base daily rate plus upgrade bonuses.
    /// Upgrades and their specials apply in stored order; every bonus
    /// references the pre-update balance and base rate.
    fn compute_daily_gold(&self) -> Gold {
        let mut daily_gold = self.daily_gold;
        for upgrade in &self.upgrades {
            for special in &upgrade.specials {
                match special {
                    Special::CompoundInterest => {
                        daily_gold += (self.gold as f64 * COMPOUND_INTEREST).round() as Gold;
                    }
                    Special::ExtraIncome => {
                        daily_gold += (self.daily_gold as f64 * EXTRA_INCOME).round() as Gold;
                    }
                }
            }
        }
        daily_gold
    }

    /// Can this cost be paid right now? Duration costs must fit
    /// before the workday ends.
    pub fn have_enough_currency(&self, cost: &Currency) -> bool {
        if self.gold < cost.gold {
            return false;
        }
        if self.hearts < cost.hearts {
            return false;
        }
        let until_work_day_ends = time::elapsed(self.current_time, self.work_day_end_time);
        cost.duration <= until_work_day_ends
    }

    /// Pay a cost: subtract gold and hearts, advance the clock by the
    /// time cost. Fails without touching anything if the cost cannot
    /// be covered.
    pub fn spend_currency(&mut self, cost: &Currency) -> GameResult<()> {
        if !self.have_enough_currency(cost) {
            return Err(GameError::InsufficientCurrency {
                cost: cost.to_string(),
            });
        }

        self.gold -= cost.gold;
        self.hearts -= cost.hearts;
        self.current_time = self.current_time + cost.duration;

        log::debug!("spent {}: {} gold, {} hearts left", cost, self.gold, self.hearts);

        self.changed.emit();
        Ok(())
    }

    pub fn add_prepper(&mut self, prepper: Creature) {
        self.preppers.push(prepper);
        self.changed.emit();
    }

    pub fn add_mover(&mut self, mover: Creature) {
        self.movers.push(mover);
        self.changed.emit();
    }

    pub fn add_upgrade(&mut self, upgrade: UpgradeDefinition) {
        self.upgrades.push(upgrade);
        self.changed.emit();
    }

    /// Metrics are informational history: append-only, no signal.
    pub fn add_metrics(&mut self, metrics: Metrics) {
        self.metrics.push(metrics);
    }

    /// May be negative; clamping is the caller's policy.
    pub fn add_hearts(&mut self, hearts: Hearts) {
        self.hearts += hearts;
        self.changed.emit();
    }

    // ── Subscriptions ──────────────────────────────────────────────

    pub fn on_changed(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        self.changed.subscribe(listener)
    }

    pub fn on_new_day(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        self.new_day.subscribe(listener)
    }

    pub fn on_reset(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        self.reset.subscribe(listener)
    }

    pub fn unsubscribe_changed(&mut self, id: ListenerId) -> bool {
        self.changed.unsubscribe(id)
    }

    pub fn unsubscribe_new_day(&mut self, id: ListenerId) -> bool {
        self.new_day.unsubscribe(id)
    }

    pub fn unsubscribe_reset(&mut self, id: ListenerId) -> bool {
        self.reset.unsubscribe(id)
    }

    // ── Read accessors ─────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn overall_random_seed(&self) -> &str {
        &self.config.overall_random_seed
    }

    pub fn num_tasks(&self) -> u32 {
        self.config.num_tasks
    }

    pub fn santa_arrival_time(&self) -> SimTime {
        self.config.santa_arrival_time
    }

    pub fn simulation_duration(&self) -> SimDuration {
        self.simulation_duration
    }

    pub fn day_start_time(&self) -> SimTime {
        self.day_start_time
    }

    pub fn day_end_time(&self) -> SimTime {
        self.day_end_time
    }

    pub fn work_day_end_time(&self) -> SimTime {
        self.work_day_end_time
    }

    pub fn current_time(&self) -> SimTime {
        self.current_time
    }

    pub fn daily_gold(&self) -> Gold {
        self.daily_gold
    }

    pub fn gold(&self) -> Gold {
        self.gold
    }

    pub fn hearts(&self) -> Hearts {
        self.hearts
    }

    pub fn preppers(&self) -> &[Creature] {
        &self.preppers
    }

    pub fn movers(&self) -> &[Creature] {
        &self.movers
    }

    pub fn upgrades(&self) -> &[UpgradeDefinition] {
        &self.upgrades
    }

    pub fn metrics(&self) -> &[Metrics] {
        &self.metrics
    }

    pub fn num_games(&self) -> u32 {
        self.num_games
    }

    pub fn simulation_generation_seed(&self) -> u64 {
        self.simulation_generation_seed
    }

    pub fn simulation_random_seed(&self) -> u64 {
        self.simulation_random_seed
    }

    pub fn daily_random_seeds(&self) -> &VecDeque<u64> {
        &self.daily_random_seeds
    }

    /// Fractional days between now and the end of the game.
    pub fn days_remaining(&self) -> f64 {
        time::elapsed(self.current_time, time::end_time()).num_milliseconds() as f64
            / time::ONE_DAY_MILLIS as f64
    }

    // ── Per-day streams ────────────────────────────────────────────
    //
    // Each stream belongs to one subsystem for one day; none may be
    // shared across days once start_day has re-seeded them.

    pub fn simulation_generation_random(&mut self) -> &mut SeededRandom {
        &mut self.simulation_generation_random
    }

    pub fn hiring_random(&mut self) -> &mut SeededRandom {
        &mut self.hiring_random
    }

    pub fn simulation_random(&mut self) -> &mut SeededRandom {
        &mut self.simulation_random
    }

    pub fn indoor_creature_random(&mut self) -> &mut SeededRandom {
        &mut self.indoor_creature_random
    }
}
