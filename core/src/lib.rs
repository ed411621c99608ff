//! northpole-core — the deterministic state-and-randomness core of a
//! day-cycle economic simulation.
//!
//! One player-supplied seed label drives everything: the calendar,
//! the daily gold income, the hiring pools, the creature wandering.
//! Every derived quantity is replayable bit-for-bit from that label,
//! while the ledger still supports mid-run mutation (spending,
//! hiring, upgrades).
//!
//! The actual task scheduling, rendering, and audio live in other
//! crates; this one owns the state, the seed tree, and the seeded
//! sampling utilities they all share.

pub mod creature;
pub mod currency;
pub mod error;
pub mod game_state;
pub mod metrics;
pub mod range;
pub mod rng;
pub mod signal;
pub mod time;
pub mod types;
pub mod upgrade;
pub mod weighted;

pub use currency::Currency;
pub use error::{GameError, GameResult};
pub use game_state::{GameConfig, GameState};
pub use rng::SeededRandom;
