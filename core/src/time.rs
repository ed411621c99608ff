//! Calendar points and durations.
//!
//! The whole game runs against wall-clock instants, not ticks: every
//! day window is a pair of UTC timestamps and every action cost is a
//! duration. Everything here is a thin layer over chrono.
//!
//! Invariant, everywhere: `day_start_time <= day_end_time <= END_TIME`.

use chrono::{DateTime, Duration, Utc};

/// A point on the game calendar.
pub type SimTime = DateTime<Utc>;

/// A span between two calendar points. Signed.
pub type SimDuration = Duration;

/// The terminal instant of every game: December 25th, midnight
/// (stored as milliseconds since the Unix epoch).
pub const END_TIME_MILLIS: i64 = 1_640_419_200_000;

/// One full in-game day.
pub const ONE_DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// The fixed end-of-game instant.
pub fn end_time() -> SimTime {
    time_from_millis(END_TIME_MILLIS)
}

/// A 24-hour duration.
pub fn one_day() -> SimDuration {
    SimDuration::milliseconds(ONE_DAY_MILLIS)
}

/// Build a calendar point from epoch milliseconds.
pub fn time_from_millis(millis: i64) -> SimTime {
    DateTime::from_timestamp_millis(millis).expect("epoch millis out of chrono range")
}

/// Signed span from `from` to `to`. Negative when `to` precedes `from`.
pub fn elapsed(from: SimTime, to: SimTime) -> SimDuration {
    to - from
}

/// How many whole-or-partial days remain between `from` and `to`.
/// Zero when `from` is at or past `to`.
pub fn days_remaining(from: SimTime, to: SimTime) -> u32 {
    let remaining = elapsed(from, to).num_milliseconds();
    if remaining <= 0 {
        return 0;
    }
    ((remaining + ONE_DAY_MILLIS - 1) / ONE_DAY_MILLIS) as u32
}

/// Serde adapter for duration fields: (de)serializes as epoch-style
/// millisecond counts, since chrono's `Duration` has no serde impl.
pub mod serde_millis {
    use super::SimDuration;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(d: &SimDuration, s: S) -> Result<S::Ok, S::Error> {
        d.num_milliseconds().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<SimDuration, D::Error> {
        Ok(SimDuration::milliseconds(i64::deserialize(d)?))
    }
}
