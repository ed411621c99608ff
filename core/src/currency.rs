//! Currency — the immutable cost/income value.
//!
//! A single price can charge gold, hearts, and in-game time all at
//! once. Values are never mutated; deriving a discounted or scaled
//! price builds a new one.

use crate::time::{self, SimDuration};
use crate::types::{Gold, Hearts};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub gold: Gold,
    pub hearts: Hearts,
    #[serde(with = "time::serde_millis")]
    pub duration: SimDuration,
}

impl Currency {
    pub fn new(gold: Gold, hearts: Hearts, duration: SimDuration) -> Self {
        Self {
            gold,
            hearts,
            duration,
        }
    }

    /// A gold-only price.
    pub fn gold_only(gold: Gold) -> Self {
        Self::new(gold, 0, SimDuration::zero())
    }

    /// Derive a new price from `base` scaled by `multiplier`.
    ///
    /// Gold and duration scale (rounded to nearest); hearts do NOT —
    /// heart prices are flat regardless of scaling. With
    /// `round_to_minutes` the scaled duration additionally snaps to
    /// the nearest whole minute.
    pub fn scaled(base: &Currency, multiplier: f32, round_to_minutes: bool) -> Self {
        let gold = (base.gold as f32 * multiplier).round() as Gold;
        let hearts = base.hearts;

        let mut millis = (base.duration.num_milliseconds() as f32 * multiplier).round() as i64;
        if round_to_minutes {
            millis = ((millis as f32 / 60_000.0).round() as i64) * 60_000;
        }

        Self {
            gold,
            hearts,
            duration: SimDuration::milliseconds(millis),
        }
    }
}

impl fmt::Display for Currency {
    /// Non-zero components only: `"5 gold, 2 hearts and 1:30"`.
    /// UI copy and tests both key off this exact layout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        if self.gold > 0 {
            out.push_str(&format!("{} gold", self.gold));
        }
        if self.hearts > 0 {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(&format!(
                "{} heart{}",
                self.hearts,
                if self.hearts > 1 { "s" } else { "" }
            ));
        }
        if self.duration > SimDuration::zero() {
            let minutes = self.duration.num_milliseconds() / 60_000;
            let hours = minutes / 60;
            let minutes = minutes % 60;
            if !out.is_empty() {
                out.push_str(" and ");
            }
            out.push_str(&format!("{hours}:{minutes:02}"));
        }
        f.write_str(&out)
    }
}
