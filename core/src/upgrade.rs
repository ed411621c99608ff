//! Upgrade definitions and their tagged special effects.

use serde::{Deserialize, Serialize};

/// Special effects an upgrade can carry. The income math in
/// `GameState::compute_daily_gold` dispatches on these tags.
/// Variants are added over time — never removed or reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Special {
    /// Each day, adds 50% of the current gold balance to that day's income.
    CompoundInterest,
    /// Each day, adds 100% of the base daily income again.
    ExtraIncome,
}

/// A purchasable upgrade. Owned upgrades live in a plain `Vec` on the
/// game state — insertion order preserved, duplicates permitted — so
/// they serialize trivially.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDefinition {
    pub name: String,
    pub specials: Vec<Special>,
}

impl UpgradeDefinition {
    pub fn new(name: impl Into<String>, specials: Vec<Special>) -> Self {
        Self {
            name: name.into(),
            specials,
        }
    }
}
