//! Creature records — the roster members `GameState` tracks.
//!
//! The core stores these and nothing more; behavior (pathing,
//! animation, task execution) lives in the simulation and view
//! layers.

use crate::range::MinMaxFloat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    /// How many times this creature has been leveled up.
    pub num_levels: u32,
    /// Movement speed band, sampled per trip by the view layer.
    pub move_speed: MinMaxFloat,
}

impl Creature {
    pub fn new(name: impl Into<String>, num_levels: u32, move_speed: MinMaxFloat) -> Self {
        Self {
            name: name.into(),
            num_levels,
            move_speed,
        }
    }
}
