//! Per-day metrics records.
//!
//! The simulation engine produces one `Metrics` per played day;
//! `GameState` stores the history and exposes it to analytics. The
//! core never computes these itself.

use serde::{Deserialize, Serialize};

/// Mean/stdev pair for a per-day sample population.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleStats {
    pub mean: f64,
    pub stdev: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub num_tasks_completed: u64,
    pub task_total_duration_seconds: SampleStats,
    pub task_on_route_duration_seconds: SampleStats,
    pub mover_num_tasks_completed: SampleStats,
    pub mover_utilization: SampleStats,
    pub mover_distance_traveled_meters: SampleStats,
    pub prepper_num_tasks_prepared: SampleStats,
    pub prepper_utilization: SampleStats,
}
