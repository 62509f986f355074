// Synthetic gauges and the combined per-tick snapshot

use serde::{Deserialize, Serialize};

use super::StatusCounters;

/// Randomly generated gauges for one tick, percentages in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticMetrics {
    pub cpu: f64,
    pub ram: f64,
    pub disk: f64,
}

/// One tick's synthetic gauges merged with the status feed counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub timestamp: u64,
    pub cpu: f64,
    pub ram: f64,
    pub disk: f64,
    pub users: u64,
    pub guilds: u64,
    /// Raw feed value; seconds when below 1000, milliseconds otherwise.
    pub uptime: u64,
    pub commands_total: u64,
    pub commands_ok: u64,
    pub commands_error: u64,
}

impl Snapshot {
    pub fn merge(timestamp: u64, metrics: SyntheticMetrics, counters: StatusCounters) -> Self {
        Self {
            timestamp,
            cpu: metrics.cpu,
            ram: metrics.ram,
            disk: metrics.disk,
            users: counters.users,
            guilds: counters.guilds,
            uptime: counters.uptime,
            commands_total: counters.commands_total,
            commands_ok: counters.commands_ok,
            commands_error: counters.commands_error,
        }
    }
}
