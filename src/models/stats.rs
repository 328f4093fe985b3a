//! Dashboard statistics

use serde::Serialize;
use utoipa::ToSchema;

/// Head-counts since the start of each current period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct CounterStats {
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
    pub yearly: u64,
    pub all_time: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatEntry {
    /// Label
    pub label: String,
    /// Value
    pub value: u64,
}

/// Series behind the dashboard charts
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartData {
    /// Head-count per location, over all visits
    pub locations: Vec<StatEntry>,
    /// Head-count per visitor category, over the selected location
    pub categories: Vec<StatEntry>,
}
