//! Aggregate statistics over the whole network.

use serde::{Deserialize, Serialize};

/// One entry of a frequency ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedValue {
    pub value: String,
    pub count: i64,
}

/// Result of `analyze_network`.
///
/// Rankings are ordered by count descending, ties alphabetically ascending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NetworkStats {
    pub total_contacts: i64,
    pub distinct_companies: i64,
    pub top_keywords: Vec<RankedValue>,
    pub top_locations: Vec<RankedValue>,
    pub top_companies: Vec<RankedValue>,
}
