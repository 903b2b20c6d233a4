use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Count and share of one category value inside a population.
/// `percentage` is not rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry<K> {
    pub key: K,
    pub count: usize,
    pub percentage: f64,
}

/// Count and summed amount of one category value inside a population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown<K> {
    pub key: K,
    pub count: usize,
    pub total: f64,
}

/// One bar of a 1–5 star histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingCount {
    pub rating: u8,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetentionPoint {
    /// 1-based month since the cohort started.
    pub month: u32,
    /// Share of the cohort still retained, within `[0, 100]`.
    pub rate: f64,
}

/// Retention curve of one monthly signup cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortRow {
    pub cohort: DateTime<Utc>,
    pub size: u32,
    pub retention_data: Vec<RetentionPoint>,
}
