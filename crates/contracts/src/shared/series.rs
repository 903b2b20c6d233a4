use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of a time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Samples in strictly ascending timestamp order.
pub type Series = Vec<Sample>;
