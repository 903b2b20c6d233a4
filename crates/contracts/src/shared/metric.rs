use serde::{Deserialize, Serialize};

use super::series::Series;

/// A KPI card value with its signed percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub value: f64,
    pub trend: f64,
}

impl Metric {
    pub fn new(value: f64, trend: f64) -> Self {
        Self { value, trend }
    }
}

/// A KPI compared against an explicit previous-period value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodMetric {
    pub current: f64,
    pub previous: f64,
    pub trend: f64,
}

/// Current value, trend and the history series behind the sparkline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMetric {
    pub current: f64,
    pub trend: f64,
    pub history: Series,
}

/// Same as [`SeriesMetric`] for cards that name the figure `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryMetric {
    pub value: f64,
    pub trend: f64,
    pub history: Series,
}

/// Live gauge: latest reading plus recent history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeMetric {
    pub current: f64,
    pub history: Series,
}

/// Progress towards a goal, `progress` in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub current: f64,
    pub target: f64,
    pub progress: f64,
}

/// A percentage KPI with its trend (revenue quality tiles).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageTrend {
    pub percentage: f64,
    pub trend: f64,
}
