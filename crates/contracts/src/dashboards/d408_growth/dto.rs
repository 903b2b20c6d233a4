use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::{GrowthChannel, GrowthMetric};
use crate::shared::{CohortRow, DashboardRequest, Series, SeriesMetric, Target};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GrowthFilters {
    pub metrics: Vec<GrowthMetric>,
    pub channels: Vec<GrowthChannel>,
}

pub type GrowthRequest = DashboardRequest<GrowthFilters>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelMetrics {
    pub name: GrowthChannel,
    pub users: u32,
    pub conversion: f64,
    pub revenue: u32,
    pub growth: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAcquisition {
    pub source: GrowthChannel,
    pub value: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAcquisition {
    pub timeline: Series,
    pub by_source: Vec<SourceAcquisition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueMetrics {
    pub expansion: Series,
    pub churn: Series,
    pub new_business: Series,
    pub net_revenue: Series,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthTargets {
    pub mrr: Target,
    pub customers: Target,
    pub acquisition_cost: Target,
    pub revenue_growth: Target,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthDataset {
    /// Only the requested metrics, keyed `mrr`, `arr`, `growthRate`, `cac`.
    pub overview: BTreeMap<GrowthMetric, SeriesMetric>,
    pub channel_metrics: Vec<ChannelMetrics>,
    pub customer_acquisition: CustomerAcquisition,
    pub revenue_metrics: RevenueMetrics,
    pub cohort_analysis: Vec<CohortRow>,
    pub targets: GrowthTargets,
}
