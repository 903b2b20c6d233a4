use serde::{Deserialize, Serialize};

use crate::enums::{ApiEndpoint, ErrorKind, ServerRegion};
use crate::shared::{DashboardRequest, GaugeMetric, Series};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PerformanceFilters {
    pub regions: Vec<ServerRegion>,
    pub endpoints: Vec<ApiEndpoint>,
}

pub type PerformanceRequest = DashboardRequest<PerformanceFilters>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerMetrics {
    pub cpu: GaugeMetric,
    pub memory: GaugeMetric,
    pub response_time: GaugeMetric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorTypeCount {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub count: u32,
    pub trend: f64,
}

/// `total` is the sum of `by_type` counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRates {
    pub total: u32,
    pub by_type: Vec<ErrorTypeCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestsData {
    pub total_requests: u32,
    pub success_rate: f64,
    pub avg_response_time: f64,
    pub requests_per_second: f64,
    pub history: Series,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPerformance {
    pub region: ServerRegion,
    pub latency: f64,
    pub requests: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointStats {
    pub endpoint: ApiEndpoint,
    pub calls: f64,
    pub avg_latency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDataset {
    pub server_metrics: ServerMetrics,
    pub error_rates: ErrorRates,
    pub requests_data: RequestsData,
    pub region_performance: Vec<RegionPerformance>,
    pub top_endpoints: Vec<EndpointStats>,
}
