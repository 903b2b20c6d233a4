use serde::{Deserialize, Serialize};

use crate::enums::{Device, TrafficSource, UserSegment};
use crate::shared::{DashboardRequest, Series, SeriesMetric};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalyticsFilters {
    pub channels: Vec<TrafficSource>,
    pub segments: Vec<UserSegment>,
}

pub type AnalyticsRequest = DashboardRequest<AnalyticsFilters>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub active_users: SeriesMetric,
    pub engagement: SeriesMetric,
    pub conversion_rate: SeriesMetric,
    pub average_session_time: SeriesMetric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSegmentShare {
    pub name: UserSegment,
    pub value: f64,
    pub change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSourceStats {
    pub source: TrafficSource,
    pub sessions: f64,
    pub conversion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitPage {
    pub page: String,
    pub exits: u32,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBehavior {
    pub page_views: Series,
    pub bounce_rate: Series,
    pub exit_pages: Vec<ExitPage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryStats {
    pub country: String,
    pub users: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceShare {
    pub device: Device,
    pub share: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePerformance {
    pub load_time: f64,
    pub bounce_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicePerformanceByType {
    pub mobile: DevicePerformance,
    pub desktop: DevicePerformance,
    pub tablet: DevicePerformance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceAnalytics {
    pub distribution: Vec<DeviceShare>,
    pub performance: DevicePerformanceByType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDataset {
    pub key_metrics: KeyMetrics,
    pub user_segments: Vec<UserSegmentShare>,
    pub traffic_sources: Vec<TrafficSourceStats>,
    pub user_behavior: UserBehavior,
    pub geographic_data: Vec<CountryStats>,
    pub device_analytics: DeviceAnalytics,
}
