use serde::{Deserialize, Serialize};

use crate::domain::a004_campaign::{Campaign, CampaignStatus, CampaignType};
use crate::shared::{DashboardRequest, Metric, Series};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CampaignFilters {
    pub status: Vec<CampaignStatus>,
    #[serde(rename = "type")]
    pub campaign_type: Vec<CampaignType>,
}

pub type CampaignsRequest = DashboardRequest<CampaignFilters>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignsOverview {
    pub total_campaigns: Metric,
    pub active_campaigns: Metric,
    pub total_budget: Metric,
    #[serde(rename = "averageROI")]
    pub average_roi: Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub total_reach: Series,
    pub total_conversions: Series,
    #[serde(rename = "averageROI")]
    pub average_roi: Series,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelPerformance {
    pub channel: CampaignType,
    pub effectiveness: f64,
    pub budget: f64,
    pub roi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignsDataset {
    pub overview: CampaignsOverview,
    pub campaigns: Vec<Campaign>,
    pub performance_summary: PerformanceSummary,
    pub channel_performance: Vec<ChannelPerformance>,
}
