use serde::{Deserialize, Serialize};

use crate::enums::{AcquisitionChannel, CompanySize};
use crate::shared::{CohortRow, DashboardRequest, PeriodMetric, RatingCount, Series};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomerReportFilters {
    pub segments: Vec<CompanySize>,
}

pub type CustomerReportRequest = DashboardRequest<CustomerReportFilters>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReportOverview {
    pub total_customers: PeriodMetric,
    pub active_users: PeriodMetric,
    pub customer_lifetime_value: PeriodMetric,
    pub retention_rate: PeriodMetric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerGrowth {
    pub new_customers: Series,
    pub churned_customers: Series,
    pub net_growth: Series,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeSegment {
    pub name: CompanySize,
    pub count: u32,
    pub revenue: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engagement {
    pub daily: Series,
    pub weekly: Series,
    pub monthly: Series,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelShare {
    pub name: AcquisitionChannel,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelConversion {
    pub visit_to_signup: f64,
    pub signup_to_paid: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acquisition {
    pub channels: Vec<ChannelShare>,
    pub conversion: FunnelConversion,
}

/// NPS, CSAT and mean rating are all derived from `reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatisfactionSummary {
    pub nps: f64,
    pub csat: f64,
    pub average_rating: f64,
    pub reviews: Vec<RatingCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueCount {
    pub issue: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportSummary {
    pub average_response_time: f64,
    pub tickets_resolved: u32,
    pub satisfaction_rate: f64,
    pub top_issues: Vec<IssueCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerJourney {
    pub acquisition: Acquisition,
    pub satisfaction: SatisfactionSummary,
    pub support: SupportSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReportDataset {
    pub overview: CustomerReportOverview,
    pub growth: CustomerGrowth,
    pub segments: Vec<SizeSegment>,
    pub engagement: Engagement,
    pub retention_cohorts: Vec<CohortRow>,
    pub customer_journey: CustomerJourney,
}
