use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::Series;

categorical! {
    pub enum CampaignStatus {
        Active => "Active",
        Scheduled => "Scheduled",
        Ended => "Ended",
        Draft => "Draft",
    }
}

categorical! {
    pub enum CampaignType {
        Email => "Email",
        SocialMedia => "Social Media",
        Ppc => "PPC",
        Content => "Content",
    }
}

/// Marketing campaign, id `CAM001`.
///
/// Campaigns that are not `Active` have no spend, reach, conversions or ROI,
/// no dates and an empty performance series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub status: CampaignStatus,
    pub budget: f64,
    pub spent: f64,
    pub reach: u64,
    pub conversions: u64,
    pub roi: f64,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub performance: Series,
}

impl Campaign {
    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }
}
