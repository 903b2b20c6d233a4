use serde::{Deserialize, Serialize};

use crate::domain::a003_ticket::{Ticket, TicketCategory, TicketPriority, TicketStatus};
use crate::shared::{DashboardRequest, Metric, RatingCount, Series};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SupportFilters {
    pub category: Vec<TicketCategory>,
    pub priority: Vec<TicketPriority>,
    pub status: Vec<TicketStatus>,
}

pub type SupportRequest = DashboardRequest<SupportFilters>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportOverview {
    pub total_tickets: Metric,
    pub open_tickets: Metric,
    /// Hours.
    pub avg_response_time: Metric,
    /// Percent of rated tickets scored 4 or 5.
    pub satisfaction_score: Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: TicketStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityCount {
    pub priority: TicketPriority,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: TicketCategory,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatisfactionData {
    pub timeline: Series,
    pub ratings: Vec<RatingCount>,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportDataset {
    pub overview: SupportOverview,
    pub tickets_by_status: Vec<StatusCount>,
    pub tickets_by_priority: Vec<PriorityCount>,
    pub recent_tickets: Vec<Ticket>,
    pub ticket_volume: Series,
    pub response_time: Series,
    pub categories_distribution: Vec<CategoryShare>,
    pub satisfaction: SatisfactionData,
}
