use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

categorical! {
    pub enum TicketStatus {
        Open => "Open",
        InProgress => "In Progress",
        Waiting => "Waiting",
        Resolved => "Resolved",
        Closed => "Closed",
    }
}

impl TicketStatus {
    /// Open, in progress or waiting on the customer.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            TicketStatus::Open | TicketStatus::InProgress | TicketStatus::Waiting
        )
    }
}

categorical! {
    pub enum TicketPriority {
        Critical => "Critical",
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

categorical! {
    pub enum TicketCategory {
        Technical => "Technical",
        Billing => "Billing",
        FeatureRequest => "Feature Request",
        Account => "Account",
    }
}

/// Support ticket, id `TKT-00001`.
///
/// `last_updated` is never earlier than `created`. Only resolved or closed
/// tickets carry a satisfaction rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub customer: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category: TicketCategory,
    /// Hours until the first agent response.
    pub response_hours: f64,
    pub satisfaction_rating: Option<u8>,
    pub created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}
