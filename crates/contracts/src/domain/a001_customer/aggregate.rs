use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

categorical! {
    pub enum CustomerStatus {
        Active => "Active",
        Inactive => "Inactive",
        Pending => "Pending",
    }
}

categorical! {
    pub enum CustomerSegment {
        New => "New",
        Returning => "Returning",
        Vip => "VIP",
        AtRisk => "At Risk",
        Churned => "Churned",
    }
}

categorical! {
    pub enum Country {
        Usa => "USA",
        Uk => "UK",
        Germany => "Germany",
        France => "France",
        Canada => "Canada",
        Australia => "Australia",
        Japan => "Japan",
    }
}

/// Customer record, id `CUS00001`.
///
/// Only `Active` customers carry spend: for any other status
/// `total_spent`, `orders_count` and `average_order_value` are zero and
/// `last_purchase` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: CustomerStatus,
    pub segment: CustomerSegment,
    pub country: Country,
    pub total_spent: f64,
    pub last_purchase: Option<DateTime<Utc>>,
    pub join_date: DateTime<Utc>,
    pub orders_count: u32,
    pub average_order_value: f64,
}

impl Customer {
    pub fn is_active(&self) -> bool {
        self.status == CustomerStatus::Active
    }
}
