use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

categorical! {
    pub enum AutomationType {
        Email => "Email",
        Notification => "Notification",
        Task => "Task",
        Workflow => "Workflow",
        Integration => "Integration",
    }
}

categorical! {
    pub enum AutomationStatus {
        Active => "Active",
        Paused => "Paused",
        Draft => "Draft",
        Failed => "Failed",
    }
}

categorical! {
    pub enum ActivityStatus {
        Success => "Success",
        Failed => "Failed",
    }
}

/// Automation rule, id `AUT00001`.
/// Non-active automations have zero executions and success rate and no last run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Automation {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub automation_type: AutomationType,
    pub status: AutomationStatus,
    pub triggers: u32,
    pub actions: u32,
    pub executions: u64,
    pub success_rate: f64,
    pub last_run: Option<DateTime<Utc>>,
    pub created: DateTime<Utc>,
}

impl Automation {
    pub fn is_active(&self) -> bool {
        self.status == AutomationStatus::Active
    }
}

/// One execution in the recent activity feed, id `ACT00001`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationActivity {
    pub id: String,
    pub automation_id: String,
    #[serde(rename = "type")]
    pub activity_type: AutomationType,
    pub status: ActivityStatus,
    pub timestamp: DateTime<Utc>,
    pub details: String,
}
