use serde::{Deserialize, Serialize};

use crate::domain::a005_automation::{
    Automation, AutomationActivity, AutomationStatus, AutomationType,
};
use crate::shared::{DashboardRequest, HistoryMetric, Metric, Series};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AutomationFilters {
    pub status: Vec<AutomationStatus>,
    #[serde(rename = "type")]
    pub automation_type: Vec<AutomationType>,
}

pub type AutomationRequest = DashboardRequest<AutomationFilters>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationOverview {
    pub total_automations: HistoryMetric,
    pub active_automations: Metric,
    pub success_rate: Metric,
    pub total_executions: Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeErrorRate {
    #[serde(rename = "type")]
    pub automation_type: AutomationType,
    pub error_rate: f64,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationPerformance {
    pub executions_over_time: Series,
    pub success_rate_over_time: Series,
    pub error_rate_by_type: Vec<TypeErrorRate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationDataset {
    pub overview: AutomationOverview,
    pub performance: AutomationPerformance,
    pub automations: Vec<Automation>,
    pub recent_activity: Vec<AutomationActivity>,
}
