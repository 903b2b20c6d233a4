use serde::{Deserialize, Serialize};

use crate::domain::a001_customer::{Country, Customer, CustomerSegment, CustomerStatus};
use crate::shared::{DashboardRequest, Metric, Series};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomerFilters {
    pub segment: Vec<CustomerSegment>,
    pub status: Vec<CustomerStatus>,
}

pub type CustomersRequest = DashboardRequest<CustomerFilters>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomersOverview {
    pub total_customers: Metric,
    pub active_customers: Metric,
    pub average_lifetime_value: Metric,
    pub retention_rate: Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentCount {
    pub name: CustomerSegment,
    pub value: usize,
    pub percentage: f64,
    pub percentage_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCustomers {
    pub country: Country,
    pub customers: usize,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentValue {
    pub segment: CustomerSegment,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeValue {
    pub distribution: Series,
    pub by_segment: Vec<SegmentValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomersDataset {
    pub overview: CustomersOverview,
    pub customer_growth: Series,
    pub segment_distribution: Vec<SegmentCount>,
    pub geographic_distribution: Vec<CountryCustomers>,
    /// Highest spend first.
    pub customers: Vec<Customer>,
    /// The ten most recent purchasers.
    pub recent_activity: Vec<Customer>,
    pub lifetime_value: LifetimeValue,
}
