use serde::{Deserialize, Serialize};

use crate::enums::{CompanySize, RevenueProduct, SalesRegion};
use crate::shared::{DashboardRequest, PercentageTrend, PeriodMetric, Series};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RevenueFilters {
    pub products: Vec<RevenueProduct>,
    pub regions: Vec<SalesRegion>,
}

pub type RevenueRequest = DashboardRequest<RevenueFilters>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    pub total_revenue: PeriodMetric,
    pub recurring_revenue: PeriodMetric,
    pub average_order_value: PeriodMetric,
    pub customer_lifetime_value: PeriodMetric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueStreams {
    pub subscriptions: Series,
    pub one_time: Series,
    pub services: Series,
    pub add_ons: Series,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRevenue {
    pub name: RevenueProduct,
    pub revenue: f64,
    pub users: u32,
    pub growth: f64,
}

/// `percentage` is the region's share of the listed regions' revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRevenue {
    pub region: SalesRegion,
    pub revenue: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueShare {
    pub revenue: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVsExisting {
    pub new: RevenueShare,
    pub existing: RevenueShare,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRevenue {
    pub segment: CompanySize,
    pub revenue: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSegmentsRevenue {
    pub new_vs_existing: NewVsExisting,
    pub by_size: Vec<SizeRevenue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecurring {
    pub current: Series,
    pub churn: Series,
    pub expansion: Series,
    pub net: Series,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueQuality {
    pub recurring: PercentageTrend,
    #[serde(rename = "contractedARR")]
    pub contracted_arr: PercentageTrend,
    pub gross_margin: PercentageTrend,
    pub customer_retention: PercentageTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueDataset {
    pub summary: RevenueSummary,
    pub revenue_streams: RevenueStreams,
    pub revenue_by_product: Vec<ProductRevenue>,
    pub revenue_by_region: Vec<RegionRevenue>,
    pub customer_segments: CustomerSegmentsRevenue,
    pub monthly_recurring: MonthlyRecurring,
    pub revenue_quality: RevenueQuality,
}
