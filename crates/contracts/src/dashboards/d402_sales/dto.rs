use serde::{Deserialize, Serialize};

use crate::domain::a002_order::{Order, OrderStatus, PaymentMethod, ProductCategory};
use crate::shared::{DashboardRequest, Metric, Series};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SalesFilters {
    pub category: Vec<ProductCategory>,
    pub status: Vec<OrderStatus>,
}

pub type SalesRequest = DashboardRequest<SalesFilters>;

/// KPI cards. Revenue and average order value cover completed orders only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverview {
    pub total_revenue: Metric,
    pub average_order_value: Metric,
    pub total_orders: Metric,
    pub conversion_rate: Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub name: ProductCategory,
    pub revenue: f64,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodTotal {
    pub method: PaymentMethod,
    pub value: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub category: ProductCategory,
    pub sales: u32,
    pub revenue: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesDataset {
    pub overview: SalesOverview,
    pub revenue_timeline: Series,
    pub category_breakdown: Vec<CategoryRevenue>,
    pub payment_methods: Vec<PaymentMethodTotal>,
    /// Newest first.
    pub orders: Vec<Order>,
    pub top_products: Vec<TopProduct>,
    /// The ten newest orders.
    pub recent_transactions: Vec<Order>,
}
