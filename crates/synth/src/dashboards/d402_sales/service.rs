use contracts::dashboards::d402_sales::{
    CategoryRevenue, PaymentMethodTotal, SalesDataset, SalesFilters, SalesOverview, SalesRequest,
    TopProduct,
};
use contracts::domain::a002_order::{Order, PaymentMethod, ProductCategory};
use contracts::enums::Categorical;
use contracts::shared::Metric;
use rand::Rng;

use crate::domain::a002_order::{generate_orders, POPULATION};
use crate::shared::aggregate::{average_by, breakdown, percent, sum_by};
use crate::shared::context::GenContext;
use crate::shared::filter::{allows, filter, select, Criteria};
use crate::shared::time_window::{resolve, WindowProfile};

const RECENT_TRANSACTIONS: usize = 10;

// Period-over-period change shown on the KPI cards.
const REVENUE_TREND: f64 = 15.2;
const ORDER_VALUE_TREND: f64 = 8.4;
const ORDERS_TREND: f64 = 12.3;
const CONVERSION_TREND: f64 = 5.7;

impl Criteria<Order> for SalesFilters {
    fn accepts(&self, order: &Order) -> bool {
        allows(&self.category, &order.category) && allows(&self.status, &order.status)
    }
}

/// Sales dashboard over one generated order population.
pub fn assemble<R: Rng>(request: &SalesRequest, ctx: &mut GenContext<R>) -> SalesDataset {
    let window = resolve(
        request.time_range,
        &request.date_range,
        WindowProfile::Daily,
        ctx.now(),
    );
    let population = generate_orders(ctx, POPULATION);
    let mut orders = filter(&population, &request.filters);
    orders.sort_by(|a, b| b.date.cmp(&a.date));

    let categories = select(ProductCategory::ALL, &request.filters.category);

    let overview = overview(&orders);
    let category_breakdown = breakdown(&orders, &categories, |o| o.category, |o| o.total)
        .into_iter()
        .map(|row| CategoryRevenue {
            name: row.key,
            revenue: row.total,
            orders: row.count,
        })
        .collect();
    let payment_methods = breakdown(&orders, PaymentMethod::ALL, |o| o.payment_method, |o| o.total)
        .into_iter()
        .map(|row| PaymentMethodTotal {
            method: row.key,
            value: row.total,
            count: row.count,
        })
        .collect();
    let top_products = categories
        .iter()
        .map(|&category| TopProduct {
            category,
            sales: ctx.count(1_000, 9_000),
            revenue: ctx.count(10_000, 90_000),
        })
        .collect();
    let recent_transactions = orders.iter().take(RECENT_TRANSACTIONS).cloned().collect();

    tracing::debug!(
        population = population.len(),
        orders = orders.len(),
        "assembled sales dataset"
    );

    SalesDataset {
        overview,
        revenue_timeline: ctx.series(50_000.0, 15_000.0, &window),
        category_breakdown,
        payment_methods,
        orders,
        top_products,
        recent_transactions,
    }
}

/// KPI cards: revenue and order value over completed orders, order count and
/// conversion over everything that passed the filters.
fn overview(orders: &[Order]) -> SalesOverview {
    let completed: Vec<&Order> = orders.iter().filter(|o| o.is_completed()).collect();

    SalesOverview {
        total_revenue: Metric::new(sum_by(&completed, |o| o.total), REVENUE_TREND),
        average_order_value: Metric::new(average_by(&completed, |o| o.total), ORDER_VALUE_TREND),
        total_orders: Metric::new(orders.len() as f64, ORDERS_TREND),
        conversion_rate: Metric::new(
            percent(completed.len() as f64, orders.len() as f64),
            CONVERSION_TREND,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{key_paths, seeded};
    use contracts::domain::a002_order::OrderStatus;
    use contracts::shared::TimeRange;

    #[test]
    fn test_seven_day_overview_matches_orders() {
        let dataset = assemble(&SalesRequest::new(TimeRange::Last7Days), &mut seeded(101));
        let orders = &dataset.orders;
        let completed = orders.iter().filter(|o| o.status == OrderStatus::Completed).count();

        assert_eq!(orders.len(), POPULATION);
        assert_eq!(dataset.overview.total_orders.value, orders.len() as f64);
        let expected = completed as f64 / orders.len() as f64 * 100.0;
        assert!((dataset.overview.conversion_rate.value - expected).abs() < 1e-9);
        assert_eq!(dataset.revenue_timeline.len(), 7);
    }

    #[test]
    fn test_orders_newest_first_and_recent_prefix() {
        let dataset = assemble(&SalesRequest::new(TimeRange::Last30Days), &mut seeded(102));
        assert!(dataset.orders.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(dataset.recent_transactions.len(), RECENT_TRANSACTIONS);
        assert_eq!(dataset.recent_transactions[..], dataset.orders[..RECENT_TRANSACTIONS]);
    }

    #[test]
    fn test_breakdowns_cover_filtered_orders() {
        let filters = SalesFilters {
            category: vec![ProductCategory::Books, ProductCategory::Clothing],
            status: Vec::new(),
        };
        let request = SalesRequest::with_filters(TimeRange::Last30Days, filters);
        let dataset = assemble(&request, &mut seeded(103));

        assert_eq!(dataset.category_breakdown.len(), 2);
        assert_eq!(dataset.top_products.len(), 2);
        let counted: usize = dataset.category_breakdown.iter().map(|c| c.orders).sum();
        assert_eq!(counted, dataset.orders.len());
        let paid: usize = dataset.payment_methods.iter().map(|p| p.count).sum();
        assert_eq!(paid, dataset.orders.len());
    }

    #[test]
    fn test_completed_only_converts_fully() {
        let filters = SalesFilters {
            category: Vec::new(),
            status: vec![OrderStatus::Completed],
        };
        let dataset = assemble(
            &SalesRequest::with_filters(TimeRange::Last30Days, filters),
            &mut seeded(104),
        );
        assert!(!dataset.orders.is_empty());
        assert_eq!(dataset.overview.conversion_rate.value, 100.0);
    }

    #[test]
    fn test_empty_population_overview_is_zero() {
        let overview = overview(&[]);
        assert_eq!(overview.total_revenue.value, 0.0);
        assert_eq!(overview.average_order_value.value, 0.0);
        assert_eq!(overview.total_orders.value, 0.0);
        assert_eq!(overview.conversion_rate.value, 0.0);
    }

    #[test]
    fn test_shape_is_stable_across_calls() {
        let request = SalesRequest::new(TimeRange::Last30Days);
        let first = serde_json::to_value(assemble(&request, &mut seeded(105)));
        let second = serde_json::to_value(assemble(&request, &mut seeded(106)));
        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(key_paths(&a), key_paths(&b)),
            _ => panic!("sales dataset must serialize"),
        }
    }
}
