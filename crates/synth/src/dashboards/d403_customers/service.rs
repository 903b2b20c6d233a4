use contracts::dashboards::d403_customers::{
    CountryCustomers, CustomerFilters, CustomersDataset, CustomersOverview, CustomersRequest,
    LifetimeValue, SegmentCount, SegmentValue,
};
use contracts::domain::a001_customer::{Country, Customer, CustomerSegment};
use contracts::enums::Categorical;
use contracts::shared::Metric;
use rand::Rng;

use crate::domain::a001_customer::{generate_customers, POPULATION};
use crate::shared::aggregate::{average_by, breakdown, distribution, percent};
use crate::shared::context::GenContext;
use crate::shared::filter::{allows, filter, select, Criteria};
use crate::shared::time_window::{resolve, WindowProfile};

const RECENT_ACTIVITY: usize = 10;

const TOTAL_TREND: f64 = 12.5;
const ACTIVE_TREND: f64 = 8.3;
const LIFETIME_VALUE_TREND: f64 = 15.2;
const RETENTION_TREND: f64 = 3.7;

impl Criteria<Customer> for CustomerFilters {
    fn accepts(&self, customer: &Customer) -> bool {
        allows(&self.segment, &customer.segment) && allows(&self.status, &customer.status)
    }
}

pub fn assemble<R: Rng>(request: &CustomersRequest, ctx: &mut GenContext<R>) -> CustomersDataset {
    let window = resolve(
        request.time_range,
        &request.date_range,
        WindowProfile::Daily,
        ctx.now(),
    );
    let population = generate_customers(ctx, POPULATION);
    let mut customers = filter(&population, &request.filters);
    customers.sort_by(|a, b| b.total_spent.total_cmp(&a.total_spent));

    let segments = select(CustomerSegment::ALL, &request.filters.segment);

    let overview = overview(&customers);
    let segment_distribution = distribution(&customers, &segments, |c| c.segment)
        .into_iter()
        .map(|entry| SegmentCount {
            name: entry.key,
            value: entry.count,
            percentage: entry.percentage,
            percentage_change: ctx.spread(-10.0, 20.0),
        })
        .collect();
    let geographic_distribution = breakdown(&customers, Country::ALL, |c| c.country, |c| c.total_spent)
        .into_iter()
        .map(|row| CountryCustomers {
            country: row.key,
            customers: row.count,
            revenue: row.total,
        })
        .collect();
    let recent_activity = recent_purchasers(&customers);
    let lifetime_value = LifetimeValue {
        distribution: ctx.series(500.0, 100.0, &window),
        by_segment: segments
            .iter()
            .map(|&segment| SegmentValue {
                segment,
                value: ctx.whole(500.0, 2000.0),
            })
            .collect(),
    };

    tracing::debug!(
        population = population.len(),
        customers = customers.len(),
        "assembled customers dataset"
    );

    CustomersDataset {
        overview,
        customer_growth: ctx.series(1000.0, 200.0, &window),
        segment_distribution,
        geographic_distribution,
        customers,
        recent_activity,
        lifetime_value,
    }
}

fn overview(customers: &[Customer]) -> CustomersOverview {
    let active: Vec<&Customer> = customers.iter().filter(|c| c.is_active()).collect();

    CustomersOverview {
        total_customers: Metric::new(customers.len() as f64, TOTAL_TREND),
        active_customers: Metric::new(active.len() as f64, ACTIVE_TREND),
        average_lifetime_value: Metric::new(
            average_by(&active, |c| c.total_spent),
            LIFETIME_VALUE_TREND,
        ),
        retention_rate: Metric::new(
            percent(active.len() as f64, customers.len() as f64),
            RETENTION_TREND,
        ),
    }
}

/// Most recent purchasers first; customers without purchases are skipped.
fn recent_purchasers(customers: &[Customer]) -> Vec<Customer> {
    let mut purchasers: Vec<&Customer> = customers
        .iter()
        .filter(|c| c.last_purchase.is_some())
        .collect();
    purchasers.sort_by(|a, b| b.last_purchase.cmp(&a.last_purchase));
    purchasers
        .into_iter()
        .take(RECENT_ACTIVITY)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{key_paths, seeded};
    use contracts::domain::a001_customer::CustomerStatus;
    use contracts::shared::TimeRange;

    #[test]
    fn test_overview_counts_active_customers() {
        let dataset = assemble(&CustomersRequest::new(TimeRange::Last30Days), &mut seeded(111));
        let active = dataset.customers.iter().filter(|c| c.is_active()).count();

        assert_eq!(dataset.overview.total_customers.value, 100.0);
        assert_eq!(dataset.overview.active_customers.value, active as f64);
        assert!((dataset.overview.retention_rate.value - active as f64).abs() < 1e-9);
        assert!(dataset
            .customers
            .windows(2)
            .all(|w| w[0].total_spent >= w[1].total_spent));
    }

    #[test]
    fn test_recent_activity_lists_purchasers() {
        let dataset = assemble(&CustomersRequest::new(TimeRange::Last30Days), &mut seeded(112));
        assert!(dataset.recent_activity.len() <= RECENT_ACTIVITY);
        assert!(dataset.recent_activity.iter().all(|c| c.last_purchase.is_some()));
        assert!(dataset
            .recent_activity
            .windows(2)
            .all(|w| w[0].last_purchase >= w[1].last_purchase));
    }

    #[test]
    fn test_segment_filter_narrows_distribution() {
        let filters = CustomerFilters {
            segment: vec![CustomerSegment::Vip, CustomerSegment::New],
            status: vec![CustomerStatus::Active],
        };
        let request = CustomersRequest::with_filters(TimeRange::Last7Days, filters);
        let dataset = assemble(&request, &mut seeded(113));

        assert!(dataset.customers.iter().all(|c| c.is_active()
            && matches!(c.segment, CustomerSegment::Vip | CustomerSegment::New)));
        assert_eq!(dataset.segment_distribution.len(), 2);
        assert_eq!(dataset.lifetime_value.by_segment.len(), 2);
        if !dataset.customers.is_empty() {
            let total: f64 = dataset.segment_distribution.iter().map(|s| s.percentage).sum();
            assert!((total - 100.0).abs() < 1e-9);
            assert_eq!(dataset.overview.retention_rate.value, 100.0);
        }
    }

    #[test]
    fn test_empty_population_overview_is_zero() {
        let overview = overview(&[]);
        assert_eq!(overview.average_lifetime_value.value, 0.0);
        assert_eq!(overview.retention_rate.value, 0.0);
    }

    #[test]
    fn test_shape_is_stable_across_calls() {
        let request = CustomersRequest::new(TimeRange::Last90Days);
        let first = serde_json::to_value(assemble(&request, &mut seeded(114)));
        let second = serde_json::to_value(assemble(&request, &mut seeded(115)));
        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(key_paths(&a), key_paths(&b)),
            _ => panic!("customers dataset must serialize"),
        }
    }
}
