use contracts::dashboards::d407_revenue::{
    CustomerSegmentsRevenue, MonthlyRecurring, NewVsExisting, ProductRevenue, RegionRevenue,
    RevenueDataset, RevenueQuality, RevenueRequest, RevenueShare, RevenueStreams, RevenueSummary,
    SizeRevenue,
};
use contracts::enums::{CompanySize, RevenueProduct, SalesRegion};
use contracts::shared::PercentageTrend;
use rand::Rng;

use crate::shared::aggregate::{compare, shares};
use crate::shared::context::GenContext;
use crate::shared::filter::allows;
use crate::shared::time_window::{resolve, WindowProfile};

// (plan, revenue, users, growth %)
const PRODUCTS: [(RevenueProduct, f64, u32, f64); 5] = [
    (RevenueProduct::BasicPlan, 98_765.0, 789, 12.3),
    (RevenueProduct::ProPlan, 156_789.0, 456, 15.7),
    (RevenueProduct::EnterprisePlan, 234_567.0, 123, 18.9),
    (RevenueProduct::AddOnServices, 45_678.0, 234, 9.4),
    (RevenueProduct::CustomSolutions, 78_901.0, 89, 11.2),
];

const REGIONS: [(SalesRegion, f64); 5] = [
    (SalesRegion::NorthAmerica, 156_789.0),
    (SalesRegion::Europe, 123_456.0),
    (SalesRegion::AsiaPacific, 98_765.0),
    (SalesRegion::LatinAmerica, 45_678.0),
    (SalesRegion::AfricaMiddleEast, 23_456.0),
];

const SIZES: [(CompanySize, f64); 4] = [
    (CompanySize::Enterprise, 156_789.0),
    (CompanySize::MidMarket, 98_765.0),
    (CompanySize::Smb, 78_901.0),
    (CompanySize::Startup, 58_901.0),
];

const NEW_REVENUE: f64 = 98_765.0;
const EXISTING_REVENUE: f64 = 183_456.0;

/// Revenue report. Region, size and new/existing percentages are shares of
/// the rows actually returned.
pub fn assemble<R: Rng>(request: &RevenueRequest, ctx: &mut GenContext<R>) -> RevenueDataset {
    let window = resolve(
        request.time_range,
        &request.date_range,
        WindowProfile::Daily,
        ctx.now(),
    );
    let filters = &request.filters;

    let summary = RevenueSummary {
        total_revenue: compare(ctx.spread(254_890.0, 50_000.0), ctx.spread(234_567.0, 50_000.0)),
        recurring_revenue: compare(ctx.spread(198_765.0, 40_000.0), ctx.spread(187_654.0, 40_000.0)),
        average_order_value: compare(ctx.spread(125.0, 20.0), ctx.spread(115.0, 20.0)),
        customer_lifetime_value: compare(ctx.spread(850.0, 100.0), ctx.spread(780.0, 100.0)),
    };

    let revenue_streams = RevenueStreams {
        subscriptions: ctx.series(150_000.0, 30_000.0, &window),
        one_time: ctx.series(50_000.0, 10_000.0, &window),
        services: ctx.series(25_000.0, 5_000.0, &window),
        add_ons: ctx.series(15_000.0, 3_000.0, &window),
    };

    let revenue_by_product: Vec<ProductRevenue> = PRODUCTS
        .iter()
        .filter(|(name, ..)| allows(&filters.products, name))
        .map(|&(name, revenue, users, growth)| ProductRevenue {
            name,
            revenue,
            users,
            growth,
        })
        .collect();

    let regions: Vec<(SalesRegion, f64)> = REGIONS
        .iter()
        .copied()
        .filter(|(region, _)| allows(&filters.regions, region))
        .collect();
    let revenue_by_region: Vec<RegionRevenue> = with_shares(&regions)
        .map(|(region, revenue, percentage)| RegionRevenue {
            region,
            revenue,
            percentage,
        })
        .collect();

    let split = shares(&[NEW_REVENUE, EXISTING_REVENUE]);
    let customer_segments = CustomerSegmentsRevenue {
        new_vs_existing: NewVsExisting {
            new: RevenueShare {
                revenue: NEW_REVENUE,
                percentage: split[0],
            },
            existing: RevenueShare {
                revenue: EXISTING_REVENUE,
                percentage: split[1],
            },
        },
        by_size: with_shares(&SIZES)
            .map(|(segment, revenue, percentage)| SizeRevenue {
                segment,
                revenue,
                percentage,
            })
            .collect(),
    };

    let monthly_recurring = MonthlyRecurring {
        current: ctx.series(180_000.0, 20_000.0, &window),
        churn: ctx.series(5_000.0, 1_000.0, &window),
        expansion: ctx.series(15_000.0, 3_000.0, &window),
        net: ctx.series(190_000.0, 25_000.0, &window),
    };

    tracing::debug!(
        points = window.point_count,
        products = revenue_by_product.len(),
        regions = revenue_by_region.len(),
        "assembled revenue dataset"
    );

    RevenueDataset {
        summary,
        revenue_streams,
        revenue_by_product,
        revenue_by_region,
        customer_segments,
        monthly_recurring,
        revenue_quality: RevenueQuality {
            recurring: quality(78.0, 5.2),
            contracted_arr: quality(85.0, 3.8),
            gross_margin: quality(72.0, 2.4),
            customer_retention: quality(94.0, 1.8),
        },
    }
}

fn with_shares<K: Copy>(rows: &[(K, f64)]) -> impl Iterator<Item = (K, f64, f64)> + '_ {
    let revenues: Vec<f64> = rows.iter().map(|(_, revenue)| *revenue).collect();
    rows.iter()
        .zip(shares(&revenues))
        .map(|(&(key, revenue), percentage)| (key, revenue, percentage))
}

fn quality(percentage: f64, trend: f64) -> PercentageTrend {
    PercentageTrend { percentage, trend }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::aggregate::trend;
    use crate::test_support::{key_paths, seeded};
    use contracts::dashboards::d407_revenue::RevenueFilters;
    use contracts::shared::TimeRange;

    #[test]
    fn test_summary_trends_and_shares() {
        let dataset = assemble(&RevenueRequest::new(TimeRange::Last90Days), &mut seeded(151));
        let total = &dataset.summary.total_revenue;
        assert_eq!(total.trend, trend(total.current, total.previous));

        let regions: f64 = dataset.revenue_by_region.iter().map(|r| r.percentage).sum();
        assert!((regions - 100.0).abs() < 1e-9);
        let sizes: f64 = dataset.customer_segments.by_size.iter().map(|s| s.percentage).sum();
        assert!((sizes - 100.0).abs() < 1e-9);
        let split = &dataset.customer_segments.new_vs_existing;
        assert!((split.new.percentage + split.existing.percentage - 100.0).abs() < 1e-9);
        assert_eq!(dataset.revenue_streams.subscriptions.len(), 90);
    }

    #[test]
    fn test_filtered_regions_rescale_to_hundred() {
        let filters = RevenueFilters {
            products: vec![RevenueProduct::ProPlan],
            regions: vec![SalesRegion::Europe, SalesRegion::LatinAmerica],
        };
        let dataset = assemble(
            &RevenueRequest::with_filters(TimeRange::Last30Days, filters),
            &mut seeded(152),
        );

        assert_eq!(dataset.revenue_by_product.len(), 1);
        assert_eq!(dataset.revenue_by_region.len(), 2);
        let europe = 123_456.0 / (123_456.0 + 45_678.0) * 100.0;
        assert!((dataset.revenue_by_region[0].percentage - europe).abs() < 1e-9);
    }

    #[test]
    fn test_shape_is_stable_across_calls() {
        let request = RevenueRequest::new(TimeRange::Last30Days);
        let first = serde_json::to_value(assemble(&request, &mut seeded(153)));
        let second = serde_json::to_value(assemble(&request, &mut seeded(154)));
        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(key_paths(&a), key_paths(&b)),
            _ => panic!("revenue dataset must serialize"),
        }
    }
}
