use std::collections::BTreeMap;

use contracts::dashboards::d408_growth::{
    ChannelMetrics, CustomerAcquisition, GrowthDataset, GrowthRequest, GrowthTargets,
    RevenueMetrics, SourceAcquisition,
};
use contracts::enums::{Categorical, GrowthChannel, GrowthMetric};
use contracts::shared::{SeriesMetric, Target, TimeWindow};
use rand::Rng;

use crate::shared::aggregate::{cohort_retention, progress, shares};
use crate::shared::context::GenContext;
use crate::shared::filter::{allows, select};
use crate::shared::time_window::{resolve, WindowProfile};

const MRR_TARGET: f64 = 150_000.0;
const CUSTOMER_TARGET: f64 = 1_500.0;
const ACQUISITION_COST_TARGET: f64 = 200.0;
const REVENUE_GROWTH_TARGET: f64 = 25.0;

const COHORTS: usize = 6;
const COHORT_MONTHS: usize = 6;

/// Growth dashboard. Targets are computed from the generated headline
/// figures, so they stay consistent with the overview cards.
pub fn assemble<R: Rng>(request: &GrowthRequest, ctx: &mut GenContext<R>) -> GrowthDataset {
    let window = resolve(
        request.time_range,
        &request.date_range,
        WindowProfile::Daily,
        ctx.now(),
    );
    let filters = &request.filters;

    let metrics: BTreeMap<GrowthMetric, SeriesMetric> = GrowthMetric::ALL
        .iter()
        .map(|&metric| (metric, headline(ctx, &window, metric)))
        .collect();
    let current = |metric: GrowthMetric| metrics.get(&metric).map_or(0.0, |m| m.current);

    let targets = GrowthTargets {
        mrr: target(current(GrowthMetric::Mrr), MRR_TARGET, true),
        customers: target(ctx.whole(1_150.0, 100.0), CUSTOMER_TARGET, true),
        acquisition_cost: target(current(GrowthMetric::Cac), ACQUISITION_COST_TARGET, false),
        revenue_growth: target(current(GrowthMetric::GrowthRate), REVENUE_GROWTH_TARGET, true),
    };

    let channels = select(GrowthChannel::ALL, &filters.channels);
    let channel_metrics = channels
        .iter()
        .map(|&name| ChannelMetrics {
            name,
            users: ctx.count(1_000, 9_000),
            conversion: ctx.spread(2.0, 8.0),
            revenue: ctx.count(10_000, 90_000),
            growth: ctx.spread(-10.0, 40.0).floor() as i32,
        })
        .collect();

    let acquired: Vec<u32> = channels.iter().map(|_| ctx.count(100, 900)).collect();
    let percentages = shares(&acquired.iter().map(|v| f64::from(*v)).collect::<Vec<_>>());
    let by_source = channels
        .iter()
        .zip(acquired)
        .zip(percentages)
        .map(|((&source, value), percentage)| SourceAcquisition {
            source,
            value,
            percentage,
        })
        .collect();

    let customer_acquisition = CustomerAcquisition {
        timeline: ctx.series(500.0, 100.0, &window),
        by_source,
    };
    let revenue_metrics = RevenueMetrics {
        expansion: ctx.series(50_000.0, 10_000.0, &window),
        churn: ctx.series(10_000.0, 2_000.0, &window),
        new_business: ctx.series(30_000.0, 8_000.0, &window),
        net_revenue: ctx.series(70_000.0, 15_000.0, &window),
    };
    let now = ctx.now();
    let cohort_analysis = cohort_retention(ctx.rng(), now, COHORTS, COHORT_MONTHS, 500, 500);

    let overview: BTreeMap<GrowthMetric, SeriesMetric> = metrics
        .into_iter()
        .filter(|(metric, _)| allows(&filters.metrics, metric))
        .collect();

    tracing::debug!(
        points = window.point_count,
        metrics = overview.len(),
        channels = channels.len(),
        "assembled growth dataset"
    );

    GrowthDataset {
        overview,
        channel_metrics,
        customer_acquisition,
        revenue_metrics,
        cohort_analysis,
        targets,
    }
}

fn headline<R: Rng>(
    ctx: &mut GenContext<R>,
    window: &TimeWindow,
    metric: GrowthMetric,
) -> SeriesMetric {
    let (base, spread, trend) = match metric {
        GrowthMetric::Mrr => (125_000.0, 10_000.0, 15.8),
        GrowthMetric::Arr => (1_500_000.0, 100_000.0, 22.4),
        GrowthMetric::GrowthRate => (18.5, 5.0, 2.3),
        GrowthMetric::Cac => (250.0, 50.0, -5.2),
    };
    SeriesMetric {
        current: ctx.spread(base, spread),
        trend,
        history: ctx.series(base, spread, window),
    }
}

fn target(current: f64, target: f64, higher_is_better: bool) -> Target {
    Target {
        current,
        target,
        progress: progress(current, target, higher_is_better),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{key_paths, seeded};
    use contracts::dashboards::d408_growth::GrowthFilters;
    use contracts::shared::TimeRange;

    #[test]
    fn test_metric_filter_keeps_targets() {
        let filters = GrowthFilters {
            metrics: vec![GrowthMetric::Mrr, GrowthMetric::Cac],
            channels: Vec::new(),
        };
        let dataset = assemble(
            &GrowthRequest::with_filters(TimeRange::Last30Days, filters),
            &mut seeded(161),
        );

        assert_eq!(
            dataset.overview.keys().copied().collect::<Vec<_>>(),
            vec![GrowthMetric::Mrr, GrowthMetric::Cac]
        );
        let mrr = &dataset.overview[&GrowthMetric::Mrr];
        assert_eq!(dataset.targets.mrr.current, mrr.current);
        assert_eq!(mrr.history.len(), 30);

        let cac = &dataset.overview[&GrowthMetric::Cac];
        let expected = ACQUISITION_COST_TARGET / cac.current * 100.0;
        assert!((dataset.targets.acquisition_cost.progress - expected).abs() < 1e-9);
        assert!(dataset.targets.acquisition_cost.progress < 100.0);
    }

    #[test]
    fn test_channels_and_acquisition_shares() {
        let filters = GrowthFilters {
            metrics: Vec::new(),
            channels: vec![GrowthChannel::Email, GrowthChannel::Organic],
        };
        let dataset = assemble(
            &GrowthRequest::with_filters(TimeRange::Last7Days, filters),
            &mut seeded(162),
        );

        assert_eq!(dataset.overview.len(), GrowthMetric::ALL.len());
        assert_eq!(
            dataset.channel_metrics.iter().map(|c| c.name).collect::<Vec<_>>(),
            vec![GrowthChannel::Organic, GrowthChannel::Email]
        );
        assert!(dataset.channel_metrics.iter().all(|c| (-10..30).contains(&c.growth)));
        let total: f64 = dataset
            .customer_acquisition
            .by_source
            .iter()
            .map(|s| s.percentage)
            .sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_cohorts() {
        let dataset = assemble(&GrowthRequest::new(TimeRange::Last90Days), &mut seeded(163));
        assert_eq!(dataset.cohort_analysis.len(), COHORTS);
        assert!(dataset
            .cohort_analysis
            .iter()
            .all(|c| (500..1000).contains(&c.size) && c.retention_data[0].rate == 100.0));
    }

    #[test]
    fn test_shape_is_stable_across_calls() {
        let request = GrowthRequest::new(TimeRange::Last30Days);
        let first = serde_json::to_value(assemble(&request, &mut seeded(164)));
        let second = serde_json::to_value(assemble(&request, &mut seeded(165)));
        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(key_paths(&a), key_paths(&b)),
            _ => panic!("growth dataset must serialize"),
        }
    }
}
