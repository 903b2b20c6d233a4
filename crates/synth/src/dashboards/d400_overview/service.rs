use std::collections::BTreeMap;

use contracts::dashboards::d400_overview::{
    FeatureUsage, OverviewDataset, OverviewRequest, SegmentSize, SegmentedSample,
};
use contracts::enums::{BusinessSegment, Categorical, ProductFeature};
use contracts::shared::TimeWindow;
use rand::Rng;

use crate::shared::context::GenContext;
use crate::shared::filter::select;
use crate::shared::time_window::{resolve, WindowProfile};

/// Main dashboard: segmented revenue timeline, feature adoption and segment sizes.
pub fn assemble<R: Rng>(request: &OverviewRequest, ctx: &mut GenContext<R>) -> OverviewDataset {
    let window = resolve(
        request.time_range,
        &request.date_range,
        WindowProfile::Calendar,
        ctx.now(),
    );
    let filters = &request.filters;
    let segments = select(BusinessSegment::ALL, &filters.segments);
    let features = select(ProductFeature::ALL, &filters.features);

    let time_series_data = segmented_series(ctx, &window, &segments);
    let feature_usage = features
        .iter()
        .map(|&name| {
            let base = adoption_base(name);
            FeatureUsage {
                name,
                users: ctx.count(base, 20),
                previous_users: filters.comparison_mode.then(|| ctx.count(base, 20)),
            }
        })
        .collect();
    let user_segments = segments
        .iter()
        .map(|&name| SegmentSize {
            name,
            value: ctx.count(20, 40),
        })
        .collect();
    let comparison_data = if filters.comparison_mode {
        Some(segmented_series(ctx, &window, &segments))
    } else {
        None
    };

    tracing::debug!(
        points = window.point_count,
        segments = segments.len(),
        features = features.len(),
        "assembled overview dataset"
    );

    OverviewDataset {
        time_series_data,
        feature_usage,
        user_segments,
        comparison_data,
    }
}

fn segment_multiplier(segment: BusinessSegment) -> f64 {
    match segment {
        BusinessSegment::Enterprise => 2.5,
        BusinessSegment::Smb => 1.5,
        BusinessSegment::Startup => 1.0,
    }
}

/// Share of active users (in percent) that use a feature, before noise.
fn adoption_base(feature: ProductFeature) -> u32 {
    match feature {
        ProductFeature::Dashboard => 75,
        ProductFeature::Analytics => 55,
        ProductFeature::Reports => 35,
        ProductFeature::ApiAccess => 25,
        ProductFeature::Integrations => 20,
    }
}

fn segmented_series<R: Rng>(
    ctx: &mut GenContext<R>,
    window: &TimeWindow,
    segments: &[BusinessSegment],
) -> Vec<SegmentedSample> {
    ctx.series(50_000.0, 20_000.0, window)
        .into_iter()
        .map(|sample| {
            let per_segment: BTreeMap<BusinessSegment, f64> = segments
                .iter()
                .map(|&segment| {
                    let value = sample.value * segment_multiplier(segment) * ctx.spread(0.8, 0.4);
                    (segment, value)
                })
                .collect();
            SegmentedSample {
                timestamp: sample.timestamp,
                total: sample.value,
                segments: per_segment,
            }
        })
        .collect()
}
