use contracts::dashboards::d401_analytics::{
    AnalyticsDataset, AnalyticsRequest, CountryStats, DeviceAnalytics, DevicePerformance,
    DevicePerformanceByType, DeviceShare, ExitPage, KeyMetrics, TrafficSourceStats, UserBehavior,
    UserSegmentShare,
};
use contracts::enums::{Device, TrafficSource, UserSegment};
use contracts::shared::{SeriesMetric, TimeWindow};
use rand::Rng;

use crate::shared::context::GenContext;
use crate::shared::filter::allows;
use crate::shared::time_window::{resolve, WindowProfile};

// (segment, share %, change)
const USER_SEGMENTS: [(UserSegment, f64, f64); 3] = [
    (UserSegment::NewUsers, 35.0, 2.3),
    (UserSegment::Returning, 45.0, 5.1),
    (UserSegment::Inactive, 20.0, -3.4),
];

// (source, sessions base, sessions spread, conversion %)
const TRAFFIC_SOURCES: [(TrafficSource, f64, f64, f64); 5] = [
    (TrafficSource::Direct, 35_000.0, 5_000.0, 3.2),
    (TrafficSource::OrganicSearch, 28_000.0, 5_000.0, 2.8),
    (TrafficSource::Referral, 15_000.0, 3_000.0, 4.1),
    (TrafficSource::Social, 12_000.0, 2_000.0, 3.5),
    (TrafficSource::Email, 8_000.0, 1_500.0, 4.8),
];

const EXIT_PAGES: [(&str, u32, f64); 4] = [
    ("/checkout", 1200, 15.2),
    ("/pricing", 850, 12.8),
    ("/product", 720, 9.5),
    ("/blog", 680, 8.9),
];

const COUNTRIES: [(&str, u32, f64); 5] = [
    ("United States", 45_000, 125_000.0),
    ("United Kingdom", 15_000, 45_000.0),
    ("Germany", 12_000, 35_000.0),
    ("France", 9_000, 28_000.0),
    ("Japan", 7_500, 22_000.0),
];

const DEVICES: [(Device, f64, f64); 3] = [
    (Device::Mobile, 58.0, 4.2),
    (Device::Desktop, 32.0, -2.1),
    (Device::Tablet, 10.0, -1.8),
];

/// Web analytics: traffic, engagement, behaviour and device split.
pub fn assemble<R: Rng>(request: &AnalyticsRequest, ctx: &mut GenContext<R>) -> AnalyticsDataset {
    let window = resolve(
        request.time_range,
        &request.date_range,
        WindowProfile::Daily,
        ctx.now(),
    );
    let filters = &request.filters;

    let key_metrics = KeyMetrics {
        active_users: series_metric(ctx, &window, 12_500.0, 2_500.0, 8.5, true),
        engagement: series_metric(ctx, &window, 65.0, 10.0, 4.2, false),
        conversion_rate: series_metric(ctx, &window, 3.2, 1.0, -0.8, false),
        average_session_time: series_metric(ctx, &window, 245.0, 30.0, 12.3, false),
    };

    let user_segments = USER_SEGMENTS
        .iter()
        .filter(|(name, _, _)| allows(&filters.segments, name))
        .map(|&(name, value, change)| UserSegmentShare {
            name,
            value,
            change,
        })
        .collect();

    let traffic_sources: Vec<TrafficSourceStats> = TRAFFIC_SOURCES
        .iter()
        .filter(|(source, ..)| allows(&filters.channels, source))
        .map(|&(source, base, spread, conversion)| TrafficSourceStats {
            source,
            sessions: ctx.spread(base, spread),
            conversion,
        })
        .collect();

    let user_behavior = UserBehavior {
        page_views: ctx.series(25_000.0, 5_000.0, &window),
        bounce_rate: ctx.series(45.0, 10.0, &window),
        exit_pages: EXIT_PAGES
            .iter()
            .map(|&(page, exits, rate)| ExitPage {
                page: page.to_string(),
                exits,
                rate,
            })
            .collect(),
    };

    tracing::debug!(
        points = window.point_count,
        sources = traffic_sources.len(),
        "assembled analytics dataset"
    );

    AnalyticsDataset {
        key_metrics,
        user_segments,
        traffic_sources,
        user_behavior,
        geographic_data: COUNTRIES
            .iter()
            .map(|&(country, users, revenue)| CountryStats {
                country: country.to_string(),
                users,
                revenue,
            })
            .collect(),
        device_analytics: device_analytics(),
    }
}

/// Headline card: the current value is drawn from `[base, base + spread)`,
/// the history is noise around `base`.
fn series_metric<R: Rng>(
    ctx: &mut GenContext<R>,
    window: &TimeWindow,
    base: f64,
    spread: f64,
    trend: f64,
    whole: bool,
) -> SeriesMetric {
    let current = if whole {
        ctx.whole(base, spread)
    } else {
        ctx.spread(base, spread)
    };
    SeriesMetric {
        current,
        trend,
        history: ctx.series(base, spread, window),
    }
}

fn device_analytics() -> DeviceAnalytics {
    DeviceAnalytics {
        distribution: DEVICES
            .iter()
            .map(|&(device, share, growth)| DeviceShare {
                device,
                share,
                growth,
            })
            .collect(),
        performance: DevicePerformanceByType {
            mobile: DevicePerformance {
                load_time: 2.8,
                bounce_rate: 42.0,
            },
            desktop: DevicePerformance {
                load_time: 1.9,
                bounce_rate: 35.0,
            },
            tablet: DevicePerformance {
                load_time: 2.4,
                bounce_rate: 38.0,
            },
        },
    }
}
