use contracts::dashboards::d410_performance::{
    EndpointStats, ErrorRates, ErrorTypeCount, PerformanceDataset, PerformanceRequest,
    RegionPerformance, RequestsData, ServerMetrics,
};
use contracts::enums::{ApiEndpoint, ErrorKind, ServerRegion};
use contracts::shared::{GaugeMetric, TimeWindow};
use rand::Rng;

use crate::shared::context::GenContext;
use crate::shared::filter::allows;
use crate::shared::time_window::{resolve, WindowProfile};

// (kind, max count, trend)
const ERROR_KINDS: [(ErrorKind, u32, f64); 4] = [
    (ErrorKind::ServerError, 40, -5.0),
    (ErrorKind::ClientError, 50, 2.0),
    (ErrorKind::Network, 30, -8.0),
    (ErrorKind::Api, 20, 15.0),
];

// (region, latency base, latency spread, requests base, requests spread)
const REGIONS: [(ServerRegion, f64, f64, f64, f64); 4] = [
    (ServerRegion::NorthAmerica, 85.0, 20.0, 15_000.0, 5_000.0),
    (ServerRegion::Europe, 95.0, 20.0, 12_000.0, 5_000.0),
    (ServerRegion::Asia, 120.0, 30.0, 18_000.0, 5_000.0),
    (ServerRegion::Oceania, 150.0, 30.0, 5_000.0, 2_000.0),
];

// (endpoint, calls base, latency base); both spread by the same amounts
const ENDPOINTS: [(ApiEndpoint, f64, f64); 4] = [
    (ApiEndpoint::Users, 12_500.0, 120.0),
    (ApiEndpoint::Products, 10_000.0, 150.0),
    (ApiEndpoint::Orders, 8_500.0, 180.0),
    (ApiEndpoint::Analytics, 7_500.0, 200.0),
];
const CALLS_SPREAD: f64 = 2_500.0;
const LATENCY_SPREAD: f64 = 50.0;

/// Live infrastructure view at minute/hour resolution.
pub fn assemble<R: Rng>(
    request: &PerformanceRequest,
    ctx: &mut GenContext<R>,
) -> PerformanceDataset {
    let window = resolve(
        request.time_range,
        &request.date_range,
        WindowProfile::Live,
        ctx.now(),
    );
    let filters = &request.filters;

    let server_metrics = ServerMetrics {
        cpu: gauge(ctx, &window, 45.0, 30.0),
        memory: gauge(ctx, &window, 65.0, 20.0),
        response_time: gauge(ctx, &window, 250.0, 150.0),
    };

    let by_type: Vec<ErrorTypeCount> = ERROR_KINDS
        .iter()
        .map(|&(kind, max, trend)| ErrorTypeCount {
            kind,
            count: ctx.count(0, max),
            trend,
        })
        .collect();
    let error_rates = ErrorRates {
        total: by_type.iter().map(|e| e.count).sum(),
        by_type,
    };

    let requests_data = RequestsData {
        total_requests: ctx.count(50_000, 10_000),
        success_rate: ctx.spread(98.5, 1.0),
        avg_response_time: ctx.spread(245.0, 50.0),
        requests_per_second: ctx.spread(850.0, 150.0),
        history: ctx.series(850.0, 150.0, &window),
    };

    let region_performance: Vec<RegionPerformance> = REGIONS
        .iter()
        .filter(|(region, ..)| allows(&filters.regions, region))
        .map(|&(region, latency, latency_spread, requests, requests_spread)| RegionPerformance {
            region,
            latency: ctx.spread(latency, latency_spread),
            requests: ctx.spread(requests, requests_spread),
        })
        .collect();

    let top_endpoints: Vec<EndpointStats> = ENDPOINTS
        .iter()
        .filter(|(endpoint, ..)| allows(&filters.endpoints, endpoint))
        .map(|&(endpoint, calls, latency)| EndpointStats {
            endpoint,
            calls: ctx.spread(calls, CALLS_SPREAD),
            avg_latency: ctx.spread(latency, LATENCY_SPREAD),
        })
        .collect();

    tracing::debug!(
        points = window.point_count,
        step = window.step_seconds,
        regions = region_performance.len(),
        endpoints = top_endpoints.len(),
        "assembled performance dataset"
    );

    PerformanceDataset {
        server_metrics,
        error_rates,
        requests_data,
        region_performance,
        top_endpoints,
    }
}

fn gauge<R: Rng>(ctx: &mut GenContext<R>, window: &TimeWindow, base: f64, spread: f64) -> GaugeMetric {
    GaugeMetric {
        current: ctx.spread(base, spread),
        history: ctx.series(base, spread, window),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{key_paths, seeded};
    use contracts::dashboards::d410_performance::PerformanceFilters;
    use contracts::shared::TimeRange;

    #[test]
    fn test_error_total_is_sum_of_types() {
        let dataset = assemble(&PerformanceRequest::new(TimeRange::LastHour), &mut seeded(181));
        let errors = &dataset.error_rates;
        assert_eq!(errors.total, errors.by_type.iter().map(|e| e.count).sum::<u32>());
        assert_eq!(dataset.server_metrics.cpu.history.len(), 60);
        assert_eq!(dataset.requests_data.history.len(), 60);
    }

    #[test]
    fn test_live_ranges_drive_resolution() {
        let day = assemble(&PerformanceRequest::new(TimeRange::Last24Hours), &mut seeded(182));
        assert_eq!(day.server_metrics.memory.history.len(), 288);

        // Daily tokens are not offered on the live page.
        let fallback = assemble(&PerformanceRequest::new(TimeRange::Last90Days), &mut seeded(183));
        assert_eq!(fallback.server_metrics.memory.history.len(), 60);
    }

    #[test]
    fn test_region_and_endpoint_filters() {
        let filters = PerformanceFilters {
            regions: vec![ServerRegion::Oceania],
            endpoints: vec![ApiEndpoint::Orders, ApiEndpoint::Users],
        };
        let dataset = assemble(
            &PerformanceRequest::with_filters(TimeRange::Last6Hours, filters),
            &mut seeded(184),
        );
        assert_eq!(dataset.region_performance.len(), 1);
        assert_eq!(
            dataset.top_endpoints.iter().map(|e| e.endpoint).collect::<Vec<_>>(),
            vec![ApiEndpoint::Users, ApiEndpoint::Orders]
        );
    }

    #[test]
    fn test_shape_is_stable_across_calls() {
        let request = PerformanceRequest::new(TimeRange::LastHour);
        let first = serde_json::to_value(assemble(&request, &mut seeded(185)));
        let second = serde_json::to_value(assemble(&request, &mut seeded(186)));
        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(key_paths(&a), key_paths(&b)),
            _ => panic!("performance dataset must serialize"),
        }
    }
}
