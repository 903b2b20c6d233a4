use contracts::dashboards::d404_customer_report::{
    Acquisition, ChannelShare, CustomerGrowth, CustomerJourney, CustomerReportDataset,
    CustomerReportOverview, CustomerReportRequest, Engagement, FunnelConversion, IssueCount,
    SatisfactionSummary, SizeSegment, SupportSummary,
};
use contracts::enums::{AcquisitionChannel, CompanySize};
use contracts::shared::RatingCount;
use rand::Rng;

use crate::shared::aggregate::{
    cohort_retention, compare, net_promoter, rating_average, satisfied_share, shares,
};
use crate::shared::context::GenContext;
use crate::shared::filter::allows;
use crate::shared::time_window::{resolve, WindowProfile};

// (size, accounts, revenue, growth %)
const SEGMENTS: [(CompanySize, u32, f64, f64); 4] = [
    (CompanySize::Enterprise, 234, 456_000.0, 15.3),
    (CompanySize::MidMarket, 567, 678_000.0, 12.7),
    (CompanySize::Smb, 1234, 345_000.0, 8.9),
    (CompanySize::Startup, 789, 123_000.0, 18.2),
];

/// Relative weight of each acquisition channel before jitter.
const CHANNEL_WEIGHTS: [(AcquisitionChannel, f64); 5] = [
    (AcquisitionChannel::OrganicSearch, 35.0),
    (AcquisitionChannel::Direct, 25.0),
    (AcquisitionChannel::Referral, 20.0),
    (AcquisitionChannel::Social, 15.0),
    (AcquisitionChannel::PaidSearch, 5.0),
];

const REVIEWS: [(u8, u64); 5] = [(5, 456), (4, 234), (3, 89), (2, 34), (1, 12)];

const TOP_ISSUES: [(&str, u32); 5] = [
    ("Login Problems", 45),
    ("Billing Questions", 34),
    ("Feature Requests", 28),
    ("Technical Issues", 23),
    ("Account Setup", 15),
];

const COHORTS: usize = 6;
const COHORT_MONTHS: usize = 6;

/// Customer report: period comparison, segments, engagement, cohorts and the
/// acquisition to support journey.
pub fn assemble<R: Rng>(
    request: &CustomerReportRequest,
    ctx: &mut GenContext<R>,
) -> CustomerReportDataset {
    let window = resolve(
        request.time_range,
        &request.date_range,
        WindowProfile::Daily,
        ctx.now(),
    );

    let overview = CustomerReportOverview {
        total_customers: compare(ctx.whole(12_543.0, 1_000.0), ctx.whole(11_234.0, 1_000.0)),
        active_users: compare(ctx.whole(8_976.0, 500.0), ctx.whole(8_123.0, 500.0)),
        customer_lifetime_value: compare(ctx.spread(890.0, 100.0), ctx.spread(780.0, 100.0)),
        retention_rate: compare(ctx.spread(92.0, 5.0), ctx.spread(89.0, 5.0)),
    };

    let growth = CustomerGrowth {
        new_customers: ctx.series(150.0, 30.0, &window),
        churned_customers: ctx.series(20.0, 8.0, &window),
        net_growth: ctx.series(130.0, 25.0, &window),
    };

    let segments: Vec<SizeSegment> = SEGMENTS
        .iter()
        .filter(|(name, ..)| allows(&request.filters.segments, name))
        .map(|&(name, count, revenue, growth)| SizeSegment {
            name,
            count,
            revenue,
            growth,
        })
        .collect();

    let engagement = Engagement {
        daily: ctx.series(5_000.0, 1_000.0, &window),
        weekly: ctx.series(8_000.0, 1_500.0, &window),
        monthly: ctx.series(12_000.0, 2_000.0, &window),
    };

    let now = ctx.now();
    let retention_cohorts = cohort_retention(ctx.rng(), now, COHORTS, COHORT_MONTHS, 1_000, 500);
    let customer_journey = customer_journey(ctx);

    tracing::debug!(
        points = window.point_count,
        segments = segments.len(),
        "assembled customer report dataset"
    );

    CustomerReportDataset {
        overview,
        growth,
        segments,
        engagement,
        retention_cohorts,
        customer_journey,
    }
}

fn customer_journey<R: Rng>(ctx: &mut GenContext<R>) -> CustomerJourney {
    let weights: Vec<f64> = CHANNEL_WEIGHTS
        .iter()
        .map(|(_, weight)| weight * ctx.spread(0.9, 0.2))
        .collect();
    let channels = CHANNEL_WEIGHTS
        .iter()
        .zip(shares(&weights))
        .map(|(&(name, _), value)| ChannelShare { name, value })
        .collect();

    let reviews: Vec<RatingCount> = REVIEWS
        .iter()
        .map(|&(rating, count)| RatingCount { rating, count })
        .collect();

    CustomerJourney {
        acquisition: Acquisition {
            channels,
            conversion: FunnelConversion {
                visit_to_signup: ctx.spread(12.0, 3.0),
                signup_to_paid: ctx.spread(35.0, 5.0),
            },
        },
        satisfaction: SatisfactionSummary {
            nps: net_promoter(&reviews),
            csat: satisfied_share(&reviews),
            average_rating: rating_average(&reviews),
            reviews,
        },
        support: SupportSummary {
            average_response_time: ctx.spread(2.5, 1.0),
            tickets_resolved: ctx.count(456, 100),
            satisfaction_rate: ctx.spread(92.0, 5.0),
            top_issues: TOP_ISSUES
                .iter()
                .map(|&(issue, count)| IssueCount {
                    issue: issue.to_string(),
                    count,
                })
                .collect(),
        },
    }
}
