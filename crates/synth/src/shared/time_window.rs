use chrono::{DateTime, Duration, Months, Utc};
use contracts::shared::{DateRange, TimeRange, TimeWindow};

const MINUTE: i64 = 60;
const FIVE_MINUTES: i64 = 5 * MINUTE;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// How a dashboard page interprets range tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowProfile {
    /// 7d / 30d / 90d, one point per day.
    Daily,
    /// 1m / 3m / 6m / 1y, one point per day, calendar month arithmetic.
    Calendar,
    /// 1h / 6h / 24h / 7d at minute or hour resolution.
    Live,
}

impl WindowProfile {
    /// Range used when the requested token is not accepted by this profile.
    pub fn fallback(&self) -> TimeRange {
        match self {
            WindowProfile::Daily => TimeRange::Last30Days,
            WindowProfile::Calendar => TimeRange::Last6Months,
            WindowProfile::Live => TimeRange::LastHour,
        }
    }

    fn max_custom_span(&self) -> Duration {
        match self {
            WindowProfile::Daily | WindowProfile::Calendar => Duration::days(730),
            WindowProfile::Live => Duration::days(7),
        }
    }

    fn fallback_plan(&self) -> Plan {
        match self {
            WindowProfile::Daily => Plan::Fixed { points: 30, step: DAY },
            WindowProfile::Calendar => Plan::Months(6),
            WindowProfile::Live => Plan::Fixed { points: 60, step: MINUTE },
        }
    }
}

enum Plan {
    Fixed { points: usize, step: i64 },
    Months(u32),
}

fn plan(profile: WindowProfile, range: TimeRange) -> Option<Plan> {
    use TimeRange::*;
    use WindowProfile::*;

    let plan = match (profile, range) {
        (Daily, Last7Days) => Plan::Fixed { points: 7, step: DAY },
        (Daily, Last30Days) => Plan::Fixed { points: 30, step: DAY },
        (Daily, Last90Days) => Plan::Fixed { points: 90, step: DAY },
        (Calendar, LastMonth) => Plan::Months(1),
        (Calendar, Last3Months) => Plan::Months(3),
        (Calendar, Last6Months) => Plan::Months(6),
        (Calendar, LastYear) => Plan::Months(12),
        (Live, LastHour) => Plan::Fixed { points: 60, step: MINUTE },
        (Live, Last6Hours) => Plan::Fixed { points: 72, step: FIVE_MINUTES },
        (Live, Last24Hours) => Plan::Fixed { points: 288, step: FIVE_MINUTES },
        (Live, Last7Days) => Plan::Fixed { points: 168, step: HOUR },
        _ => return None,
    };
    Some(plan)
}

/// Turns a symbolic range (or an explicit date range) into a concrete window
/// ending at `now`.
///
/// Never fails: unknown or unsupported tokens and half-picked custom ranges
/// resolve to the profile's fallback.
pub fn resolve(
    range: TimeRange,
    custom: &DateRange,
    profile: WindowProfile,
    now: DateTime<Utc>,
) -> TimeWindow {
    if range == TimeRange::Custom {
        if let Some((from, to)) = custom.bounds() {
            return custom_window(from, to, profile);
        }
        tracing::debug!(
            "custom range without both ends, using {}",
            profile.fallback()
        );
    }

    let plan = plan(profile, range).unwrap_or_else(|| {
        if range != TimeRange::Custom {
            tracing::debug!(
                "range {} not offered by {:?} profile, using {}",
                range,
                profile,
                profile.fallback()
            );
        }
        profile.fallback_plan()
    });

    match plan {
        Plan::Fixed { points, step } => fixed_window(now, points, step),
        Plan::Months(months) => calendar_window(now, months),
    }
}

fn fixed_window(now: DateTime<Utc>, points: usize, step: i64) -> TimeWindow {
    TimeWindow {
        start: now - Duration::seconds(step * points as i64),
        end: now,
        point_count: points,
        step_seconds: step,
    }
}

fn calendar_window(now: DateTime<Utc>, months: u32) -> TimeWindow {
    let start = now
        .checked_sub_months(Months::new(months))
        .unwrap_or_else(|| now - Duration::days(30 * i64::from(months)));
    let days = (now - start).num_days().max(1);

    TimeWindow {
        start: now - Duration::days(days),
        end: now,
        point_count: days as usize,
        step_seconds: DAY,
    }
}

fn custom_window(from: DateTime<Utc>, to: DateTime<Utc>, profile: WindowProfile) -> TimeWindow {
    let (mut start, end) = if from <= to { (from, to) } else { (to, from) };

    let max_span = profile.max_custom_span();
    if end - start > max_span {
        tracing::debug!("custom range clipped to {} days", max_span.num_days());
        start = end - max_span;
    }

    let span = (end - start).num_seconds();
    let step = match profile {
        WindowProfile::Live if span <= HOUR => MINUTE,
        WindowProfile::Live if span <= DAY => FIVE_MINUTES,
        WindowProfile::Live => HOUR,
        WindowProfile::Daily | WindowProfile::Calendar => DAY,
    };

    TimeWindow {
        start,
        end,
        point_count: ((span + step - 1) / step).max(1) as usize,
        step_seconds: step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixed_now;
    use chrono::TimeZone;

    fn symbolic(range: TimeRange, profile: WindowProfile) -> TimeWindow {
        resolve(range, &DateRange::default(), profile, fixed_now())
    }

    #[test]
    fn test_daily_tokens() {
        let w = symbolic(TimeRange::Last7Days, WindowProfile::Daily);
        assert_eq!(w.point_count, 7);
        assert_eq!(w.step_seconds, DAY);
        assert_eq!(w.end, fixed_now());
        assert_eq!(w.span(), Duration::days(7));

        assert_eq!(symbolic(TimeRange::Last90Days, WindowProfile::Daily).point_count, 90);
    }

    #[test]
    fn test_unknown_token_uses_profile_fallback() {
        assert_eq!(
            symbolic(TimeRange::Unknown, WindowProfile::Daily),
            symbolic(TimeRange::Last30Days, WindowProfile::Daily)
        );
        assert_eq!(
            symbolic(TimeRange::Last24Hours, WindowProfile::Daily),
            symbolic(TimeRange::Last30Days, WindowProfile::Daily)
        );
        assert_eq!(
            symbolic(TimeRange::Last7Days, WindowProfile::Calendar),
            symbolic(TimeRange::Last6Months, WindowProfile::Calendar)
        );
        assert_eq!(
            symbolic(TimeRange::Last90Days, WindowProfile::Live),
            symbolic(TimeRange::LastHour, WindowProfile::Live)
        );
    }

    #[test]
    fn test_live_resolutions() {
        let expected = [
            (TimeRange::LastHour, 60, MINUTE),
            (TimeRange::Last6Hours, 72, FIVE_MINUTES),
            (TimeRange::Last24Hours, 288, FIVE_MINUTES),
            (TimeRange::Last7Days, 168, HOUR),
        ];
        for (range, points, step) in expected {
            let w = symbolic(range, WindowProfile::Live);
            assert_eq!((w.point_count, w.step_seconds), (points, step), "{range}");
        }
    }

    #[test]
    fn test_calendar_months_count_whole_days() {
        // 2024-06-15 minus one calendar month is 2024-05-15: 31 days.
        let w = symbolic(TimeRange::LastMonth, WindowProfile::Calendar);
        assert_eq!(w.point_count, 31);
        assert_eq!(w.step_seconds, DAY);

        // Spans 29 February 2024.
        let year = symbolic(TimeRange::LastYear, WindowProfile::Calendar);
        assert_eq!(year.point_count, 366);
    }

    #[test]
    fn test_custom_range_counts_days_and_swaps_ends() {
        let from = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap();

        let w = resolve(TimeRange::Custom, &DateRange::new(from, to), WindowProfile::Daily, fixed_now());
        assert_eq!((w.start, w.end, w.point_count), (from, to, 10));

        let swapped = resolve(TimeRange::Custom, &DateRange::new(to, from), WindowProfile::Daily, fixed_now());
        assert_eq!(swapped, w);
    }

    #[test]
    fn test_custom_range_partial_step_rounds_up() {
        let from = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 3, 11, 12, 0, 0).unwrap();

        let daily = resolve(TimeRange::Custom, &DateRange::new(from, to), WindowProfile::Daily, fixed_now());
        assert_eq!(daily.point_count, 11);
        assert!(daily.end - daily.step() * daily.point_count as i32 <= daily.start);

        // 90 minutes at a 5 minute step.
        let live_to = from + Duration::minutes(90);
        let live = resolve(TimeRange::Custom, &DateRange::new(from, live_to), WindowProfile::Live, fixed_now());
        assert_eq!((live.point_count, live.step_seconds), (18, FIVE_MINUTES));

        // 61 minutes also steps by 5 minutes and needs a 13th point.
        let odd_to = from + Duration::minutes(61);
        let odd = resolve(TimeRange::Custom, &DateRange::new(from, odd_to), WindowProfile::Live, fixed_now());
        assert_eq!(odd.point_count, 13);
        assert!(odd.end - odd.step() * odd.point_count as i32 <= odd.start);
    }

    #[test]
    fn test_custom_range_is_clipped() {
        let to = fixed_now();
        let from = to - Duration::days(5000);
        let w = resolve(TimeRange::Custom, &DateRange::new(from, to), WindowProfile::Daily, fixed_now());
        assert_eq!(w.point_count, 730);
        assert_eq!(w.end, to);

        let live = resolve(TimeRange::Custom, &DateRange::new(from, to), WindowProfile::Live, fixed_now());
        assert_eq!((live.point_count, live.step_seconds), (168, HOUR));
    }

    #[test]
    fn test_degenerate_custom_range_has_one_point() {
        let at = fixed_now();
        let w = resolve(TimeRange::Custom, &DateRange::new(at, at), WindowProfile::Daily, fixed_now());
        assert_eq!(w.point_count, 1);
        assert!(w.start <= w.end);
    }

    #[test]
    fn test_half_picked_custom_range_uses_fallback() {
        let half = DateRange(Some(fixed_now()), None);
        let w = resolve(TimeRange::Custom, &half, WindowProfile::Daily, fixed_now());
        assert_eq!(w, symbolic(TimeRange::Last30Days, WindowProfile::Daily));
    }
}
