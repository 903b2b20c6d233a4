//! Pure reductions over generated populations.
//!
//! Nothing here rounds: percentages and averages are returned as computed and
//! formatting is left to the consumer. Every division is guarded so an empty
//! population yields zeros, never NaN.

use chrono::{DateTime, Duration, Utc};
use contracts::shared::{
    Breakdown, CohortRow, DistributionEntry, PeriodMetric, RatingCount, RetentionPoint,
};
use rand::Rng;

/// Days between the starts of two consecutive signup cohorts.
pub const COHORT_SPACING_DAYS: i64 = 30;

const RETENTION_DECAY: f64 = 10.0;
const RETENTION_DECAY_NOISE: f64 = 5.0;

// ---------------------------------------------------------------------------
// Basic reductions
// ---------------------------------------------------------------------------

pub fn sum_by<T>(population: &[T], field: impl Fn(&T) -> f64) -> f64 {
    population.iter().map(field).sum()
}

/// Arithmetic mean, `0` for an empty population.
pub fn average_by<T>(population: &[T], field: impl Fn(&T) -> f64) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    sum_by(population, field) / population.len() as f64
}

pub fn count_where<T>(population: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    population.iter().filter(|item| predicate(item)).count()
}

/// `part / whole * 100`, or `0` when `whole` is zero or not finite.
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 || !whole.is_finite() {
        return 0.0;
    }
    part / whole * 100.0
}

/// Percentage change from `previous` to `current`.
///
/// A zero or non-finite baseline is replaced by `current`, so a period
/// without history reports no change instead of dividing by zero.
pub fn trend(current: f64, previous: f64) -> f64 {
    let baseline = if previous == 0.0 || !previous.is_finite() {
        current
    } else {
        previous
    };
    percent(current - baseline, baseline)
}

pub fn compare(current: f64, previous: f64) -> PeriodMetric {
    PeriodMetric {
        current,
        previous,
        trend: trend(current, previous),
    }
}

/// Share of each value in the total, in input order.
pub fn shares(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    values.iter().map(|value| percent(*value, total)).collect()
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Count and percentage of every domain value, in domain order.
///
/// Values absent from the population are reported with a zero count. When
/// every entity maps into `domain` the percentages sum to 100.
pub fn distribution<T, K: Copy + PartialEq>(
    population: &[T],
    domain: &[K],
    key: impl Fn(&T) -> K,
) -> Vec<DistributionEntry<K>> {
    let total = population.len() as f64;
    domain
        .iter()
        .map(|&value| {
            let count = population.iter().filter(|item| key(item) == value).count();
            DistributionEntry {
                key: value,
                count,
                percentage: percent(count as f64, total),
            }
        })
        .collect()
}

/// Count and summed amount per domain value, in domain order.
pub fn breakdown<T, K: Copy + PartialEq>(
    population: &[T],
    domain: &[K],
    key: impl Fn(&T) -> K,
    amount: impl Fn(&T) -> f64,
) -> Vec<Breakdown<K>> {
    domain
        .iter()
        .map(|&value| {
            let (count, total) = population
                .iter()
                .filter(|item| key(item) == value)
                .fold((0, 0.0), |(count, total), item| (count + 1, total + amount(item)));
            Breakdown {
                key: value,
                count,
                total,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Cohorts
// ---------------------------------------------------------------------------

/// Monthly signup cohorts, oldest first, the newest starting at `now`.
///
/// Month `j` (0-based) retains `100 - j * (10 + U[0, 5))` percent, clamped
/// to `[0, 100]`; points are labelled from month 1.
pub fn cohort_retention<R: Rng>(
    rng: &mut R,
    now: DateTime<Utc>,
    cohorts: usize,
    months: usize,
    size_base: u32,
    size_spread: u32,
) -> Vec<CohortRow> {
    (0..cohorts)
        .map(|i| {
            let age = (cohorts - 1 - i) as i64;
            let size = size_base + (rng.gen::<f64>() * f64::from(size_spread)) as u32;
            let retention_data = (0..months)
                .map(|j| {
                    let decay = RETENTION_DECAY + rng.gen::<f64>() * RETENTION_DECAY_NOISE;
                    RetentionPoint {
                        month: j as u32 + 1,
                        rate: (100.0 - j as f64 * decay).clamp(0.0, 100.0),
                    }
                })
                .collect();
            CohortRow {
                cohort: now - Duration::days(age * COHORT_SPACING_DAYS),
                size,
                retention_data,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

/// 1–5 star counts ordered from 5 down to 1. Out-of-scale ratings are ignored.
pub fn rating_histogram(ratings: impl IntoIterator<Item = u8>) -> Vec<RatingCount> {
    let mut counts = [0u64; 5];
    for rating in ratings {
        if (1..=5).contains(&rating) {
            counts[usize::from(rating - 1)] += 1;
        }
    }
    (1..=5u8)
        .rev()
        .map(|rating| RatingCount {
            rating,
            count: counts[usize::from(rating - 1)],
        })
        .collect()
}

fn total_reviews(histogram: &[RatingCount]) -> f64 {
    histogram.iter().map(|r| r.count as f64).sum()
}

fn reviews_where(histogram: &[RatingCount], predicate: impl Fn(u8) -> bool) -> f64 {
    histogram
        .iter()
        .filter(|r| predicate(r.rating))
        .map(|r| r.count as f64)
        .sum()
}

/// Weighted mean star rating, `0` without reviews.
pub fn rating_average(histogram: &[RatingCount]) -> f64 {
    let total = total_reviews(histogram);
    if total == 0.0 {
        return 0.0;
    }
    histogram
        .iter()
        .map(|r| f64::from(r.rating) * r.count as f64)
        .sum::<f64>()
        / total
}

/// Percentage of 4 and 5 star reviews.
pub fn satisfied_share(histogram: &[RatingCount]) -> f64 {
    percent(reviews_where(histogram, |r| r >= 4), total_reviews(histogram))
}

/// Promoters (5 stars) minus detractors (1–2 stars), in percentage points.
pub fn net_promoter(histogram: &[RatingCount]) -> f64 {
    let total = total_reviews(histogram);
    percent(reviews_where(histogram, |r| r == 5), total)
        - percent(reviews_where(histogram, |r| r <= 2), total)
}

/// Progress towards `target` in percent.
///
/// For lower-is-better figures (acquisition cost) the ratio is inverted, so
/// beating the target reports more than 100.
pub fn progress(current: f64, target: f64, higher_is_better: bool) -> f64 {
    if higher_is_better {
        percent(current, target)
    } else {
        percent(target, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixed_now;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_population_yields_zeros() {
        let empty: [f64; 0] = [];
        assert_eq!(sum_by(&empty, |v| *v), 0.0);
        assert_eq!(average_by(&empty, |v| *v), 0.0);
        assert_eq!(percent(5.0, 0.0), 0.0);
        assert!(shares(&[]).is_empty());
        assert!(distribution(&empty, &[1u8, 2], |_| 1)
            .iter()
            .all(|e| e.count == 0 && e.percentage == 0.0));
    }

    #[test]
    fn test_trend_guards_missing_baseline() {
        assert!(close(trend(120.0, 100.0), 20.0));
        assert!(close(trend(80.0, 100.0), -20.0));
        assert_eq!(trend(50.0, 0.0), 0.0);
        assert_eq!(trend(0.0, 0.0), 0.0);
        assert_eq!(trend(50.0, f64::NAN), 0.0);
        assert!(trend(3.0, 0.0).is_finite());
    }

    #[test]
    fn test_distribution_sums_to_hundred() {
        let population = [1u8, 1, 2, 3, 3, 3];
        let entries = distribution(&population, &[3u8, 2, 1, 4], |v| *v);
        assert_eq!(
            entries.iter().map(|e| e.key).collect::<Vec<_>>(),
            vec![3, 2, 1, 4]
        );
        assert_eq!(entries[0].count, 3);
        assert_eq!(entries[3].count, 0);
        assert!(close(entries.iter().map(|e| e.percentage).sum(), 100.0));
    }

    #[test]
    fn test_breakdown_sums_amounts() {
        let population = [("a", 2.0), ("b", 3.0), ("a", 5.0)];
        let rows = breakdown(&population, &["a", "b", "c"], |p| p.0, |p| p.1);
        assert_eq!((rows[0].count, rows[0].total), (2, 7.0));
        assert_eq!((rows[1].count, rows[1].total), (1, 3.0));
        assert_eq!((rows[2].count, rows[2].total), (0, 0.0));
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let values = shares(&[156_789.0, 123_456.0, 98_765.0]);
        assert!(close(values.iter().sum(), 100.0));
        assert_eq!(shares(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_cohort_retention_decays() {
        let mut rng = StdRng::seed_from_u64(31);
        let rows = cohort_retention(&mut rng, fixed_now(), 6, 6, 1000, 500);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[5].cohort, fixed_now());
        assert_eq!(rows[0].cohort, fixed_now() - Duration::days(150));
        for row in &rows {
            assert!((1000..1500).contains(&row.size));
            assert_eq!(row.retention_data[0].rate, 100.0);
            assert_eq!(
                row.retention_data.iter().map(|p| p.month).collect::<Vec<_>>(),
                vec![1, 2, 3, 4, 5, 6]
            );
            assert!(row.retention_data[1..].iter().all(|p| p.rate <= 90.0 && p.rate >= 0.0));
        }
    }

    #[test]
    fn test_long_cohorts_clamp_at_zero() {
        let mut rng = StdRng::seed_from_u64(32);
        let rows = cohort_retention(&mut rng, fixed_now(), 1, 24, 10, 0);
        assert_eq!(rows[0].size, 10);
        assert!(rows[0].retention_data.iter().all(|p| (0.0..=100.0).contains(&p.rate)));
        assert_eq!(rows[0].retention_data[23].rate, 0.0);
    }

    #[test]
    fn test_rating_summaries() {
        let histogram = rating_histogram([5, 5, 4, 3, 1, 9]);
        assert_eq!(
            histogram.iter().map(|r| (r.rating, r.count)).collect::<Vec<_>>(),
            vec![(5, 2), (4, 1), (3, 1), (2, 0), (1, 1)]
        );
        assert!(close(rating_average(&histogram), 18.0 / 5.0));
        assert!(close(satisfied_share(&histogram), 60.0));
        assert!(close(net_promoter(&histogram), 20.0));

        let none = rating_histogram([]);
        assert_eq!(rating_average(&none), 0.0);
        assert_eq!(satisfied_share(&none), 0.0);
    }

    #[test]
    fn test_progress_direction() {
        assert!(close(progress(125_000.0, 150_000.0, true), 125_000.0 / 150_000.0 * 100.0));
        assert!(close(progress(250.0, 200.0, false), 80.0));
        assert_eq!(progress(10.0, 0.0, true), 0.0);
    }
}
