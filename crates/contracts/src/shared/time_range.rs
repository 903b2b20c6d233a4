use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Symbolic ranges
// ---------------------------------------------------------------------------

/// Symbolic time range selected on a dashboard.
///
/// Parsing never fails: any token that is not recognised becomes
/// [`TimeRange::Unknown`] and the resolver falls back to the page default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeRange {
    LastHour,
    Last6Hours,
    Last24Hours,
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    LastMonth,
    Last3Months,
    Last6Months,
    LastYear,
    Custom,
    Unknown,
}

impl TimeRange {
    /// Wire token, e.g. `"30d"`.
    pub fn token(&self) -> &'static str {
        match self {
            TimeRange::LastHour => "1h",
            TimeRange::Last6Hours => "6h",
            TimeRange::Last24Hours => "24h",
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
            TimeRange::Last90Days => "90d",
            TimeRange::LastMonth => "1m",
            TimeRange::Last3Months => "3m",
            TimeRange::Last6Months => "6m",
            TimeRange::LastYear => "1y",
            TimeRange::Custom => "custom",
            TimeRange::Unknown => "unknown",
        }
    }

    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "1h" => TimeRange::LastHour,
            "6h" => TimeRange::Last6Hours,
            "24h" => TimeRange::Last24Hours,
            "7d" => TimeRange::Last7Days,
            "30d" => TimeRange::Last30Days,
            "90d" => TimeRange::Last90Days,
            "1m" => TimeRange::LastMonth,
            "3m" => TimeRange::Last3Months,
            "6m" => TimeRange::Last6Months,
            "1y" => TimeRange::LastYear,
            "custom" => TimeRange::Custom,
            _ => TimeRange::Unknown,
        }
    }
}

impl From<String> for TimeRange {
    fn from(value: String) -> Self {
        Self::from_token(&value)
    }
}

impl From<TimeRange> for String {
    fn from(value: TimeRange) -> Self {
        value.token().to_string()
    }
}

impl FromStr for TimeRange {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ---------------------------------------------------------------------------
// Explicit ranges and resolved windows
// ---------------------------------------------------------------------------

/// Explicit `[from, to]` pair picked in a date range control.
/// Either end may be missing while the user is still picking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange(pub Option<DateTime<Utc>>, pub Option<DateTime<Utc>>);

impl DateRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self(Some(from), Some(to))
    }

    /// Both ends, when both are present.
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.0, self.1) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }
}

/// A concrete interval with a sampling step.
///
/// `start <= end`, `point_count >= 1` and `step_seconds >= 1` always hold for
/// windows produced by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub point_count: usize,
    pub step_seconds: i64,
}

impl TimeWindow {
    pub fn step(&self) -> Duration {
        Duration::seconds(self.step_seconds)
    }

    pub fn span(&self) -> Duration {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip_through_serde() {
        let json = serde_json::to_string(&TimeRange::Last90Days).unwrap();
        assert_eq!(json, "\"90d\"");
        let parsed: TimeRange = serde_json::from_str("\"6h\"").unwrap();
        assert_eq!(parsed, TimeRange::Last6Hours);
    }

    #[test]
    fn test_unknown_token_does_not_fail() {
        let parsed: TimeRange = serde_json::from_str("\"fortnight\"").unwrap();
        assert_eq!(parsed, TimeRange::Unknown);
        assert_eq!("".parse::<TimeRange>().unwrap(), TimeRange::Unknown);
    }

    #[test]
    fn test_date_range_bounds() {
        let now = Utc::now();
        assert!(DateRange(Some(now), None).bounds().is_none());
        assert_eq!(DateRange::new(now, now).bounds(), Some((now, now)));

        let parsed: DateRange = serde_json::from_str("[null, null]").unwrap();
        assert_eq!(parsed, DateRange::default());
    }
}
