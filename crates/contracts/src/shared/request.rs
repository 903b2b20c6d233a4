use serde::{Deserialize, Serialize};

use super::time_range::{DateRange, TimeRange};

/// Input of every dataset assembler.
///
/// `F` is the dashboard's typed filter set; all its dimensions default to
/// "no constraint", so `{}` is a valid request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "F: Deserialize<'de> + Default"))]
pub struct DashboardRequest<F> {
    #[serde(default)]
    pub time_range: TimeRange,
    #[serde(default)]
    pub filters: F,
    #[serde(default)]
    pub date_range: DateRange,
}

impl<F: Default> DashboardRequest<F> {
    pub fn new(time_range: TimeRange) -> Self {
        Self {
            time_range,
            filters: F::default(),
            date_range: DateRange::default(),
        }
    }
}

impl<F> DashboardRequest<F> {
    pub fn with_filters(time_range: TimeRange, filters: F) -> Self {
        Self {
            time_range,
            filters,
            date_range: DateRange::default(),
        }
    }

    pub fn custom(range: DateRange, filters: F) -> Self {
        Self {
            time_range: TimeRange::Custom,
            filters,
            date_range: range,
        }
    }
}
