use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::{BusinessSegment, ProductFeature};
use crate::shared::DashboardRequest;

/// Filter panel of the main dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct OverviewFilters {
    pub segments: Vec<BusinessSegment>,
    pub features: Vec<ProductFeature>,
    /// Adds a second, independently generated series for side-by-side charts.
    pub comparison_mode: bool,
}

pub type OverviewRequest = DashboardRequest<OverviewFilters>;

/// Daily revenue total with its per-segment split.
///
/// Segment values sit next to `total`, keyed by segment label:
/// `{"timestamp": .., "total": 52000.0, "SMB": 78000.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentedSample {
    pub timestamp: DateTime<Utc>,
    pub total: f64,
    #[serde(flatten)]
    pub segments: BTreeMap<BusinessSegment, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureUsage {
    pub name: ProductFeature,
    pub users: u32,
    /// Present only in comparison mode.
    pub previous_users: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSize {
    pub name: BusinessSegment,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewDataset {
    pub time_series_data: Vec<SegmentedSample>,
    pub feature_usage: Vec<FeatureUsage>,
    pub user_segments: Vec<SegmentSize>,
    pub comparison_data: Option<Vec<SegmentedSample>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_segment_values_sit_beside_total() {
        let sample = SegmentedSample {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            total: 50_000.0,
            segments: BTreeMap::from([(BusinessSegment::Smb, 75_000.0)]),
        };

        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["total"], 50_000.0);
        assert_eq!(json["SMB"], 75_000.0);
        assert!(json.get("segments").is_none());

        let parsed: SegmentedSample = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sample);
    }
}
