use std::collections::HashMap;
use std::time::{Duration, Instant};

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use contracts::enums::DashboardKind;
use contracts::shared::DashboardRequest;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::context::GenContext;
use super::error::SynthError;
use crate::dashboards;

/// A request whose filters have not been checked against a dashboard yet.
pub type RawRequest = DashboardRequest<Value>;

type AssembleFn = fn(&RawRequest, &mut GenContext<StdRng>) -> Result<Value, SynthError>;

/// Assembly above this duration is logged as slow.
const SLOW_ASSEMBLY: Duration = Duration::from_millis(50);

/// Shared registry of every dashboard assembler.
pub static REGISTRY: Lazy<DatasetRegistry> = Lazy::new(DatasetRegistry::new);

/// Maps a [`DashboardKind`] to its assembler behind a JSON boundary.
pub struct DatasetRegistry {
    fns: HashMap<DashboardKind, AssembleFn>,
}

impl DatasetRegistry {
    pub fn new() -> Self {
        let mut fns: HashMap<DashboardKind, AssembleFn> = HashMap::new();

        fns.insert(DashboardKind::Overview, |raw, ctx| {
            run(DashboardKind::Overview, raw, ctx, dashboards::d400_overview::service::assemble::<StdRng>)
        });
        fns.insert(DashboardKind::Analytics, |raw, ctx| {
            run(DashboardKind::Analytics, raw, ctx, dashboards::d401_analytics::service::assemble::<StdRng>)
        });
        fns.insert(DashboardKind::Sales, |raw, ctx| {
            run(DashboardKind::Sales, raw, ctx, dashboards::d402_sales::service::assemble::<StdRng>)
        });
        fns.insert(DashboardKind::Customers, |raw, ctx| {
            run(DashboardKind::Customers, raw, ctx, dashboards::d403_customers::service::assemble::<StdRng>)
        });
        fns.insert(DashboardKind::CustomerReport, |raw, ctx| {
            run(
                DashboardKind::CustomerReport,
                raw,
                ctx,
                dashboards::d404_customer_report::service::assemble::<StdRng>,
            )
        });
        fns.insert(DashboardKind::Campaigns, |raw, ctx| {
            run(DashboardKind::Campaigns, raw, ctx, dashboards::d405_campaigns::service::assemble::<StdRng>)
        });
        fns.insert(DashboardKind::Support, |raw, ctx| {
            run(DashboardKind::Support, raw, ctx, dashboards::d406_support::service::assemble::<StdRng>)
        });
        fns.insert(DashboardKind::Revenue, |raw, ctx| {
            run(DashboardKind::Revenue, raw, ctx, dashboards::d407_revenue::service::assemble::<StdRng>)
        });
        fns.insert(DashboardKind::Growth, |raw, ctx| {
            run(DashboardKind::Growth, raw, ctx, dashboards::d408_growth::service::assemble::<StdRng>)
        });
        fns.insert(DashboardKind::Automation, |raw, ctx| {
            run(DashboardKind::Automation, raw, ctx, dashboards::d409_automation::service::assemble::<StdRng>)
        });
        fns.insert(DashboardKind::Performance, |raw, ctx| {
            run(
                DashboardKind::Performance,
                raw,
                ctx,
                dashboards::d410_performance::service::assemble::<StdRng>,
            )
        });

        Self { fns }
    }

    /// Validates the request's filters for `kind`, assembles the dataset and
    /// returns it as JSON.
    pub fn assemble(
        &self,
        kind: DashboardKind,
        raw: &RawRequest,
        ctx: &mut GenContext<StdRng>,
    ) -> Result<Value, SynthError> {
        let assemble_fn = self.fns.get(&kind).ok_or_else(|| {
            tracing::warn!("dashboard {} not found in registry", kind);
            SynthError::UnknownDashboard(kind.to_string())
        })?;

        let started = Instant::now();
        let dataset = assemble_fn(raw, ctx)?;
        let elapsed = started.elapsed();
        if elapsed > SLOW_ASSEMBLY {
            tracing::warn!("dashboard {} took {:?} to assemble", kind, elapsed);
        } else {
            tracing::debug!("dashboard {} assembled in {:?}", kind, elapsed);
        }

        Ok(dataset)
    }

    /// Dashboards in registration order of [`DashboardKind`].
    pub fn kinds(&self) -> Vec<DashboardKind> {
        let mut kinds: Vec<DashboardKind> = self.fns.keys().copied().collect();
        kinds.sort();
        kinds
    }
}

impl Default for DatasetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn run<F, D>(
    kind: DashboardKind,
    raw: &RawRequest,
    ctx: &mut GenContext<StdRng>,
    assemble: fn(&DashboardRequest<F>, &mut GenContext<StdRng>) -> D,
) -> Result<Value, SynthError>
where
    F: DeserializeOwned + Default,
    D: Serialize,
{
    let filters: F = if raw.filters.is_null() {
        F::default()
    } else {
        serde_json::from_value(raw.filters.clone())
            .map_err(|source| SynthError::InvalidFilters { dashboard: kind, source })?
    };
    let request = DashboardRequest {
        time_range: raw.time_range,
        filters,
        date_range: raw.date_range,
    };

    Ok(serde_json::to_value(assemble(&request, ctx))?)
}

// ---------------------------------------------------------------------------
// Raw input helpers
// ---------------------------------------------------------------------------

/// Builds a filters object from `dimension=value` pairs.
///
/// Repeated dimensions accumulate into one list; `true`/`false` become plain
/// booleans (for switches such as `comparisonMode`).
pub fn filters_from_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Value, SynthError> {
    let mut map = Map::new();

    for pair in pairs {
        let pair = pair.as_ref();
        let (dimension, value) = pair
            .split_once('=')
            .map(|(d, v)| (d.trim(), v.trim()))
            .filter(|(d, v)| !d.is_empty() && !v.is_empty())
            .ok_or_else(|| SynthError::InvalidFilterArgument(pair.to_string()))?;

        if let Ok(flag) = value.parse::<bool>() {
            map.insert(dimension.to_string(), Value::Bool(flag));
            continue;
        }

        let entry = map
            .entry(dimension.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        match entry {
            Value::Array(values) => values.push(Value::String(value.to_string())),
            other => *other = Value::Array(vec![Value::String(value.to_string())]),
        }
    }

    Ok(Value::Object(map))
}

/// Parses an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, SynthError> {
    let value = value.trim();
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => Ok(parsed.with_timezone(&Utc)),
        Err(source) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
            .map_err(|_| SynthError::InvalidDate {
                value: value.to_string(),
                source,
            }),
    }
}
