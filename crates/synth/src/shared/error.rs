use contracts::enums::DashboardKind;
use thiserror::Error;

/// Errors raised at the request boundary.
///
/// Assemblers themselves never fail; everything here is about turning raw
/// input into a typed request or the result into JSON.
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("unknown dashboard: {0}")]
    UnknownDashboard(String),

    #[error("invalid filters for {dashboard}: {source}")]
    InvalidFilters {
        dashboard: DashboardKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid filter argument `{0}`, expected DIMENSION=VALUE")]
    InvalidFilterArgument(String),

    #[error("invalid date `{value}`: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),
}
