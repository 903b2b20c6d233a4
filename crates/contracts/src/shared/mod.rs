pub mod metric;
pub mod request;
pub mod series;
pub mod stats;
pub mod time_range;

pub use metric::*;
pub use request::DashboardRequest;
pub use series::{Sample, Series};
pub use stats::*;
pub use time_range::{DateRange, TimeRange, TimeWindow};
