//! Data contracts between the dataset assemblers and the dashboard pages.
//!
//! Every dataset struct in [`dashboards`] is the exact shape a page
//! destructures; renaming a field is a breaking change for the UI.

#[macro_use]
mod macros;

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
