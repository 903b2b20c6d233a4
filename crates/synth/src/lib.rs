//! Synthetic data engine behind the analytics dashboards.
//!
//! Every request resolves a time window, generates a seeded entity
//! population, filters it and reduces it into the dashboard's dataset.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;

#[cfg(test)]
pub(crate) mod test_support;
