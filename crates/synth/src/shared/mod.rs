pub mod aggregate;
pub mod config;
pub mod context;
pub mod error;
pub mod filter;
pub mod registry;
pub mod series;
pub mod time_window;
