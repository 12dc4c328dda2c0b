pub mod dashboard_config;

pub use dashboard_config::{DashboardConfig, DEFAULT_ENDPOINT};
