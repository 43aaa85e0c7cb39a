// Service exports
pub mod fleet;
pub mod metrics;

pub use fleet::{Fleet, FleetError};
pub use metrics::{HttpMetricsSource, MetricsError, MetricsSource, StaticMetricsSource};
