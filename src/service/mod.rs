//! Services wiring the catalog to the telemetry ports

pub mod registration;
pub mod telemetry;

pub use registration::register_catalog;
pub use telemetry::{ReportOutcome, TelemetryService};
