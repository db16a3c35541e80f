//! Ports towards the external analytics client

pub mod telemetry;

pub use telemetry::{EventReporter, EventTypeRegistrar};
