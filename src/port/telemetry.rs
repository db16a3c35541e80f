use async_trait::async_trait;

use crate::domain::{
    error::TelemetryError,
    event::{EventTypeDefinition, TelemetryEvent}
};

/// Port for registering event types with the analytics client
#[async_trait]
pub trait EventTypeRegistrar: Send + Sync {
    /// Register one event type and its schema
    async fn register_event_type(&self, definition: &EventTypeDefinition) -> Result<(), TelemetryError>;
}

/// Port for handing events to the analytics client
///
/// Batching, queueing and delivery belong to the implementation.
#[async_trait]
pub trait EventReporter: Send + Sync {
    async fn report_event(&self, event: TelemetryEvent) -> Result<(), TelemetryError>;
}
