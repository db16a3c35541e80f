//! Event type definitions and emitted telemetry events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{error::TelemetryError, schema::Schema};

/// An event type paired with the schema of its payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeDefinition {
    /// Name the event is registered and reported under
    pub event_type: &'static str,
    /// Shape of the payload
    pub schema:     Schema
}

impl EventTypeDefinition {
    pub fn new(event_type: &'static str, schema: Schema) -> Self {
        Self { event_type, schema }
    }
}

/// A typed payload that knows which event type it is reported under
pub trait EventPayload: Serialize {
    fn event_type(&self) -> &'static str;
}

/// An event ready for hand-off to a reporter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub event_type: String,
    pub properties: serde_json::Value
}

impl TelemetryEvent {
    pub fn new(event_type: impl Into<String>, properties: serde_json::Value) -> Self {
        Self { event_type: event_type.into(), properties }
    }

    /// Serialize a typed payload into a reportable event
    pub fn from_payload<P: EventPayload>(payload: &P) -> Result<Self, TelemetryError> {
        Ok(Self::new(payload.event_type(), serde_json::to_value(payload)?))
    }
}

/// Event as written by line-oriented reporters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryEnvelope {
    /// Unique event identifier
    pub event_id:   String,
    /// Time the event was handed to the reporter
    pub timestamp:  DateTime<Utc>,
    pub event_type: String,
    pub properties: serde_json::Value
}

impl From<TelemetryEvent> for TelemetryEnvelope {
    fn from(event: TelemetryEvent) -> Self {
        Self {
            event_id:   Uuid::new_v4().to_string(),
            timestamp:  Utc::now(),
            event_type: event.event_type,
            properties: event.properties
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::schema::SchemaNode;

    #[derive(Serialize)]
    struct Ping {
        count: u32
    }

    impl EventPayload for Ping {
        fn event_type(&self) -> &'static str {
            "ping"
        }
    }

    #[test]
    fn test_from_payload() {
        let event = TelemetryEvent::from_payload(&Ping { count: 3 }).unwrap();

        assert_eq!(event, TelemetryEvent::new("ping", json!({ "count": 3 })));
    }

    #[test]
    fn test_definition_serializes_camel_case() {
        let definition = EventTypeDefinition::new("ping", Schema::new().field("count", SchemaNode::long("Count")));
        let value = serde_json::to_value(&definition).unwrap();

        assert_eq!(value["eventType"], json!("ping"));
        assert_eq!(value["schema"]["count"]["type"], json!("long"));
    }

    #[test]
    fn test_envelope_assigns_identity() {
        let first: TelemetryEnvelope = TelemetryEvent::new("ping", json!({})).into();
        let second: TelemetryEnvelope = TelemetryEvent::new("ping", json!({})).into();

        assert_ne!(first.event_id, second.event_id);
        assert_eq!(first.event_type, "ping");
    }
}
