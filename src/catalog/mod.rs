//! Event catalog
//!
//! The full set of event types the security solution registers with the
//! analytics client. The catalog is built once at startup and handed by
//! reference to whatever registers or reports events.

mod alert_suppression;
mod asset_criticality;
mod indices_metadata;
mod risk_score;

use std::collections::HashSet;

use serde::Serialize;
use tracing::{Level, event};

pub use alert_suppression::alert_suppression;
pub use asset_criticality::asset_criticality_processed_file;
pub use indices_metadata::{data_stream, ilm_policy, ilm_stats, index_stats};
pub use risk_score::{risk_score_execution_cancellation, risk_score_execution_error, risk_score_execution_success};

use crate::domain::{constant::catalog, error::TelemetryError, event::EventTypeDefinition};

/// Immutable, ordered table of event type definitions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventCatalog {
    events: Vec<EventTypeDefinition>
}

impl EventCatalog {
    /// Build a catalog, rejecting duplicate event types
    pub fn new(events: Vec<EventTypeDefinition>) -> Result<Self, TelemetryError> {
        let mut seen = HashSet::new();
        for definition in &events {
            if !seen.insert(definition.event_type) {
                return Err(TelemetryError::DuplicateEventType(definition.event_type.to_string()));
            }
        }

        event!(Level::DEBUG, event = catalog::CATALOG_BUILT, event_types = events.len());
        Ok(Self { events })
    }

    /// Every event type owned by the security solution, in registration order
    pub fn security_solution() -> Self {
        Self {
            events: vec![
                risk_score_execution_success(),
                risk_score_execution_error(),
                risk_score_execution_cancellation(),
                asset_criticality_processed_file(),
                alert_suppression(),
                data_stream(),
                ilm_policy(),
                ilm_stats(),
                index_stats(),
            ]
        }
    }

    pub fn get(&self, event_type: &str) -> Option<&EventTypeDefinition> {
        self.events.iter().find(|definition| definition.event_type == event_type)
    }

    pub fn contains(&self, event_type: &str) -> bool {
        self.get(event_type).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventTypeDefinition> {
        self.events.iter()
    }

    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.iter().map(|definition| definition.event_type).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// A copy of the catalog without the named event types. Unknown names are ignored.
    pub fn without(&self, disabled: &[String]) -> Self {
        let events: Vec<EventTypeDefinition> = self
            .events
            .iter()
            .filter(|definition| !disabled.iter().any(|name| name == definition.event_type))
            .cloned()
            .collect();

        if events.len() != self.events.len() {
            event!(Level::DEBUG, event = catalog::EVENTS_DISABLED, removed = self.events.len() - events.len());
        }

        Self { events }
    }
}

impl<'a> IntoIterator for &'a EventCatalog {
    type IntoIter = std::slice::Iter<'a, EventTypeDefinition>;
    type Item = &'a EventTypeDefinition;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
