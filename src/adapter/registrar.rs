//! Registrar Implementations

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{error::TelemetryError, event::EventTypeDefinition},
    port::telemetry::EventTypeRegistrar
};

/// In-Memory Registrar Implementation
///
/// Keeps registered definitions in registration order. Like the analytics
/// client, it refuses to register the same event type twice.
#[derive(Clone, Default)]
pub struct InMemoryRegistrar {
    definitions: Arc<RwLock<Vec<EventTypeDefinition>>>
}

impl InMemoryRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn registered(&self) -> Vec<EventTypeDefinition> {
        self.definitions.read().await.clone()
    }

    pub async fn is_registered(&self, event_type: &str) -> bool {
        self.definitions.read().await.iter().any(|definition| definition.event_type == event_type)
    }
}

#[async_trait]
impl EventTypeRegistrar for InMemoryRegistrar {
    async fn register_event_type(&self, definition: &EventTypeDefinition) -> Result<(), TelemetryError> {
        let mut definitions = self.definitions.write().await;

        if definitions.iter().any(|existing| existing.event_type == definition.event_type) {
            return Err(TelemetryError::AlreadyRegistered(definition.event_type.to_string()));
        }

        definitions.push(definition.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ilm_stats, index_stats};

    #[tokio::test]
    async fn test_inmemory_registrar() {
        let registrar = InMemoryRegistrar::new();

        // Initially empty
        assert!(registrar.registered().await.is_empty());

        registrar.register_event_type(&ilm_stats()).await.unwrap();
        registrar.register_event_type(&index_stats()).await.unwrap();

        let registered: Vec<&str> = registrar.registered().await.iter().map(|d| d.event_type).collect();
        assert_eq!(registered, vec!["telemetry_ilm_stats_event", "telemetry_index_stats_event"]);
        assert!(registrar.is_registered("telemetry_index_stats_event").await);
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected() {
        let registrar = InMemoryRegistrar::new();
        registrar.register_event_type(&ilm_stats()).await.unwrap();

        let err = registrar.register_event_type(&ilm_stats()).await.unwrap_err();

        assert_eq!(err, TelemetryError::AlreadyRegistered("telemetry_ilm_stats_event".to_string()));
        assert_eq!(registrar.registered().await.len(), 1);
    }
}
