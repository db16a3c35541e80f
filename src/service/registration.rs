//! Catalog registration

use tracing::{Level, event};

use crate::{
    catalog::EventCatalog,
    domain::{constant::registration, error::TelemetryError},
    port::telemetry::EventTypeRegistrar
};

/// Register every catalogued event type, in catalog order.
///
/// Stops at the first failure; event types registered before it stay registered.
pub async fn register_catalog(
    catalog: &EventCatalog,
    registrar: &dyn EventTypeRegistrar
) -> Result<usize, TelemetryError> {
    event!(Level::DEBUG, event = registration::REGISTRATION_STARTED, event_types = catalog.len());

    for definition in catalog {
        if let Err(e) = registrar.register_event_type(definition).await {
            event!(Level::ERROR, event = registration::REGISTRATION_FAILED,
                   event_type = definition.event_type, error = %e);
            return Err(e);
        }
        event!(Level::DEBUG, event = registration::EVENT_TYPE_REGISTERED, event_type = definition.event_type);
    }

    event!(Level::INFO, event = registration::REGISTRATION_COMPLETED, event_types = catalog.len());
    Ok(catalog.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapter::registrar::InMemoryRegistrar, catalog::ilm_policy};

    #[tokio::test]
    async fn test_register_security_solution_catalog() {
        let catalog = EventCatalog::security_solution();
        let registrar = InMemoryRegistrar::new();

        let count = register_catalog(&catalog, &registrar).await.unwrap();

        assert_eq!(count, 9);
        let registered: Vec<&str> = registrar.registered().await.iter().map(|d| d.event_type).collect();
        assert_eq!(registered, catalog.event_types());
    }

    #[tokio::test]
    async fn test_registration_stops_at_first_failure() {
        let catalog = EventCatalog::security_solution();
        let registrar = InMemoryRegistrar::new();
        registrar.register_event_type(&ilm_policy()).await.unwrap();

        let err = register_catalog(&catalog, &registrar).await.unwrap_err();

        assert_eq!(err, TelemetryError::AlreadyRegistered("telemetry_ilm_policy_event".to_string()));
        // ilm policy is 7th; the six before it went through
        assert_eq!(registrar.registered().await.len(), 7);
        assert!(!registrar.is_registered("telemetry_ilm_stats_event").await);
    }
}
