//! Telemetry reporting service
//!
//! Gates events on the configuration and the catalog before handing them to
//! the reporter.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{Level, event};

use crate::{
    catalog::EventCatalog,
    config::TelemetryConfig,
    domain::{
        asset_criticality::{OutcomeStatistics, create_processed_file_event},
        constant::reporting,
        error::TelemetryError,
        event::{EventPayload, TelemetryEvent}
    },
    port::telemetry::EventReporter
};

/// What happened to a reported event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Handed to the reporter
    Reported,
    /// Dropped because telemetry is disabled
    Skipped
}

pub struct TelemetryService {
    catalog:  EventCatalog,
    reporter: Arc<dyn EventReporter>,
    enabled:  bool
}

impl TelemetryService {
    pub fn new(catalog: EventCatalog, reporter: Arc<dyn EventReporter>) -> Self {
        Self { catalog, reporter, enabled: true }
    }

    /// Apply `enabled` and `disabled_events` from the configuration
    pub fn from_config(catalog: &EventCatalog, reporter: Arc<dyn EventReporter>, config: &TelemetryConfig) -> Self {
        Self { catalog: catalog.without(&config.disabled_events), reporter, enabled: config.enabled }
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Forward an event whose type is in the catalog
    pub async fn report(&self, event: TelemetryEvent) -> Result<ReportOutcome, TelemetryError> {
        if !self.enabled {
            event!(Level::DEBUG, event = reporting::EVENT_SKIPPED, event_type = %event.event_type);
            return Ok(ReportOutcome::Skipped);
        }

        if !self.catalog.contains(&event.event_type) {
            event!(Level::WARN, event = reporting::EVENT_REJECTED, event_type = %event.event_type);
            return Err(TelemetryError::UnknownEventType(event.event_type));
        }

        let event_type = event.event_type.clone();
        match self.reporter.report_event(event).await {
            Ok(()) => {
                event!(Level::DEBUG, event = reporting::EVENT_REPORTED, event_type = %event_type);
                Ok(ReportOutcome::Reported)
            }
            Err(e) => {
                event!(Level::ERROR, event = reporting::REPORT_FAILED, event_type = %event_type, error = %e);
                Err(e)
            }
        }
    }

    pub async fn report_payload<P: EventPayload + Sync>(&self, payload: &P) -> Result<ReportOutcome, TelemetryError> {
        self.report(TelemetryEvent::from_payload(payload)?).await
    }

    /// Build and report the asset criticality processed-file event
    pub async fn report_processed_file(
        &self,
        result: Option<OutcomeStatistics>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>
    ) -> Result<ReportOutcome, TelemetryError> {
        let (_, payload) = create_processed_file_event(result, start_time, end_time);
        self.report_payload(&payload).await
    }
}
