//! Reporter Implementations
//!
//! - InMemoryReporter: keeps events for tests and dry runs
//! - JsonLinesReporter: writes one JSON envelope per line to any writer

use std::{
    io::Write,
    sync::{Arc, Mutex}
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        error::TelemetryError,
        event::{TelemetryEnvelope, TelemetryEvent}
    },
    port::telemetry::EventReporter
};

/// In-Memory Reporter Implementation
#[derive(Clone, Default)]
pub struct InMemoryReporter {
    events: Arc<RwLock<Vec<TelemetryEvent>>>
}

impl InMemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reported events in arrival order
    pub async fn events(&self) -> Vec<TelemetryEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl EventReporter for InMemoryReporter {
    async fn report_event(&self, event: TelemetryEvent) -> Result<(), TelemetryError> {
        self.events.write().await.push(event);
        Ok(())
    }
}

/// Writes every event as a [`TelemetryEnvelope`] on its own line
pub struct JsonLinesReporter<W: Write + Send> {
    writer: Mutex<W>,
    pretty: bool
}

impl<W: Write + Send> JsonLinesReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: Mutex::new(writer), pretty: false }
    }

    /// Pretty-print envelopes; each then spans several lines
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> Result<W, TelemetryError> {
        self.writer.into_inner().map_err(|e| TelemetryError::Generic(e.to_string()))
    }
}

#[async_trait]
impl<W: Write + Send> EventReporter for JsonLinesReporter<W> {
    async fn report_event(&self, event: TelemetryEvent) -> Result<(), TelemetryError> {
        let envelope = TelemetryEnvelope::from(event);
        let line =
            if self.pretty { serde_json::to_string_pretty(&envelope)? } else { serde_json::to_string(&envelope)? };

        let mut writer = self.writer.lock().map_err(|e| TelemetryError::Generic(e.to_string()))?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::domain::asset_criticality::{OutcomeStatistics, create_processed_file_event};

    #[tokio::test]
    async fn test_inmemory_reporter_keeps_order() {
        let reporter = InMemoryReporter::new();

        reporter.report_event(TelemetryEvent::new("first", json!({}))).await.unwrap();
        reporter.report_event(TelemetryEvent::new("second", json!({ "n": 1 }))).await.unwrap();

        let types: Vec<String> = reporter.events().await.into_iter().map(|e| e.event_type).collect();
        assert_eq!(types, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_json_lines_reporter_writes_envelopes() {
        let reporter = JsonLinesReporter::new(Vec::new());

        reporter.report_event(TelemetryEvent::new("telemetry_ilm_stats_event", json!({ "index_name": "a" }))).await.unwrap();
        reporter.report_event(TelemetryEvent::new("telemetry_ilm_stats_event", json!({ "index_name": "b" }))).await.unwrap();

        let output = String::from_utf8(reporter.into_inner().unwrap()).unwrap();
        let envelopes: Vec<TelemetryEnvelope> =
            output.lines().map(|line| serde_json::from_str(line).unwrap()).collect();

        assert_eq!(envelopes.len(), 2);
        assert_eq!(envelopes[0].event_type, "telemetry_ilm_stats_event");
        assert_eq!(envelopes[1].properties, json!({ "index_name": "b" }));
        assert_ne!(envelopes[0].event_id, envelopes[1].event_id);
    }

    #[tokio::test]
    async fn test_json_lines_keep_declared_key_order() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 5).unwrap();
        let (_, payload) = create_processed_file_event(Some(OutcomeStatistics::new(8, 2, 10)), start, end);
        let reporter = JsonLinesReporter::new(Vec::new());

        reporter.report_event(TelemetryEvent::from_payload(&payload).unwrap()).await.unwrap();

        let line = String::from_utf8(reporter.into_inner().unwrap()).unwrap();
        let position = |key: &str| line.find(&format!("\"{key}\"")).unwrap();

        assert!(position("processing") < position("result"));
        assert!(position("result") < position("status"));
        assert!(position("startTime") < position("endTime"));
        assert!(position("endTime") < position("tookMs"));
        assert!(position("successful") < position("failed"));
        assert!(position("failed") < position("total"));
    }
}
