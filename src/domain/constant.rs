//! Domain Events - Structured events for internal monitoring and debugging

/// Event type identifiers registered with the analytics client
pub mod event_type {
    pub const RISK_SCORE_EXECUTION_SUCCESS: &str = "risk_score_execution_success";
    pub const RISK_SCORE_EXECUTION_ERROR: &str = "risk_score_execution_error";
    pub const RISK_SCORE_EXECUTION_CANCELLATION: &str = "risk_score_execution_cancellation";
    pub const ASSET_CRITICALITY_PROCESSED_FILE: &str = "Asset Criticality Csv Upload Processed";
    pub const ALERT_SUPPRESSION: &str = "alert_suppression_on_rule_execution";
    pub const DATA_STREAM: &str = "telemetry_data_stream_event";
    pub const INDEX_STATS: &str = "telemetry_index_stats_event";
    pub const ILM_POLICY: &str = "telemetry_ilm_policy_event";
    pub const ILM_STATS: &str = "telemetry_ilm_stats_event";
}

/// Catalog Events
pub mod catalog {
    pub const CATALOG_BUILT: &str = "catalog.built";
    pub const EVENTS_DISABLED: &str = "catalog.events_disabled";
}

/// Configuration Events
pub mod config {
    pub const CONFIG_UNREADABLE: &str = "config.unreadable";
}

/// Registration Events
pub mod registration {
    pub const REGISTRATION_STARTED: &str = "registration.started";
    pub const EVENT_TYPE_REGISTERED: &str = "event_type.registered";
    pub const REGISTRATION_FAILED: &str = "registration.failed";
    pub const REGISTRATION_COMPLETED: &str = "registration.completed";
}

/// Reporting Events
pub mod reporting {
    pub const EVENT_REPORTED: &str = "event.reported";
    pub const EVENT_SKIPPED: &str = "event.skipped";
    pub const EVENT_REJECTED: &str = "event.rejected";
    pub const REPORT_FAILED: &str = "event.report_failed";
}
