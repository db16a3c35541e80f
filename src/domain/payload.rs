//! Typed payloads for rule execution and index metadata events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    constant::event_type,
    error::TelemetryError,
    event::{EventPayload, TelemetryEvent}
};

// **********************
// Rule execution events
// **********************

/// Metrics of one risk scoring task execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScoreExecutionStats {
    pub scores_written:              i64,
    pub task_duration_in_seconds:    i64,
    /// Configured task interval, e.g. `1h`
    pub interval:                    String,
    pub alert_sample_size_per_shard: i64
}

/// How a risk scoring task execution ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskScoreExecution {
    Success(RiskScoreExecutionStats),
    Error,
    Cancellation(RiskScoreExecutionStats)
}

impl RiskScoreExecution {
    pub fn event_type(&self) -> &'static str {
        match self {
            RiskScoreExecution::Success(_) => event_type::RISK_SCORE_EXECUTION_SUCCESS,
            RiskScoreExecution::Error => event_type::RISK_SCORE_EXECUTION_ERROR,
            RiskScoreExecution::Cancellation(_) => event_type::RISK_SCORE_EXECUTION_CANCELLATION
        }
    }

    /// The error event carries an empty object
    pub fn into_event(self) -> Result<TelemetryEvent, TelemetryError> {
        let event_type = self.event_type();
        let properties = match self {
            RiskScoreExecution::Success(stats) | RiskScoreExecution::Cancellation(stats) => {
                serde_json::to_value(stats)?
            }
            RiskScoreExecution::Error => serde_json::Value::Object(serde_json::Map::new())
        };
        Ok(TelemetryEvent::new(event_type, properties))
    }
}

/// Alert suppression metrics of a rule execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSuppressionEvent {
    pub suppression_alerts_created:         i64,
    pub suppression_alerts_suppressed:      i64,
    pub suppression_rule_name:              String,
    /// Seconds, `-1` when suppression is per rule execution
    pub suppression_duration:               i64,
    pub suppression_group_by_fields_number: i64,
    pub suppression_group_by_fields:        Vec<String>,
    pub suppression_rule_type:              String,
    pub suppression_missing_fields:         bool,
    pub suppression_rule_id:                String
}

impl EventPayload for AlertSuppressionEvent {
    fn event_type(&self) -> &'static str {
        event_type::ALERT_SUPPRESSION
    }
}

// **********************
// Index metadata events
// **********************

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStream {
    pub datastream_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indices:         Option<Vec<DataStreamIndex>>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStreamIndex {
    pub index_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ilm_policy: Option<String>
}

impl EventPayload for DataStream {
    fn event_type(&self) -> &'static str {
        event_type::DATA_STREAM
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub index_name:               String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_total:              Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_time_in_millis:     Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_count:               Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_deleted:             Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_total_size_in_bytes: Option<u64>
}

impl EventPayload for IndexStats {
    fn event_type(&self) -> &'static str {
        event_type::INDEX_STATS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IlmPolicy {
    pub policy_name:   String,
    pub modified_date: DateTime<Utc>,
    pub phases:        IlmPhases
}

/// Configured phases of a policy; unconfigured phases are omitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IlmPhases {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cold:   Option<IlmPhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<IlmPhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen: Option<IlmPhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot:    Option<IlmPhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warm:   Option<IlmPhase>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IlmPhase {
    pub min_age: String
}

impl IlmPhase {
    pub fn new(min_age: impl Into<String>) -> Self {
        Self { min_age: min_age.into() }
    }
}

impl EventPayload for IlmPolicy {
    fn event_type(&self) -> &'static str {
        event_type::ILM_POLICY
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IlmStats {
    pub index_name:  String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase:       Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age:         Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>
}

impl EventPayload for IlmStats {
    fn event_type(&self) -> &'static str {
        event_type::ILM_STATS
    }
}
