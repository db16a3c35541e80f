//! Risk scoring task execution events

use crate::domain::{
    constant::event_type,
    event::EventTypeDefinition,
    schema::{Schema, SchemaNode}
};

/// Fields shared by the success and cancellation events
fn execution_stats_schema() -> Schema {
    Schema::new()
        .field("scoresWritten", SchemaNode::long("Number of risk scores written during this scoring task execution"))
        .field(
            "taskDurationInSeconds",
            SchemaNode::long("Duration (in seconds) of the current risk scoring task execution")
        )
        .field("interval", SchemaNode::keyword("Configured interval for the current risk scoring task"))
        .field(
            "alertSampleSizePerShard",
            SchemaNode::long("Number of alerts to sample per shard for the current risk scoring task")
        )
}

pub fn risk_score_execution_success() -> EventTypeDefinition {
    EventTypeDefinition::new(event_type::RISK_SCORE_EXECUTION_SUCCESS, execution_stats_schema())
}

pub fn risk_score_execution_error() -> EventTypeDefinition {
    EventTypeDefinition::new(event_type::RISK_SCORE_EXECUTION_ERROR, Schema::new())
}

pub fn risk_score_execution_cancellation() -> EventTypeDefinition {
    EventTypeDefinition::new(event_type::RISK_SCORE_EXECUTION_CANCELLATION, execution_stats_schema())
}
