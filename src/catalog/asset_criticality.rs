//! Asset criticality CSV upload event

use crate::domain::{
    constant::event_type,
    event::EventTypeDefinition,
    schema::{Schema, SchemaNode}
};

pub fn asset_criticality_processed_file() -> EventTypeDefinition {
    let processing = Schema::new()
        .field("startTime", SchemaNode::date("Processing start time"))
        .field("endTime", SchemaNode::date("Processing end time"))
        .field("tookMs", SchemaNode::long("How long processing took ms"));

    let result = Schema::new()
        .field("successful", SchemaNode::long("Number of criticality records successfully created or updated"))
        .field("failed", SchemaNode::long("Number of criticality records which had errors"))
        .field("total", SchemaNode::long("Total number of lines in the file"));

    EventTypeDefinition::new(
        event_type::ASSET_CRITICALITY_PROCESSED_FILE,
        Schema::new()
            .field("processing", SchemaNode::object(processing))
            .field("result", SchemaNode::object(result))
            .field("status", SchemaNode::keyword("Status of the processing either success, partial_success or fail"))
    )
}
