//! Alert suppression on rule execution event

use crate::domain::{
    constant::event_type,
    event::EventTypeDefinition,
    schema::{Schema, SchemaNode}
};

pub fn alert_suppression() -> EventTypeDefinition {
    EventTypeDefinition::new(
        event_type::ALERT_SUPPRESSION,
        Schema::new()
            .field(
                "suppressionAlertsCreated",
                SchemaNode::long("Number of alerts created during rule execution with configured alert suppression")
            )
            .field(
                "suppressionAlertsSuppressed",
                SchemaNode::long("Number of alerts suppressed during rule execution with configured alert suppression")
            )
            .field("suppressionRuleName", SchemaNode::keyword("Name of rule"))
            .field(
                "suppressionDuration",
                SchemaNode::long("Duration in seconds of suppression period. -1 for per rule execution config")
            )
            .field("suppressionGroupByFieldsNumber", SchemaNode::long("Number of Suppress by fields"))
            .field(
                "suppressionGroupByFields",
                SchemaNode::array(SchemaNode::keyword("Tag attached to the element...").required())
                    .with_description("List of tags attached to the element...")
                    .required()
            )
            .field("suppressionRuleType", SchemaNode::keyword("Rule type"))
            .field("suppressionMissingFields", SchemaNode::boolean("Suppression of missing fields enabled"))
            .field("suppressionRuleId", SchemaNode::keyword("ruleId"))
    )
}
