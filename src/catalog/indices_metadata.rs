//! Index, data stream and ILM metadata snapshot events

use crate::domain::{
    constant::event_type,
    event::EventTypeDefinition,
    schema::{Schema, SchemaNode}
};

pub fn data_stream() -> EventTypeDefinition {
    // index_name and ilm_policy are declared as dates upstream; kept as-is so the
    // registered mapping doesn't change
    let index = Schema::new()
        .field("index_name", SchemaNode::date("Index name"))
        .field("ilm_policy", SchemaNode::date("ILM policy").optional());

    EventTypeDefinition::new(
        event_type::DATA_STREAM,
        Schema::new().field("datastream_name", SchemaNode::keyword("Name of the data stream")).field(
            "indices",
            SchemaNode::array(SchemaNode::object(index))
                .optional()
                .with_description("Indices associated with the data stream")
        )
    )
}

pub fn index_stats() -> EventTypeDefinition {
    EventTypeDefinition::new(
        event_type::INDEX_STATS,
        Schema::new()
            .field("index_name", SchemaNode::keyword("The name of the index being monitored."))
            .field("query_total", SchemaNode::long("The total number of search queries executed on the index.").optional())
            .field(
                "query_time_in_millis",
                SchemaNode::long(
                    "The total time spent on query execution across all search requests, measured in milliseconds."
                )
                .optional()
            )
            .field(
                "docs_count",
                SchemaNode::long("The total number of documents currently stored in the index.").optional()
            )
            .field(
                "docs_deleted",
                SchemaNode::long("The total number of documents that have been marked as deleted in the index.")
                    .optional()
            )
            .field(
                "docs_total_size_in_bytes",
                SchemaNode::long(
                    "The total size, in bytes, of all documents stored in the index, including storage overhead."
                )
                .optional()
            )
    )
}

fn ilm_phase(name: &str, description: &str) -> SchemaNode {
    SchemaNode::object(Schema::new().field(
        "min_age",
        SchemaNode::text(format!("The minimum age before the index transitions to the \"{name}\" phase."))
    ))
    .optional()
    .with_description(description)
}

pub fn ilm_policy() -> EventTypeDefinition {
    let phases = Schema::new()
        .field(
            "cold",
            ilm_phase(
                "cold",
                "Configuration settings for the \"cold\" phase of the ILM policy, applied when data is infrequently \
                 accessed."
            )
        )
        .field(
            "delete",
            ilm_phase(
                "delete",
                "Configuration settings for the \"delete\" phase of the ILM policy, specifying when the index should \
                 be removed."
            )
        )
        .field(
            "frozen",
            ilm_phase(
                "frozen",
                "Configuration settings for the \"frozen\" phase of the ILM policy, where data is fully searchable but \
                 stored with a reduced resource footprint."
            )
        )
        .field(
            "hot",
            ilm_phase(
                "hot",
                "Configuration settings for the \"hot\" phase of the ILM policy, applied to actively written and \
                 queried data."
            )
        )
        .field(
            "warm",
            ilm_phase(
                "warm",
                "Configuration settings for the \"warm\" phase of the ILM policy, used for read-only data that is less \
                 frequently accessed."
            )
        );

    EventTypeDefinition::new(
        event_type::ILM_POLICY,
        Schema::new()
            .field("policy_name", SchemaNode::keyword("The name of the ILM policy."))
            .field("modified_date", SchemaNode::date("The date when the ILM policy was last modified."))
            .field(
                "phases",
                SchemaNode::object(phases).with_description(
                    "The different phases of the ILM policy that define how the index is managed over time."
                )
            )
    )
}

pub fn ilm_stats() -> EventTypeDefinition {
    EventTypeDefinition::new(
        event_type::ILM_STATS,
        Schema::new()
            .field("index_name", SchemaNode::keyword("The name of the index currently managed by the ILM  policy."))
            .field(
                "phase",
                SchemaNode::keyword(
                    "The current phase of the ILM policy that the index is in (e.g., hot, warm, cold, frozen, or \
                     delete)."
                )
                .optional()
            )
            .field(
                "age",
                SchemaNode::text("The age of the index since its creation, indicating how long it has existed.")
                    .optional()
            )
            .field("policy_name", SchemaNode::keyword("The name of the ILM policy applied to this index.").optional())
    )
}
