//! # Security Solution Telemetry Events
//!
//! The catalog of telemetry events the security solution registers with its
//! analytics client, together with the typed payloads reported under them.
//!
//! This crate provides:
//! - Event type definitions whose schemas mirror the analytics client's format
//! - Typed payloads for rule execution, asset criticality and index metadata events
//! - The asset criticality upload status classifier and processed-file event builder
//! - Ports for registering and reporting events, with in-memory and JSON lines adapters

pub mod adapter;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod port;
pub mod service;

// Re-export commonly used types
pub use catalog::EventCatalog;
pub use config::TelemetryConfig;
pub use domain::{
    asset_criticality::{
        OutcomeStatistics, ProcessedFileEvent, ProcessingWindow, UploadStatus, classify_upload,
        create_processed_file_event
    },
    error::TelemetryError,
    event::{EventPayload, EventTypeDefinition, TelemetryEvent},
    schema::{FieldType, Schema, SchemaNode}
};
