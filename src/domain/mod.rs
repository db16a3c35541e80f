//! Core domain types
//!
//! Event definitions, their schemas, and the typed payloads reported under them.

pub mod asset_criticality;
pub mod constant;
pub mod error;
pub mod event;
pub mod payload;
pub mod schema;
