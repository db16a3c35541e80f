//! Adapters implementing the telemetry ports

pub mod registrar;
pub mod reporter;

pub use registrar::InMemoryRegistrar;
pub use reporter::{InMemoryReporter, JsonLinesReporter};
