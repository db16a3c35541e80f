use thiserror::Error;

/// Common error types for the telemetry catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// Two definitions share an event type
    #[error("duplicate event type in catalog: {0}")]
    DuplicateEventType(String),

    /// Event type not present in the catalog
    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    /// Event type registered twice with the analytics client
    #[error("event type already registered: {0}")]
    AlreadyRegistered(String),

    /// Serialization/deserialization errors
    #[error("{0}")]
    Serialization(String),

    /// File system related errors
    #[error("{0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String)
}

/// Convert from std::io::Error
impl From<std::io::Error> for TelemetryError {
    fn from(err: std::io::Error) -> Self {
        TelemetryError::Io(err.to_string())
    }
}

/// Convert from serde_json::Error
impl From<serde_json::Error> for TelemetryError {
    fn from(err: serde_json::Error) -> Self {
        TelemetryError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.yaml missing");
        let err: TelemetryError = io.into();

        assert_eq!(err, TelemetryError::Io("config.yaml missing".to_string()));
    }

    #[test]
    fn test_json_error_conversion() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TelemetryError = json.into();

        assert!(matches!(err, TelemetryError::Serialization(message) if message.contains("EOF")));
    }

    #[test]
    fn test_display_names_event_type() {
        let err = TelemetryError::UnknownEventType("telemetry_foo".to_string());
        assert_eq!(err.to_string(), "unknown event type: telemetry_foo");
    }
}
