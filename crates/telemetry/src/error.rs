//! Error types for the analytics pipeline.

use thiserror::Error;

/// Errors that can occur while configuring or emitting analytics.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Failed to serialize a tag command
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The sink refused or failed to deliver a command
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration could not be used
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Batch queue is full
    #[error("Event queue is full")]
    QueueFull,
}

/// Result type for analytics operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TelemetryError::QueueFull;
        assert_eq!(err.to_string(), "Event queue is full");

        let err = TelemetryError::Transport("beacon rejected".to_string());
        assert_eq!(err.to_string(), "Transport error: beacon rejected");

        let err = TelemetryError::InvalidConfig("empty vendor id".to_string());
        assert_eq!(err.to_string(), "Invalid config: empty vendor id");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err: Result<(), serde_json::Error> =
            serde_json::from_str::<()>("invalid json");
        let telemetry_err: TelemetryError = json_err.unwrap_err().into();
        assert!(matches!(telemetry_err, TelemetryError::Serialization(_)));
    }
}
