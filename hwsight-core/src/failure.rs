//! Source-level failures and the error documents that replace telemetry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics::CanonicalMetrics;

/// Message served when the sensor source cannot be reached.
pub const UNAVAILABLE_MESSAGE: &str = "Cannot connect to Libre Hardware Monitor!";

/// Message served when the sensor source answered with unusable content.
pub const MALFORMED_MESSAGE: &str = "Error processing data!";

/// Why no telemetry could be produced for a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source could not be reached or did not answer in time.
    #[error("Sensor source unavailable: {cause}")]
    Unavailable { cause: String },

    /// The source answered but its content is not a usable sensor tree.
    #[error("Malformed sensor data: {cause}")]
    Malformed { cause: String },
}

impl SourceError {
    pub fn unavailable(cause: impl Into<String>) -> Self {
        Self::Unavailable {
            cause: cause.into(),
        }
    }

    pub fn malformed(cause: impl Into<String>) -> Self {
        Self::Malformed {
            cause: cause.into(),
        }
    }

    /// Underlying cause text.
    pub fn cause(&self) -> &str {
        match self {
            SourceError::Unavailable { cause } | SourceError::Malformed { cause } => cause,
        }
    }

    /// Short name of the condition, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Unavailable { .. } => "source_unavailable",
            SourceError::Malformed { .. } => "malformed_source",
        }
    }

    /// Error document served in place of telemetry.
    pub fn to_document(&self) -> ErrorDocument {
        let message = match self {
            SourceError::Unavailable { .. } => UNAVAILABLE_MESSAGE,
            SourceError::Malformed { .. } => MALFORMED_MESSAGE,
        };

        ErrorDocument {
            error: self.cause().to_string(),
            message: message.to_string(),
        }
    }
}

/// Body served instead of telemetry when a request fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDocument {
    /// Underlying cause.
    pub error: String,
    /// Human-readable condition.
    pub message: String,
}

/// Body of the telemetry endpoint: either a full document or an error document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TelemetryResponse {
    Metrics(CanonicalMetrics),
    Error(ErrorDocument),
}

impl TelemetryResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, TelemetryResponse::Error(_))
    }
}

impl From<Result<CanonicalMetrics, SourceError>> for TelemetryResponse {
    fn from(result: Result<CanonicalMetrics, SourceError>) -> Self {
        match result {
            Ok(metrics) => TelemetryResponse::Metrics(metrics),
            Err(e) => TelemetryResponse::Error(e.to_document()),
        }
    }
}
