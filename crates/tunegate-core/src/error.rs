use thiserror::Error;

use crate::data_source::SourceError;

/// Validation errors for closed value sets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid category '{value}', expected one of song, album, artist, playlist, unknown")]
    InvalidCategory { value: String },
}

/// Request-level failures surfaced to callers as error envelopes.
///
/// Normalization and deduplication never fail; only parameter validation and
/// the upstream call do, and both are terminal for the request.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("missing {name} param")]
    MissingParameter { name: &'static str },

    #[error("invalid {name} param '{value}': {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("{operation} failed: {}", .source.message())]
    Upstream {
        operation: &'static str,
        #[source]
        source: SourceError,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl GatewayError {
    pub fn upstream(operation: &'static str, source: SourceError) -> Self {
        Self::Upstream { operation, source }
    }

    /// HTTP-equivalent status code for the error envelope.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MissingParameter { .. } | Self::InvalidParameter { .. } => 400,
            Self::Upstream { .. } | Self::Core(_) => 500,
        }
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_renders_short_message() {
        let err = GatewayError::MissingParameter { name: "query" };
        assert_eq!(err.to_string(), "missing query param");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn upstream_failure_names_the_operation() {
        let err = GatewayError::upstream(
            "get_charts",
            SourceError::unavailable("relay returned status 502"),
        );
        assert_eq!(err.to_string(), "get_charts failed: relay returned status 502");
        assert_eq!(err.status_code(), 500);
    }
}
