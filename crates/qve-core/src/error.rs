use thiserror::Error;

/// Failure taxonomy of the estimator boundary. Out-of-range magnitudes
/// are not errors; they surface as sentinel flags on serialized values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Malformed or missing numeric input. The caller can retry with a
    /// corrected request.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
    /// No cost model is registered for the requested primitive. Permanent
    /// until the model set is extended.
    #[error("unsupported algorithm: {name}")]
    UnsupportedAlgorithm { name: String },
}

impl EstimateError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        EstimateError::InvalidParameter {
            reason: reason.into(),
        }
    }

    pub fn unsupported(name: impl Into<String>) -> Self {
        EstimateError::UnsupportedAlgorithm { name: name.into() }
    }

    /// Stable label for transports that map each taxonomy entry to one
    /// fixed status/message pair.
    pub fn kind_label(&self) -> &'static str {
        match self {
            EstimateError::InvalidParameter { .. } => "invalid parameter",
            EstimateError::UnsupportedAlgorithm { .. } => "unsupported algorithm",
        }
    }
}
