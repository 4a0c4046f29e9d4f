use thiserror::Error;

/// Main error type for the planning pipeline
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Itinerary generation failed: {0}")]
    Generation(String),

    #[error("Generator returned a malformed itinerary: {0}")]
    MalformedOutput(String),

    #[error("Forecast lookup failed: {0}")]
    Forecast(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Check if the planner can keep going after this error.
    ///
    /// Only forecast failures qualify: planning degrades to a
    /// weather-blind itinerary instead of failing the request.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PlannerError::Forecast(_))
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Generation(_) => "GENERATION_ERROR",
            PlannerError::MalformedOutput(_) => "MALFORMED_OUTPUT",
            PlannerError::Forecast(_) => "FORECAST_UNAVAILABLE",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "recoverable": self.is_recoverable()
            }
        })
    }
}
