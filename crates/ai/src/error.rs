//! AI gateway error types.

use thiserror::Error;

/// AI gateway errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing API key for the generative-language service.
    #[error("Missing API key: {0} is not set")]
    MissingApiKey(String),

    /// Provider error (network failure, HTTP error, or service rejection).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The response was absent, empty, or did not match the declared schema.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl AiError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new invalid response error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}

impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        AiError::Provider(err.to_string())
    }
}

impl From<serde_json::Error> for AiError {
    fn from(err: serde_json::Error) -> Self {
        AiError::InvalidResponse(err.to_string())
    }
}

/// Error code for programmatic handling by callers.
impl AiError {
    pub fn code(&self) -> &'static str {
        match self {
            AiError::InvalidInput(_) => "INVALID_INPUT",
            AiError::MissingApiKey(_) => "MISSING_API_KEY",
            AiError::Provider(_) => "PROVIDER_ERROR",
            AiError::InvalidResponse(_) => "INVALID_RESPONSE",
        }
    }
}
