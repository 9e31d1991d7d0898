use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub enum AiProviderError {
    ApiError(String),
    NetworkError(String),
    SerializationError(String),
    AuthenticationError(String),
}

impl AiProviderError {
    pub fn from_status(status: reqwest::StatusCode, error_text: String) -> Self {
        match status.as_u16() {
            400 => Self::ApiError(format!("Bad request: {error_text}")),
            401 | 403 => Self::AuthenticationError(error_text),
            429 => Self::ApiError(format!("Rate limit exceeded: {error_text}")),
            _ => Self::ApiError(format!("HTTP {status}: {error_text}")),
        }
    }
}

impl fmt::Display for AiProviderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ApiError(msg) => write!(f, "API Error: {msg}"),
            Self::NetworkError(msg) => write!(f, "Network Error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization Error: {msg}"),
            Self::AuthenticationError(msg) => write!(f, "Authentication Error: {msg}"),
        }
    }
}

impl Error for AiProviderError {}
