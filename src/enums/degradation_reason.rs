use std::fmt;
use crate::enums::ai_provider_error::AiProviderError;

/// Why the gateway answered with a fallback message instead of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradationReason {
    MissingCredential,
    Network,
    Api,
    Authentication,
    MalformedResponse,
}

impl DegradationReason {
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::Network => "network",
            Self::Api => "api",
            Self::Authentication => "authentication",
            Self::MalformedResponse => "malformed_response",
        }
    }
}

impl From<&AiProviderError> for DegradationReason {
    fn from(error: &AiProviderError) -> Self {
        match error {
            AiProviderError::ApiError(_) => Self::Api,
            AiProviderError::NetworkError(_) => Self::Network,
            AiProviderError::SerializationError(_) => Self::MalformedResponse,
            AiProviderError::AuthenticationError(_) => Self::Authentication,
        }
    }
}

impl fmt::Display for DegradationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
