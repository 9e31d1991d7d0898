use crate::enums::degradation_reason::DegradationReason;

/// Result of asking the gateway for a review.
///
/// Both variants carry text meant for the user; `Degraded` additionally says
/// why no real report was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Report(String),
    Degraded {
        reason: DegradationReason,
        message: String,
    },
}

impl AnalysisOutcome {
    pub fn degraded(reason: DegradationReason, message: impl Into<String>) -> Self {
        Self::Degraded {
            reason,
            message: message.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Report(text) => text,
            Self::Degraded { message, .. } => message,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Report(text) => text,
            Self::Degraded { message, .. } => message,
        }
    }

    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub const fn reason(&self) -> Option<DegradationReason> {
        match self {
            Self::Report(_) => None,
            Self::Degraded { reason, .. } => Some(*reason),
        }
    }
}
