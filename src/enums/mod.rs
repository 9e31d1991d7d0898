pub mod ai_provider_error;
pub mod analysis_outcome;
pub mod commands;
pub mod degradation_reason;
