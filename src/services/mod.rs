pub mod ai_providers;
pub mod analysis_gateway;
pub mod record_store;
