pub mod ai;
pub mod analysis_record;
pub mod analyze_request;
pub mod analyze_response;
pub mod api_response;
pub mod cli;
pub mod config;
