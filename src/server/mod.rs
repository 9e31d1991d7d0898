pub mod api_server;
pub mod app_context;
pub mod handlers;
