mod common;

mod api_tests;
mod config_tests;
