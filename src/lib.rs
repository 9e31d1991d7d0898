//! Kod Gözcüsü: a small web service that sends submitted code to an LLM for
//! review and keeps a local history of the results.

pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod server;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
