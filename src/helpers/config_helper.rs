use crate::config::constants::{
    DEFAULT_DATABASE_PATH, DEFAULT_GEMINI_MODEL, DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES,
    DEFAULT_PORT, DEFAULT_STATIC_DIR, GEMINI_API_KEY_ENV, GEMINI_BASE_URL,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    pub const fn default_port() -> u16 {
        DEFAULT_PORT
    }

    pub fn default_static_dir() -> String {
        DEFAULT_STATIC_DIR.to_string()
    }

    pub const fn default_max_body_bytes() -> u64 {
        DEFAULT_MAX_BODY_BYTES
    }

    pub fn default_database_path() -> String {
        DEFAULT_DATABASE_PATH.to_string()
    }

    pub fn default_provider() -> String {
        "gemini".to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_GEMINI_MODEL.to_string()
    }

    pub fn default_api_key_env() -> String {
        GEMINI_API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        GEMINI_BASE_URL.to_string()
    }

    pub const fn default_temperature() -> f32 {
        0.4
    }

    pub const fn default_max_output_tokens() -> u32 {
        8192
    }
}
