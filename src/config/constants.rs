pub const SERVICE_NAME: &str = "Kod Gözcüsü";
pub const CONFIG_DIR_NAME: &str = "kod-gozcusu";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

pub const DEFAULT_DATABASE_PATH: &str = "db.sqlite3";
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

/// Upper bound on records returned by a single history listing.
pub const HISTORY_LIMIT: usize = 20;

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const SUPPORTED_PROVIDERS: &[&str] = &["gemini"];

pub const CODE_PLACEHOLDER: &str = "{code}";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
