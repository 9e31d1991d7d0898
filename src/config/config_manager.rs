use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{
    CODE_PLACEHOLDER, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DATABASE_PATH_ENV, SUPPORTED_PROVIDERS,
};
use crate::errors::{KodError, KodResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config file and applies environment overrides.
    ///
    /// An explicit `path` must exist. Without one, the file under the home
    /// directory is used when present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> KodResult<Config> {
        let mut config = match path {
            Some(path) => Self::load_file(path)?,
            None => match Self::default_config_path().filter(|p| p.exists()) {
                Some(default_path) => Self::load_file(&default_path)?,
                None => Config::default(),
            },
        };

        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    pub fn load_file(path: &Path) -> KodResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| KodError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        Self::parse(&content)
            .map_err(|e| KodError::config_file_error(&path.display().to_string(), &e.to_string()))
    }

    pub fn parse(content: &str) -> KodResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_env_overrides(config: &mut Config) {
        if let Ok(db_path) = std::env::var(DATABASE_PATH_ENV) {
            if !db_path.trim().is_empty() {
                config.database.path = db_path;
            }
        }
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.port == 0 {
            errors.push("server.port must be between 1 and 65535".to_string());
        }

        if config.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }

        if config.database.path.trim().is_empty() {
            errors.push("database.path must not be empty".to_string());
        }

        if !SUPPORTED_PROVIDERS.contains(&config.ai.provider.as_str()) {
            errors.push(format!(
                "Unsupported ai.provider '{}' (supported: {})",
                config.ai.provider,
                SUPPORTED_PROVIDERS.join(", ")
            ));
        }

        if config.ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }

        if let Some(prompt) = &config.ai.custom_prompt {
            if !prompt.contains(CODE_PLACEHOLDER) {
                errors.push(format!("ai.custom_prompt must contain the {CODE_PLACEHOLDER} placeholder"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn create_sample_config() -> KodResult<PathBuf> {
        let sample_config = r#"# Kod Gözcüsü configuration

[server]
host = "127.0.0.1"
port = 8000
# Directory holding index.html and the browser script
static_dir = "static"
# Largest accepted request body, in bytes
max_body_bytes = 10485760

[database]
# SQLite file; DATABASE_PATH overrides this
path = "db.sqlite3"

[ai]
provider = "gemini"
model = "gemini-1.5-flash"
# Environment variable (or .env entry) holding the API key
api_key_env = "GEMINI_API_KEY"
temperature = 0.4
max_output_tokens = 8192

# Optional replacement for the built-in review prompt; {code} is substituted
# custom_prompt = """
# Review this code:
# {code}
# """
"#;
        let config_file_path = Self::default_config_path()
            .ok_or_else(|| KodError::config_error("Could not determine the home directory", None))?;

        if config_file_path.exists() {
            return Err(KodError::config_file_error(
                &config_file_path.display().to_string(),
                "file already exists",
            ));
        }

        if let Some(dir) = config_file_path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&config_file_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

}
