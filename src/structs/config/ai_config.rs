use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    /// Name of the environment variable holding the provider API key.
    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default = "ConfigHelper::default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Replaces the built-in review prompt. Must contain `{code}`.
    #[serde(default)]
    pub custom_prompt: Option<String>,
}

impl AiConfig {
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            api_key_env: ConfigHelper::default_api_key_env(),
            base_url: ConfigHelper::default_base_url(),
            temperature: ConfigHelper::default_temperature(),
            max_output_tokens: ConfigHelper::default_max_output_tokens(),
            custom_prompt: None,
        }
    }
}
