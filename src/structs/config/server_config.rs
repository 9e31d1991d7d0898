use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_host")]
    pub host: String,

    #[serde(default = "ConfigHelper::default_port")]
    pub port: u16,

    #[serde(default = "ConfigHelper::default_static_dir")]
    pub static_dir: String,

    #[serde(default = "ConfigHelper::default_max_body_bytes")]
    pub max_body_bytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: ConfigHelper::default_host(),
            port: ConfigHelper::default_port(),
            static_dir: ConfigHelper::default_static_dir(),
            max_body_bytes: ConfigHelper::default_max_body_bytes(),
        }
    }
}
