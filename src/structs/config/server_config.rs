use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_host")]
    pub host: String,

    #[serde(default = "ConfigHelper::default_port")]
    pub port: u16,

    #[serde(default = "ConfigHelper::default_secret_key_env")]
    pub secret_key_env: String,

    #[serde(default = "ConfigHelper::default_session_ttl_hours")]
    pub session_ttl_hours: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: ConfigHelper::default_host(),
            port: ConfigHelper::default_port(),
            secret_key_env: ConfigHelper::default_secret_key_env(),
            session_ttl_hours: ConfigHelper::default_session_ttl_hours(),
        }
    }
}
