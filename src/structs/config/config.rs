use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::database_config::DatabaseConfig;
use crate::structs::config::server_config::ServerConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub ai: AiConfig,
}

impl Config {
    /// Database URL after applying the environment override.
    pub fn database_url(&self) -> String {
        std::env::var(&self.database.url_env)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.database.url.clone())
    }

    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.ai.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn secret_key(&self) -> Option<String> {
        std::env::var(&self.server.secret_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
