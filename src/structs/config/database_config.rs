use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "ConfigHelper::default_database_url")]
    pub url: String,

    /// Environment variable that overrides `url` when set.
    #[serde(default = "ConfigHelper::default_database_url_env")]
    pub url_env: String,

    #[serde(default = "ConfigHelper::default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: ConfigHelper::default_database_url(),
            url_env: ConfigHelper::default_database_url_env(),
            max_connections: ConfigHelper::default_max_connections(),
        }
    }
}
