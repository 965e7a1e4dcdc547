use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default = "ConfigHelper::default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default = "ConfigHelper::default_top_p")]
    pub top_p: f32,

    #[serde(default = "ConfigHelper::default_top_k")]
    pub top_k: u32,

    #[serde(default = "ConfigHelper::default_review_timeout_secs")]
    pub review_timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_debug_timeout_secs")]
    pub debug_timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_review_code_limit")]
    pub review_code_limit: usize,

    #[serde(default = "ConfigHelper::default_debug_code_limit")]
    pub debug_code_limit: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            api_key_env: ConfigHelper::default_api_key_env(),
            temperature: ConfigHelper::default_temperature(),
            max_output_tokens: ConfigHelper::default_max_output_tokens(),
            top_p: ConfigHelper::default_top_p(),
            top_k: ConfigHelper::default_top_k(),
            review_timeout_secs: ConfigHelper::default_review_timeout_secs(),
            debug_timeout_secs: ConfigHelper::default_debug_timeout_secs(),
            review_code_limit: ConfigHelper::default_review_code_limit(),
            debug_code_limit: ConfigHelper::default_debug_code_limit(),
        }
    }
}
