use crate::config::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_GEMINI_MODEL, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_SESSION_TTL_HOURS, DATABASE_URL_ENV, DEBUG_CODE_LIMIT,
    DEBUG_TIMEOUT_SECS, GOOGLE_API_KEY_ENV, REVIEW_CODE_LIMIT, REVIEW_TIMEOUT_SECS, SECRET_KEY_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_secret_key_env() -> String {
        SECRET_KEY_ENV.to_string()
    }

    pub fn default_session_ttl_hours() -> u64 {
        DEFAULT_SESSION_TTL_HOURS
    }

    pub fn default_database_url() -> String {
        DEFAULT_DATABASE_URL.to_string()
    }

    pub fn default_database_url_env() -> String {
        DATABASE_URL_ENV.to_string()
    }

    pub fn default_max_connections() -> u32 {
        DEFAULT_DB_MAX_CONNECTIONS
    }

    pub fn default_provider() -> String {
        "gemini".to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_GEMINI_MODEL.to_string()
    }

    pub fn default_api_key_env() -> String {
        GOOGLE_API_KEY_ENV.to_string()
    }

    pub fn default_temperature() -> f32 {
        0.1
    }

    pub fn default_max_output_tokens() -> u32 {
        800
    }

    pub fn default_top_p() -> f32 {
        0.8
    }

    pub fn default_top_k() -> u32 {
        20
    }

    pub fn default_review_timeout_secs() -> u64 {
        REVIEW_TIMEOUT_SECS
    }

    pub fn default_debug_timeout_secs() -> u64 {
        DEBUG_TIMEOUT_SECS
    }

    pub fn default_review_code_limit() -> usize {
        REVIEW_CODE_LIMIT
    }

    pub fn default_debug_code_limit() -> usize {
        DEBUG_CODE_LIMIT
    }
}
