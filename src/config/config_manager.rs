use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, PORT_ENV};
use crate::errors::{ReviewerError, ReviewerResult};
use crate::structs::config::config::Config;
use crate::structs::validation_result::ValidationResult;

const SAMPLE_CONFIG: &str = r#"# AI Code Reviewer configuration

[server]
host = "127.0.0.1"
port = 5000
# Environment variable holding the session signing key
secret_key_env = "SECRET_KEY"
# How long a login stays valid
session_ttl_hours = 168

[database]
# Only SQLite URLs are supported
url = "sqlite:instance/code_review.db"
# Environment variable that overrides `url` when set
url_env = "DATABASE_URL"
max_connections = 5

[ai]
provider = "gemini"
model = "gemini-1.5-flash"
api_key_env = "GOOGLE_API_KEY"
temperature = 0.1
max_output_tokens = 800
top_p = 0.8
top_k = 20

# Per-request model timeouts; on timeout a fallback result is stored
review_timeout_secs = 15
debug_timeout_secs = 8

# Submitted code is truncated to these many characters before prompting
review_code_limit = 2000
debug_code_limit = 1500
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn load() -> ReviewerResult<Config> {
        Self::load_from(&Self::default_config_path())
    }

    /// Reads the config at `path`, falling back to defaults when it is absent.
    pub fn load_from(path: &Path) -> ReviewerResult<Config> {
        let mut config = if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(path).map_err(|e| ReviewerError::ConfigurationFileError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            toml::from_str::<Config>(&content).map_err(|e| ReviewerError::ConfigurationFileError {
                path: path.display().to_string(),
                reason: e.message().to_string(),
            })?
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Config::default()
        };

        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    fn apply_env_overrides(config: &mut Config) {
        if let Some(port) = std::env::var(PORT_ENV).ok().and_then(|p| p.parse::<u16>().ok()) {
            config.server.port = port;
        }
    }

    pub fn create_sample_config() -> ReviewerResult<PathBuf> {
        let path = Self::default_config_path();
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> ReviewerResult<()> {
        if path.exists() {
            return Err(ReviewerError::config_error(
                "Configuration file already exists",
                None,
                Some(&format!("Edit {} or remove it first", path.display())),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if !config.database_url().starts_with("sqlite:") {
            errors.push(format!(
                "Unsupported database URL '{}': only sqlite: URLs are supported",
                config.database_url()
            ));
        }

        if config.server.port == 0 {
            errors.push("Server port must be between 1 and 65535".to_string());
        }

        if config.ai.provider != "gemini" {
            errors.push(format!("Unknown AI provider '{}': only 'gemini' is supported", config.ai.provider));
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!("AI temperature {} is outside 0.0..=2.0", config.ai.temperature));
        }

        if config.ai.review_code_limit == 0 || config.ai.debug_code_limit == 0 {
            errors.push("Code limits must be greater than zero".to_string());
        }

        if config.api_key().is_none() {
            warnings.push(format!(
                "{} is not set: every analysis will return the fallback result",
                config.ai.api_key_env
            ));
        }

        if config.secret_key().is_none() {
            warnings.push(format!(
                "{} is not set: a random session key is used and logins will not survive restarts",
                config.server.secret_key_env
            ));
        }

        ValidationResult::from_findings(errors, warnings)
    }
}
