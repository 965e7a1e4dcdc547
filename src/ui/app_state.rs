use std::sync::Arc;
use crate::errors::ReviewerResult;
use crate::helpers::session_token::SessionSigner;
use crate::services::auth_service::AuthService;
use crate::services::code_analyzer::CodeAnalyzer;
use crate::services::database::Database;
use crate::services::review_repository::ReviewRepository;
use crate::structs::config::config::Config;

/// Everything a request handler needs. Shared read-only between requests.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub reviews: ReviewRepository,
    pub analyzer: CodeAnalyzer,
    pub session_ttl_secs: u64,
}

impl AppState {
    pub fn new(db: Database, analyzer: CodeAnalyzer, signer: SessionSigner, session_ttl_hours: u64) -> Arc<Self> {
        Arc::new(Self {
            auth: AuthService::new(db.clone(), signer),
            reviews: ReviewRepository::new(db),
            analyzer,
            session_ttl_secs: session_ttl_hours.saturating_mul(3600),
        })
    }

    pub async fn from_config(config: &Config) -> ReviewerResult<Arc<Self>> {
        let database_url = config.database_url();
        log::info!("🗄️ Opening database {}", database_url);
        let db = Database::connect(&database_url, config.database.max_connections).await?;

        let signer = match config.secret_key() {
            Some(secret) => SessionSigner::new(&secret, config.server.session_ttl_hours),
            None => {
                log::warn!(
                    "⚠️ {} is not set, sessions will not survive a restart",
                    config.server.secret_key_env
                );
                SessionSigner::ephemeral(config.server.session_ttl_hours)
            }
        };

        Ok(Self::new(db, CodeAnalyzer::from_config(config), signer, config.server.session_ttl_hours))
    }
}
