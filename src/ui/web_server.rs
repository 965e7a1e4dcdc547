use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use crate::config::constants::{sleep_duration_millis, SERVER_SHUTDOWN_GRACE_PERIOD_MS};
use crate::errors::{ReviewerError, ReviewerResult};
use crate::ui::app_state::AppState;
use crate::ui::routes::routes;

pub struct WebServer {
    state: Arc<AppState>,
    addr: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl WebServer {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            addr: None,
            shutdown_tx: None,
            task: None,
        }
    }

    pub fn addr(&self) -> Option<SocketAddr> {
        self.addr
    }

    /// Binds and starts serving in the background. Port 0 picks a free port.
    pub async fn start(&mut self, host: &str, port: u16) -> ReviewerResult<SocketAddr> {
        let addr: SocketAddr = format!("{}:{}", host, port).parse().map_err(|_| {
            ReviewerError::config_error(
                &format!("Invalid listen address {}:{}", host, port),
                Some("server.host"),
                Some("Use an IP address such as 127.0.0.1 or 0.0.0.0"),
            )
        })?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let (bound, server) = warp::serve(routes(Arc::clone(&self.state)))
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| ReviewerError::system_error("bind web server", &e.to_string()))?;

        self.task = Some(tokio::spawn(server));
        self.shutdown_tx = Some(shutdown_tx);
        self.addr = Some(bound);

        log::info!("🌐 Web server listening on http://{}", bound);
        Ok(bound)
    }

    /// Serves until Ctrl-C, then shuts down.
    pub async fn run_until_interrupted(&mut self) -> ReviewerResult<()> {
        tokio::signal::ctrl_c().await?;
        log::info!("🛑 Interrupt received");
        self.shutdown().await
    }

    pub async fn shutdown(&mut self) -> ReviewerResult<()> {
        log::info!("🛑 Shutting down web server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                ReviewerError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        if let Some(task) = self.task.take() {
            if tokio::time::timeout(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS), task).await.is_err() {
                log::warn!("⚠️ Open connections did not close in time");
            }
        }

        self.addr = None;
        log::info!("✅ Web server shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::session_token::SessionSigner;
    use crate::services::code_analyzer::CodeAnalyzer;
    use crate::services::database::Database;
    use crate::structs::config::ai_config::AiConfig;

    #[tokio::test]
    async fn serves_until_shutdown() {
        let db = Database::in_memory().await.unwrap();
        let state = AppState::new(db, CodeAnalyzer::new(None, AiConfig::default()), SessionSigner::new("s", 1), 1);
        let mut server = WebServer::new(state);

        let addr = server.start("127.0.0.1", 0).await.unwrap();
        assert_eq!(server.addr(), Some(addr));

        let response = reqwest::get(format!("http://{}/static/style.css", addr)).await.unwrap();
        assert!(response.status().is_success());

        server.shutdown().await.unwrap();
        assert!(server.addr().is_none());
    }

    #[tokio::test]
    async fn invalid_host_is_a_configuration_error() {
        let db = Database::in_memory().await.unwrap();
        let state = AppState::new(db, CodeAnalyzer::new(None, AiConfig::default()), SessionSigner::new("s", 1), 1);
        let err = WebServer::new(state).start("not a host", 0).await.unwrap_err();
        assert!(matches!(err, ReviewerError::ConfigurationError { .. }));
    }
}
