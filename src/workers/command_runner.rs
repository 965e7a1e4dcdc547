use std::path::{Path, PathBuf};
use std::time::Instant;
use terminal_size::{terminal_size, Width};
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{language_for_extension, DEFAULT_LANGUAGE, EMPTY_CODE_MESSAGE};
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::commands::{ClientArgs, Commands};
use crate::enums::render_mode::RenderMode;
use crate::enums::request_outcome::RequestOutcome;
use crate::errors::{ReviewerError, ReviewerResult};
use crate::services::result_renderer::render_text;
use crate::services::review_client::HttpReviewClient;
use crate::structs::api::code_submission::CodeSubmission;
use crate::structs::config::config::Config;
use crate::ui::app_state::AppState;
use crate::ui::web_server::WebServer;
use crate::workers::request_lifecycle::RequestLifecycle;

const DEFAULT_TERMINAL_WIDTH: usize = 80;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ReviewerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Serve { port, open } => self.serve_command(port, open).await,
            Commands::Review { file, language, title, client } => {
                self.review_command(&file, language, title, &client).await
            }
            Commands::Debug { file, error, language, client } => {
                self.debug_command(&file, error, language, &client).await
            }
            Commands::History { client } => self.history_command(&client).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> ReviewerResult<Config> {
        match &self.config_path {
            Some(path) => ConfigManager::load_from(path),
            None => ConfigManager::load(),
        }
    }

    fn init_command(&self) -> ReviewerResult<()> {
        log::info!("🚀 Initializing ai-code-reviewer configuration...");

        let path = match &self.config_path {
            Some(path) => {
                ConfigManager::write_sample_config(path)?;
                path.clone()
            }
            None => ConfigManager::create_sample_config()?,
        };

        log::info!("📝 Edit {} to adjust the server, database and model settings.", path.display());
        log::info!("🔧 Run 'ai-code-reviewer validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> ReviewerResult<()> {
        log::info!("🔍 Validating configuration...");

        let config = self.load_config()?;
        let validation = ConfigManager::validate_config(&config);
        validation.print_summary();

        if !validation.is_valid {
            return Err(ReviewerError::config_error(
                &format!("{} configuration error(s)", validation.errors.len()),
                None,
                Some("Fix the errors listed above and run validate again"),
            ));
        }
        Ok(())
    }

    async fn serve_command(&self, port: Option<u16>, open: bool) -> ReviewerResult<()> {
        let mut config = self.load_config()?;
        if let Some(port) = port {
            config.server.port = port;
        }

        let validation = ConfigManager::validate_config(&config);
        for warning in &validation.warnings {
            log::warn!("⚠️ {}", warning);
        }
        if !validation.is_valid {
            validation.print_summary();
            return Err(ReviewerError::config_error("Configuration is invalid", None, Some("Run 'ai-code-reviewer validate'")));
        }

        let state = AppState::from_config(&config).await?;
        let mut server = WebServer::new(state);
        let addr = server.start(&config.server.host, config.server.port).await?;

        let url = browser_url(&config.server.host, addr.port());
        log::info!("🚀 Open {} in your browser", url);
        log::info!("⏹️ Press Ctrl+C to stop the server");

        if open {
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open a browser: {}", e);
            }
        }

        server.run_until_interrupted().await
    }

    async fn review_command(&self, file: &Path, language: Option<String>, title: Option<String>, client: &ClientArgs) -> ReviewerResult<()> {
        let code = read_source(file).await?;
        let submission = CodeSubmission {
            code: Some(code),
            language: Some(language.unwrap_or_else(|| detect_language(file))),
            title: Some(title.unwrap_or_else(|| file_title(file))),
            error: None,
        };

        self.submit(AnalysisKind::Review, &submission, client).await
    }

    async fn debug_command(&self, file: &Path, error: String, language: Option<String>, client: &ClientArgs) -> ReviewerResult<()> {
        let code = read_source(file).await?;
        let submission = CodeSubmission {
            code: Some(code),
            language: Some(language.unwrap_or_else(|| detect_language(file))),
            title: None,
            error: Some(error),
        };

        self.submit(AnalysisKind::Debug, &submission, client).await
    }

    async fn submit(&self, kind: AnalysisKind, submission: &CodeSubmission, client: &ClientArgs) -> ReviewerResult<()> {
        // reject before logging in so an empty file costs no round trip
        if submission.non_empty_code().is_none() {
            return Err(ReviewerError::validation_error("code", "", EMPTY_CODE_MESSAGE, None));
        }

        let http = connect(client).await?;
        let outcome = RequestLifecycle::new(http).submit(kind, submission).await;
        print_outcome(kind, outcome)
    }

    async fn history_command(&self, client: &ClientArgs) -> ReviewerResult<()> {
        let http = connect(client).await?;
        let reviews = http.history().await?;

        if reviews.is_empty() {
            println!("No reviews yet.");
            return Ok(());
        }

        println!("{:>6}  {:<16}  {:<12}  {}", "ID", "CREATED", "LANGUAGE", "TITLE");
        for review in &reviews {
            println!(
                "{:>6}  {:<16}  {:<12}  {}",
                review.id,
                review.created_at.format("%Y-%m-%d %H:%M"),
                review.language,
                review.title
            );
        }
        println!("\n📊 {} review(s)", reviews.len());
        Ok(())
    }
}

async fn connect(client: &ClientArgs) -> ReviewerResult<HttpReviewClient> {
    let http = HttpReviewClient::new(&client.server)?;
    http.login(&client.username, &client.password).await?;
    Ok(http)
}

async fn read_source(file: &Path) -> ReviewerResult<String> {
    tokio::fs::read_to_string(file).await.map_err(|e| {
        ReviewerError::system_error(&format!("reading {}", file.display()), &e.to_string())
    })
}

fn detect_language(file: &Path) -> String {
    file.extension()
        .and_then(|ext| ext.to_str())
        .and_then(language_for_extension)
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string()
}

fn file_title(file: &Path) -> String {
    file.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string())
}

fn browser_url(host: &str, port: u16) -> String {
    let host = if host == "0.0.0.0" { "127.0.0.1" } else { host };
    format!("http://{}:{}", host, port)
}

fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(width), _)| usize::from(width))
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

fn print_outcome(kind: AnalysisKind, outcome: RequestOutcome) -> ReviewerResult<()> {
    match outcome {
        RequestOutcome::Completed { analysis, review_id, processing_time } => {
            println!("\n{}", render_text(&analysis, RenderMode::from(kind), terminal_width()));
            if let Some(id) = review_id {
                println!("💾 Saved as review #{}", id);
            }
            if let Some(seconds) = processing_time {
                println!("⏱️  {:.2}s", seconds);
            }
            Ok(())
        }
        RequestOutcome::Rejected(message) => Err(ReviewerError::validation_error("code", "", &message, None)),
        RequestOutcome::ServerError(message) => Err(ReviewerError::analysis_error(kind.label(), &message)),
        RequestOutcome::TransportError(message) => Err(ReviewerError::network_error(kind.endpoint(), None, None, &message)),
    }
}
