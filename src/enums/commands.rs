use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::{DEFAULT_CLIENT_SERVER_URL, PASSWORD_ENV};

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file and environment
    Validate,
    /// Run the web server
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        /// Open the UI in the default browser once listening
        #[clap(long)]
        open: bool,
    },
    /// Submit a file for an AI code review
    Review {
        file: PathBuf,
        #[clap(short, long)]
        language: Option<String>,
        #[clap(short, long)]
        title: Option<String>,
        #[clap(flatten)]
        client: ClientArgs,
    },
    /// Ask the AI to explain and fix an error in a file
    Debug {
        file: PathBuf,
        #[clap(short, long)]
        error: String,
        #[clap(short, long)]
        language: Option<String>,
        #[clap(flatten)]
        client: ClientArgs,
    },
    /// List your stored reviews
    History {
        #[clap(flatten)]
        client: ClientArgs,
    },
}

#[derive(clap::Args, Clone)]
pub struct ClientArgs {
    #[clap(long, default_value = DEFAULT_CLIENT_SERVER_URL)]
    pub server: String,
    #[clap(short, long)]
    pub username: String,
    #[clap(long, env = PASSWORD_ENV, hide_env_values = true)]
    pub password: String,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Validate => "validate",
            Self::Serve { .. } => "serve",
            Self::Review { .. } => "review",
            Self::Debug { .. } => "debug",
            Self::History { .. } => "history",
        }
    }
}
