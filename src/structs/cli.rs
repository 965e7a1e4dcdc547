use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "ai-code-reviewer")]
#[clap(about = "AI-powered code review server and client", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
