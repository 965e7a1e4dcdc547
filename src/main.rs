use clap::Parser;
use env_logger::Env;
use ai_code_reviewer::errors::ErrorHandler;
use ai_code_reviewer::structs::cli::Cli;
use ai_code_reviewer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let command_name = cli.command.name();
    let mut runner = CommandRunner::new(cli.config);

    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        anyhow::bail!("'{}' failed", command_name);
    }

    Ok(())
}
