//! vocabd entry point.

use clap::Parser;

use vocabd::cli::{self, Cli, Commands};
use vocabd::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::CheckConfig => cli::check_config(&config),
        Commands::Run => {
            let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;
            cli::run(&config).await
        }
    }
}
