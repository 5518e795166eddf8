//! Command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::domain::models::Config;
use crate::infrastructure::bootstrap::Container;
use crate::infrastructure::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "vocabd")]
#[command(about = "Vocabulary backend core with a cache-aside read layer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file; defaults to vocabd.yaml and vocabd.local.yaml
    #[arg(short, long, global = true, env = "VOCABD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Build the service and run until Ctrl-C (default)
    Run,

    /// Validate the configuration and print the effective values as YAML
    CheckConfig,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => ConfigLoader::load_from_file(path),
            None => ConfigLoader::load(),
        }
    }
}

/// Print the effective configuration.
pub fn check_config(config: &Config) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to render configuration")?;
    print!("{yaml}");
    Ok(())
}

/// Wire the container and wait for Ctrl-C.
pub async fn run(config: &Config) -> Result<()> {
    let container = Container::new(config, CancellationToken::new());
    info!("vocabd ready, press Ctrl-C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    container.shutdown();
    info!("vocabd stopped");
    Ok(())
}
