/*
[INPUT]:  CLI arguments, optional YAML configuration file, BITX_* environment
[OUTPUT]: Pretty-printed JSON responses on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod commands;
mod config;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bitx_adapter::BitxClient;

use crate::commands::Command;
use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "bitx", version, about = "Luno (BitX) exchange API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Currency pair overriding the configured default
    #[arg(long, value_name = "PAIR")]
    pair: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let file_config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    };

    let mut client_config = file_config.client_config().context("build client config")?;
    if let Some(pair) = args.pair {
        client_config.pair = pair;
    }
    debug!(
        hostname = %client_config.hostname,
        port = client_config.port,
        pair = %client_config.pair,
        "client configuration resolved"
    );

    let mut client = BitxClient::with_config(client_config).context("create client")?;
    match file_config.credentials() {
        Some(credentials) => client.set_credentials(credentials),
        None => info!("no API key configured; private endpoints will be rejected"),
    }

    let output = commands::run(&client, args.command).await?;
    let rendered = serde_json::to_string_pretty(&output).context("render response")?;
    println!("{rendered}");

    info!(api_call_rate = client.api_call_rate(), "request complete");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &Path) -> Result<CliConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}
