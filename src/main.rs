use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

mod cli;

use cli::Cli;
use cli::commands::Commands;
use navtools::config::Config;
use navtools::{ExternalTool, HttpRegistryClient, filter_and_process_tools, get_external_apps};

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("navtools")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("navtools.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Fetch { raw, account, user } => {
            handle_fetch_command(*raw, account.as_deref(), user.as_deref(), config, cli.is_verbose()).await
        }
        Commands::Normalize { file } => handle_normalize_command(file.as_deref()),
    }
}

async fn handle_fetch_command(
    raw: bool,
    account: Option<&str>,
    user: Option<&str>,
    mut config: Config,
    verbose: bool,
) -> Result<()> {
    if let Some(account) = account {
        config.registry.account_id = account.to_string();
    }
    if let Some(user) = user {
        config.registry.user_id = user.to_string();
    }

    info!("Fetching tools from {}", config.registry.list_url());
    if verbose {
        eprintln!("{} {}", "Fetching:".cyan(), config.registry.list_url());
    }

    let client = HttpRegistryClient::new(config.registry).context("Failed to create registry client")?;
    let tools = get_external_apps(&client)
        .await
        .context("Failed to fetch external apps")?;

    let output = if raw {
        serde_json::to_string_pretty(&tools)?
    } else {
        let processed = filter_and_process_tools(Some(tools.as_slice()));
        if verbose {
            eprintln!(
                "{} {} of {} entries kept",
                "Normalized:".green(),
                processed.len(),
                tools.len()
            );
        }
        serde_json::to_string_pretty(&processed)?
    };

    println!("{}", output);
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).context(format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn handle_normalize_command(file: Option<&Path>) -> Result<()> {
    info!("Normalizing tools from {:?}", file);

    let input = read_input(file)?;
    let tools: Option<Vec<ExternalTool>> =
        serde_json::from_str(&input).context("Input is not a JSON array of tools")?;

    let processed = filter_and_process_tools(tools.as_deref());
    println!("{}", serde_json::to_string_pretty(&processed)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, config).await.context("Application failed")?;

    Ok(())
}
