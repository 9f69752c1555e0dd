//! Fast Food Finder - one affordable meal per store within a budget

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fastfood_finder::{
    catalog::CatalogLoader,
    cli::commands::{menu::MenuCommand, pick::PickCommand, CommandHandler},
    cli::{Cli, Commands, LogLevel},
    config::{loader::project_dirs, ConfigLoader, FinderConfig},
    Budget,
};

/// Initialize tracing from `--log-level`
///
/// Logs go to stderr, or to `log_file` while the TUI owns the terminal.
fn initialize_tracing(log_level: LogLevel, log_file: Option<PathBuf>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    match log_file.and_then(|path| File::create(path).ok()) {
        Some(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr) // stdout carries command output
                .init();
        }
    }
}

/// Log file for interactive sessions, under the platform data directory
fn tui_log_file() -> Option<PathBuf> {
    let dir = project_dirs()?.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join("finder.log"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = cli.command.as_ref().map_or(cfg!(feature = "tui"), Commands::is_interactive);
    initialize_tracing(cli.log_level, if interactive { tui_log_file() } else { None });

    let mut config = ConfigLoader::new()
        .load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let command_name = cli.command.as_ref().map_or("tui", Commands::name);
    info!(command = command_name, "Starting");

    match cli.command {
        Some(Commands::Pick {
            budget,
            catalog,
            format,
        }) => {
            let catalog = load_catalog(&mut config, catalog)?;
            let budget = budget.map_or_else(|| config.initial_budget(), Budget::new);
            PickCommand::new(catalog, budget, format, config.currency.clone()).execute()?;
        }
        Some(Commands::Menu { catalog, format }) => {
            let catalog = load_catalog(&mut config, catalog)?;
            MenuCommand::new(catalog, format, config.currency.clone()).execute()?;
        }
        #[cfg(feature = "tui")]
        Some(Commands::Tui { budget, catalog }) => {
            if let Some(budget) = budget {
                config.initial_budget = budget;
            }
            let catalog = load_catalog(&mut config, catalog)?;
            fastfood_finder::cli::tui::run_finder(catalog, &config).await?;
        }
        #[cfg(feature = "tui")]
        None => {
            let catalog = load_catalog(&mut config, None)?;
            fastfood_finder::cli::tui::run_finder(catalog, &config).await?;
        }
        #[cfg(not(feature = "tui"))]
        None => {
            anyhow::bail!("No command given. Try `fastfood-finder pick` or `fastfood-finder menu`.");
        }
    }

    Ok(())
}

/// CLI `--catalog` overrides the config file's catalog
fn load_catalog(
    config: &mut FinderConfig,
    override_path: Option<PathBuf>,
) -> Result<fastfood_finder::Catalog> {
    if override_path.is_some() {
        config.catalog = override_path;
    }
    let catalog = CatalogLoader::new().resolve(config.catalog.as_deref())?;
    Ok(catalog)
}
