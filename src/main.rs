//! # Security Solution Telemetry CLI
//!
//! Inspect the telemetry event catalog and emit asset criticality events.
//!
//! ## Usage
//!
//! ```bash
//! # List every event type
//! tevents list
//!
//! # Schema and flattened fields of one event type
//! tevents show telemetry_ilm_policy_event
//! tevents fields telemetry_ilm_policy_event
//!
//! # Export the catalog
//! tevents export --format yaml
//!
//! # Report a processed-file event as a JSON line
//! tevents asset-criticality --start 2024-01-01T00:00:00Z --end 2024-01-01T00:00:05Z \
//!     --successful 8 --failed 2 --total 10
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` to change the level. Only the `config`
//! subcommands write the configuration file.

use anyhow::{Context, Result};
use clap::Parser;
use telemetry_events::{
    EventCatalog,
    cli::{
        Cli, Commands,
        commands::{
            handle_asset_criticality_command, handle_config_command, render_catalog, render_event_list, render_fields,
            render_schema, statistics_from
        }
    },
    config
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let full_catalog = EventCatalog::security_solution();

    match cli.command {
        Commands::List => {
            let config = config::config_or_default();
            println!("{}", render_event_list(&full_catalog.without(&config.disabled_events)));
        }
        Commands::Show { event_type } => {
            let config = config::config_or_default();
            let catalog = full_catalog.without(&config.disabled_events);
            println!("{}", render_schema(&catalog, &event_type, config.pretty)?);
        }
        Commands::Fields { event_type } => {
            let config = config::config_or_default();
            println!("{}", render_fields(&full_catalog.without(&config.disabled_events), &event_type)?);
        }
        Commands::Export { format } => {
            let config = config::config_or_default();
            let catalog = full_catalog.without(&config.disabled_events);
            println!("{}", render_catalog(&catalog, format, config.pretty)?);
        }
        Commands::AssetCriticality { start, end, successful, failed, total } => {
            let config = config::read_config().context("Failed to load configuration")?;
            let result = statistics_from(successful, failed, total);
            handle_asset_criticality_command(&full_catalog, &config, result, start, end).await?;
        }
        Commands::Config { command } => handle_config_command(&command, &full_catalog)?
    }

    Ok(())
}
