//! CLI command handlers

use std::{io, sync::Arc};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use super::{ConfigCommands, ExportFormat};
use crate::{
    adapter::JsonLinesReporter,
    catalog::EventCatalog,
    config::{self, TelemetryConfig},
    domain::{asset_criticality::OutcomeStatistics, event::EventTypeDefinition},
    service::{ReportOutcome, TelemetryService}
};

#[derive(Tabled)]
struct EventTypeRow {
    #[tabled(rename = "Event type")]
    event_type: &'static str,
    #[tabled(rename = "Fields")]
    fields:     usize,
    #[tabled(rename = "Optional")]
    optional:   usize
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Path")]
    path:     String,
    #[tabled(rename = "Type")]
    kind:     String,
    #[tabled(rename = "Optional")]
    optional: bool
}

fn find_event_type<'a>(catalog: &'a EventCatalog, event_type: &str) -> Result<&'a EventTypeDefinition> {
    catalog.get(event_type).with_context(|| {
        format!("Unknown event type '{}'. Available: {}", event_type, catalog.event_types().join(", "))
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
    json.context("Failed to serialize to JSON")
}

/// Table of event types with their field counts
pub fn render_event_list(catalog: &EventCatalog) -> String {
    let rows = catalog.iter().map(|definition| {
        let paths = definition.schema.field_paths();
        EventTypeRow {
            event_type: definition.event_type,
            fields:     paths.len(),
            optional:   paths.iter().filter(|path| path.optional).count()
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn render_schema(catalog: &EventCatalog, event_type: &str, pretty: bool) -> Result<String> {
    to_json(find_event_type(catalog, event_type)?, pretty)
}

pub fn render_fields(catalog: &EventCatalog, event_type: &str) -> Result<String> {
    let definition = find_event_type(catalog, event_type)?;
    let rows = definition.schema.field_paths().into_iter().map(|path| FieldRow {
        path:     path.path,
        kind:     path.kind.to_string(),
        optional: path.optional
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    Ok(table.to_string())
}

pub fn render_catalog(catalog: &EventCatalog, format: ExportFormat, pretty: bool) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(catalog, pretty),
        ExportFormat::Yaml => serde_yaml::to_string(catalog).context("Failed to serialize to YAML")
    }
}

/// Statistics exist only when all three counts were given
pub fn statistics_from(successful: Option<u64>, failed: Option<u64>, total: Option<u64>) -> Option<OutcomeStatistics> {
    match (successful, failed, total) {
        (Some(successful), Some(failed), Some(total)) => Some(OutcomeStatistics::new(successful, failed, total)),
        _ => None
    }
}

/// Handle the asset-criticality command - report the event to stdout
pub async fn handle_asset_criticality_command(
    catalog: &EventCatalog,
    config: &TelemetryConfig,
    result: Option<OutcomeStatistics>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>
) -> Result<()> {
    let reporter = Arc::new(JsonLinesReporter::new(io::stdout()).pretty(config.pretty));
    let service = TelemetryService::from_config(catalog, reporter, config);

    let outcome = service
        .report_processed_file(result, start_time, end_time)
        .await
        .context("Failed to report asset criticality event")?;

    if outcome == ReportOutcome::Skipped {
        eprintln!("Telemetry is disabled, event not reported");
    }

    Ok(())
}

/// Handle config commands
pub fn handle_config_command(command: &ConfigCommands, catalog: &EventCatalog) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = config::read_config().context("Failed to load configuration")?;
            let path = config::get_config_file_path()?;

            println!("# {}", path.display());
            print!("{}", serde_yaml::to_string(&config).context("Failed to serialize config")?);
        }
        ConfigCommands::Init => {
            let path = config::init_config_dirs().context("Failed to initialize configuration directories")?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::Disable { event_type } => {
            find_event_type(catalog, event_type)?;

            let mut config = config::load_config().context("Failed to load configuration")?;
            if config.disable_event(event_type) {
                config::save_config(&config).context("Failed to save configuration")?;
                println!("Disabled '{}'", event_type);
            } else {
                println!("'{}' is already disabled", event_type);
            }
        }
        ConfigCommands::Enable { event_type } => {
            let mut config = config::load_config().context("Failed to load configuration")?;
            if config.enable_event(event_type) {
                config::save_config(&config).context("Failed to save configuration")?;
                println!("Enabled '{}'", event_type);
            } else {
                println!("'{}' is not disabled", event_type);
            }
        }
    }

    Ok(())
}
