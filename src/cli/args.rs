//! CLI argument parsing

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalogued event types
    List,
    /// Show the schema of an event type
    Show {
        /// Event type, e.g. 'telemetry_ilm_policy_event'
        event_type: String
    },
    /// Show the flattened field paths of an event type
    Fields {
        /// Event type, e.g. 'telemetry_ilm_policy_event'
        event_type: String
    },
    /// Export the whole catalog
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat
    },
    /// Build and report an asset criticality processed-file event
    AssetCriticality {
        /// Processing start time (RFC 3339)
        #[arg(long)]
        start:      DateTime<Utc>,
        /// Processing end time (RFC 3339)
        #[arg(long)]
        end:        DateTime<Utc>,
        /// Records successfully created or updated
        #[arg(long, requires_all = ["failed", "total"])]
        successful: Option<u64>,
        /// Records which had errors
        #[arg(long, requires_all = ["successful", "total"])]
        failed:     Option<u64>,
        /// Lines in the uploaded file
        #[arg(long, requires_all = ["successful", "failed"])]
        total:      Option<u64>
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Create the configuration file with defaults
    Init,
    /// Stop reporting an event type
    Disable {
        event_type: String
    },
    /// Resume reporting an event type
    Enable {
        event_type: String
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml
}
