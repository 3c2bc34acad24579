use crate::storage::config::CONFIG_ENV_VAR;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "regapp-validate")]
#[command(about = "Validate registration coordinates and look up person attributes")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file with address templates and attribute types
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a latitude against the default format
    Latitude {
        /// Latitude value, e.g. -45.123
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Check a longitude against the default format
    Longitude {
        /// Longitude value, e.g. 179.99
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Validate address coordinates with the default address template
    Address {
        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Look up a person attribute value by attribute type UUID
    Attribute {
        /// Attribute type UUID to look up
        #[arg(long)]
        type_uuid: String,
        /// Person attributes in type-uuid=value format
        #[arg(long, action = clap::ArgAction::Append)]
        attr: Vec<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the loaded configuration
    Show,
    /// Print the configuration file path in use
    Path,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
