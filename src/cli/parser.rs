use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for frotalog
/// CLI application to track equipment usage and fuel consumption
#[derive(Parser)]
#[command(
    name = "frotalog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple equipment-usage CLI: track hours and fuel, derive reports and rankings",
    long_about = None
)]
pub struct Cli {
    /// Override storage directory (useful for tests or a custom location)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and storage directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a usage entry, or replace an existing one with --edit
    Add {
        /// Equipment name/tag
        #[arg(long)]
        equipment: String,

        /// Model name
        #[arg(long, default_value = "")]
        model: String,

        /// Operating unit/site
        #[arg(long, default_value = "")]
        unit: String,

        /// Average speed in km/h (decimal comma accepted)
        #[arg(long)]
        speed: Option<String>,

        /// Hours worked (decimal comma accepted)
        #[arg(long)]
        hours: Option<String>,

        /// Fuel consumed in liters (decimal comma accepted)
        #[arg(long)]
        fuel: Option<String>,

        /// Measured efficiency in km/L; omit when not measured
        #[arg(long)]
        efficiency: Option<String>,

        /// Entry date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Replace the entry with this id instead of adding a new one.
        /// All fields are taken from the current invocation.
        #[arg(long = "edit", value_name = "ID")]
        edit: Option<String>,
    },

    /// Delete a usage entry by id
    Del { id: String },

    /// List entries, optionally filtered
    List {
        #[arg(long, help = "Only entries dated on or after (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "Only entries dated on or before (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, help = "Substring match on model")]
        model: Option<String>,

        #[arg(long, help = "Substring match on equipment")]
        equipment: Option<String>,
    },

    /// Aggregate report: totals, rankings and percentage breakdowns
    Report {
        #[arg(long, help = "Only entries dated on or after (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "Only entries dated on or before (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, help = "Substring match on model")]
        model: Option<String>,

        #[arg(long, help = "Substring match on equipment")]
        equipment: Option<String>,

        #[arg(long, help = "Fuel price override for this report")]
        price: Option<String>,
    },

    /// Show or set the persisted fuel price
    Price { value: Option<String> },

    /// Import a CSV file, replacing the whole store
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export the record list
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the record store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
