use crate::report::ReportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for workcal
/// CLI application to track daily work hours with shorthand entries
#[derive(Parser)]
#[command(
    name = "workcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-hours calendar CLI: shorthand day entries, weekly and monthly reports",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or a custom store)
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
    /// Initialize the configuration and an empty store
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

    /// Save (or overwrite) the entry for one day
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Shorthand entry.
        ///
        /// Supported forms:
        /// - 9-17      → worked interval (whole hours of day)
        /// - 0 (blank) → day off
        /// - "-"       → missing workday, quota still owed
        /// - x         → legal holiday
        ///
        /// Anything else is rejected and nothing is saved.
        #[arg(default_value = "", allow_hyphen_values = true)]
        entry: String,
    },

    /// Show the stored record for a day
    Show {
        /// Date (YYYY-MM-DD); defaults to today
        date: Option<String>,
    },

    /// List the records of one month
    List {
        /// Month to list (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,
    },

    /// Export the monthly report (daily rows, weekly and monthly totals)
    Export {
        /// Month to export (YYYY-MM); defaults to the current month
        #[arg(long, value_name = "MONTH")]
        month: Option<String>,

        /// Report format; defaults to the configured one
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Output file path (default: report_<month>_<year>.<ext> in the export directory)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the store
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a .zip archive
        #[arg(long)]
        compress: bool,
    },
}
