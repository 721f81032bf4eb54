use crate::export::ExportFormat;
use crate::models::role::MemberRole;
use crate::store::StoreKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rattendance
/// CLI application to look up contest teams and record attendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Look up a team by student id, email, team or member name and record its attendance",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the roster location (CSV file or SQLite database)
    #[arg(global = true, long = "roster", value_name = "PATH")]
    pub roster: Option<String>,

    /// Override the roster store kind
    #[arg(global = true, long = "store", value_enum)]
    pub store: Option<StoreKind>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file, an empty roster and the journal
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Find teams by student id, email, team name or member name
    Search {
        /// Free-text query
        query: String,

        #[arg(long = "all", help = "Show every matching team, not only the first")]
        all: bool,
    },

    /// Check in a team and record its absent members
    Checkin {
        /// Free-text query identifying the team
        query: String,

        /// Absent member roles (leader, member2, member3)
        #[arg(long = "absent", short = 'a', value_enum, value_delimiter = ',')]
        absent: Vec<MemberRole>,

        /// Roster position (the row # printed by `search --all`) when several teams match
        #[arg(long = "position", short = 'p')]
        position: Option<usize>,

        #[arg(long = "dry-run", help = "Show the result without writing the roster")]
        dry_run: bool,
    },

    /// List all teams with their attendance
    List {
        #[arg(long = "pending", help = "Only teams not checked in yet")]
        pending: bool,
    },

    /// Export the attendance report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "attended", help = "Only teams that checked in")]
        attended: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal check-in journal
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
