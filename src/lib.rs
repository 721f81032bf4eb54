//! rattendance library root.
//! Roster lookup and attendance engine, row stores, and the CLI on top.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

pub use crate::core::attendance::{MarkPolicy, apply_attendance};
pub use crate::core::matching::{Query, TeamMatch, extract_leader_id, match_records};
pub use crate::core::session::AttendanceSession;
pub use crate::models::role::MemberRole;
pub use crate::models::roster::{RosterColumns, RosterTable};
pub use crate::models::team::TeamRecord;
pub use crate::store::RowStore;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Search { .. } => cli::commands::search::handle(&cli.command, cfg),
        Commands::Checkin { .. } => cli::commands::checkin::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config: --config FILE or the standard location, loaded once
    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load_from(&config_path)?;

    // command line overrides
    if let Some(roster) = &cli.roster {
        cfg.roster = roster.clone();
    }
    if let Some(store) = cli.store {
        cfg.store = store;
    }

    dispatch(&cli, &cfg, &config_path)
}
