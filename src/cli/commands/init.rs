use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::create_store;
use crate::ui::messages::{info, success};

use crate::cli::commands::journal;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (if missing)
///  - an empty roster with the header row (if missing)
///  - the journal database
pub fn handle(cfg: &Config, config_path: &Path) -> AppResult<()> {
    if config_path.exists() {
        info(format!("Config file : {} (kept)", config_path.display()));
    } else {
        cfg.save_to(config_path)?;
        success(format!("Config file : {}", config_path.display()));
    }

    let roster = cfg.roster_path();
    if let Some(dir) = roster.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    if create_store(cfg.store, &roster, &cfg.columns)? {
        success(format!("Roster      : {} ({})", roster.display(), cfg.store.as_str()));
    } else {
        info(format!("Roster      : {} (kept)", roster.display()));
    }

    let journal_path = cfg.journal_path();
    if let Some(dir) = journal_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    DbPool::new(&journal_path)?;
    success(format!("Journal     : {}", journal_path.display()));

    journal(
        cfg,
        "init",
        &format!("{}:{}", cfg.store.as_str(), roster.display()),
        "Roster initialized",
    );

    println!("🎉 rattendance initialization completed!");
    Ok(())
}
