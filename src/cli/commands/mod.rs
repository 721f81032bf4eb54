pub mod checkin;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod search;

use crate::config::Config;
use crate::core::session::AttendanceSession;
use crate::db::journal::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::{RowStore, open_store};
use crate::ui::messages::warning;

/// Session over the configured roster store.
pub(crate) fn open_session(cfg: &Config) -> AppResult<AttendanceSession<Box<dyn RowStore>>> {
    let store = open_store(cfg.store, &cfg.roster_path(), &cfg.columns)?;
    Ok(AttendanceSession::new(store, cfg.mark_policy()))
}

/// Append to the journal; failures are reported but never fatal.
pub(crate) fn journal(cfg: &Config, operation: &str, target: &str, message: &str) {
    let res = DbPool::new(&cfg.journal_path())
        .and_then(|pool| ttlog(&pool, operation, target, message));
    if let Err(e) = res {
        warning(format!("Failed to write internal log: {e}"));
    }
}
