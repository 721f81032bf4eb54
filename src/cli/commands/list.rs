use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::render::roster_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { pending } = cmd {
        let mut session = open_session(cfg)?;
        let policy = session.policy().clone();
        let mut table = session.load()?.clone();

        let total = table.len();
        let attended = table
            .records
            .iter()
            .filter(|r| r.attendance.trim() == policy.present_marker.trim())
            .count();

        if *pending {
            table
                .records
                .retain(|r| r.attendance.trim() != policy.present_marker.trim());
        }

        if table.is_empty() {
            info("No teams to show.");
            return Ok(());
        }

        header(format!("Roster: {attended}/{total} teams checked in"));
        print!("{}", roster_table(&table, &policy));
    }

    Ok(())
}
