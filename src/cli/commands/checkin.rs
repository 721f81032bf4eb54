use crate::cli::commands::{journal, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::absent_names;
use crate::core::matching::{Query, TeamMatch};
use crate::core::session::AttendanceSession;
use crate::errors::{AppError, AppResult};
use crate::models::role::MemberRole;
use crate::store::MemoryStore;
use crate::ui::messages::{header, info, success, warning};
use crate::ui::render::team_card;
use std::collections::BTreeSet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        query,
        absent,
        position,
        dry_run,
    } = cmd
    {
        let absentees: BTreeSet<MemberRole> = absent.iter().copied().collect();

        Query::parse(query)?;
        let mut session = open_session(cfg)?;
        let matches = session.search(query)?;

        if matches.is_empty() {
            return Err(AppError::NotFound(query.trim().to_string()));
        }

        let chosen = match position {
            None => &matches[0],
            Some(p) => matches
                .iter()
                .find(|m| m.position + 1 == *p)
                .ok_or_else(|| {
                    AppError::Input(format!(
                        "position {p} is not a team matching '{}'",
                        query.trim()
                    ))
                })?,
        };

        if position.is_none() && matches.len() > 1 {
            warning(format!(
                "{} teams match '{}'; checking in the first one (row #{}).",
                matches.len(),
                query.trim(),
                chosen.position + 1
            ));
        }

        let updated = if *dry_run {
            let snapshot = session
                .table()
                .cloned()
                .ok_or(AppError::StaleReference(chosen.position))?;
            let mut preview = AttendanceSession::new(MemoryStore::new(snapshot), cfg.mark_policy());
            preview.load()?;
            preview.commit(chosen.position, &absentees)?
        } else {
            session.commit(chosen.position, &absentees)?
        };

        let team = &updated.records[chosen.position];
        let after = TeamMatch {
            position: chosen.position,
            record: team.clone(),
        };

        header(if *dry_run { "Attendance preview" } else { "Attendance recorded" });
        println!("{}", team_card(&after, true, session.policy()));

        let absent_str = absent_names(team, &absentees, session.policy());
        if *dry_run {
            info("Dry run: roster not written.");
        } else {
            journal(
                cfg,
                "checkin",
                &team.team_name,
                &format!("query='{}' absent='{}'", query.trim(), absent_str),
            );
            success(format!(
                "Checked in {} (query: {}) → {}",
                team.team_name,
                query.trim(),
                session.store().describe()
            ));
        }
    }

    Ok(())
}
