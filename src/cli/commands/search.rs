use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::matching::Query;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::ui::render::team_card;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { query, all } = cmd {
        Query::parse(query)?;
        let mut session = open_session(cfg)?;
        let matches = session.search(query)?;

        let Some(first) = matches.first() else {
            return Err(AppError::NotFound(query.trim().to_string()));
        };

        header("Team information");
        println!("{}", team_card(first, true, session.policy()));

        if matches.len() > 1 {
            if *all {
                for m in &matches[1..] {
                    println!("{}", team_card(m, false, session.policy()));
                }
            } else {
                info(format!(
                    "{} more team(s) match '{}'; use --all to show them.",
                    matches.len() - 1,
                    query.trim()
                ));
            }
        }
    }

    Ok(())
}
