use crate::cli::commands::{journal, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        attended,
        force,
    } = cmd
    {
        let mut session = open_session(cfg)?;
        let table = session.load()?;
        let path = expand_tilde(file);

        let marker = attended.then_some(cfg.present_marker.as_str());
        let written = ExportLogic::export(table, *format, &path, marker, *force)?;

        if written > 0 {
            journal(
                cfg,
                "export",
                format.as_str(),
                &format!("{written} teams → {}", path.display()),
            );
        }
    }
    Ok(())
}
