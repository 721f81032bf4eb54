use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::header;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            header(format!("Configuration ({})", config_path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            ConfigLogic::edit(config_path, editor.as_deref())?;
        }
    }

    Ok(())
}
