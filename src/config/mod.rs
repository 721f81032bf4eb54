use crate::core::attendance::MarkPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::roster::RosterColumns;
use crate::store::StoreKind;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: StoreKind,
    #[serde(default = "default_roster")]
    pub roster: String,
    #[serde(default = "default_journal")]
    pub journal: String,
    #[serde(default = "default_present_marker")]
    pub present_marker: String,
    #[serde(default)]
    pub absent_none: String,
    #[serde(default)]
    pub columns: RosterColumns,
}

fn default_store() -> StoreKind {
    StoreKind::Csv
}
fn default_roster() -> String {
    Config::config_dir()
        .join("roster.csv")
        .to_string_lossy()
        .to_string()
}
fn default_journal() -> String {
    Config::config_dir()
        .join("rattendance.sqlite")
        .to_string_lossy()
        .to_string()
}
fn default_present_marker() -> String {
    MarkPolicy::default().present_marker
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            roster: default_roster(),
            journal: default_journal(),
            present_marker: default_present_marker(),
            absent_none: String::new(),
            columns: RosterColumns::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is missing
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating the parent directory
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn roster_path(&self) -> PathBuf {
        expand_tilde(&self.roster)
    }

    pub fn journal_path(&self) -> PathBuf {
        expand_tilde(&self.journal)
    }

    pub fn mark_policy(&self) -> MarkPolicy {
        MarkPolicy {
            present_marker: self.present_marker.clone(),
            absent_none: self.absent_none.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("none.conf")).unwrap();
        assert_eq!(cfg.store, StoreKind::Csv);
        assert_eq!(cfg.present_marker, "Có");
        assert_eq!(cfg.absent_none, "");
        assert_eq!(cfg.columns.leader_email, "Email Address");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("r.conf");
        fs::write(
            &path,
            "store: sqlite\nroster: ~/teams.sqlite\npresent_marker: \"Yes\"\ncolumns:\n  team_name: Team\n",
        )
        .unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.store, StoreKind::Sqlite);
        assert_eq!(cfg.mark_policy().present_marker, "Yes");
        assert_eq!(cfg.columns.team_name, "Team");
        assert_eq!(cfg.columns.member2_id, "MSSV thành viên thứ 2");
        assert!(!cfg.roster_path().to_string_lossy().starts_with('~'));
    }

    #[test]
    fn save_then_load_is_identity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("r.conf");
        let mut cfg = Config::default();
        cfg.absent_none = "none".into();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn broken_yaml_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("r.conf");
        fs::write(&path, "store: [unterminated").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }
}
