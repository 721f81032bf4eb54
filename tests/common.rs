#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn rti() -> Command {
    cargo_bin_cmd!("rattendance")
}

pub const FORM_CSV: &str = "Timestamp,Email Address,Tên đội (phải bắt đầu bằng UIT.),Họ và tên của đội trưởng,Họ và tên của thành viên thứ 2,MSSV thành viên thứ 2,Họ và tên của thành viên thứ 3,MSSV thành viên thứ 3
2024-10-01 08:00,21520001@gm.uit.edu.vn,UIT.Alpha,Nguyễn An,Trần Bình,21520002,Lê Chi,21520003
2024-10-01 08:05,21520101@gm.uit.edu.vn,UIT.Alphabet,Phạm Dũng,Võ Em,21520102,Đỗ Giang,21520103
2024-10-01 08:10,beta.team@gmail.com,UIT.Beta,Hồ Khoa,Mai Lan,21520202,Bùi Minh,21520203
";

/// Temp dir holding a config file, a roster and a journal.
pub struct Workspace {
    pub dir: TempDir,
    pub config: PathBuf,
    pub roster: PathBuf,
    pub journal: PathBuf,
}

impl Workspace {
    /// Write a config pointing at `roster_name` inside a fresh temp dir.
    pub fn new(store: &str, roster_name: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = dir.path().join("rattendance.conf");
        let roster = dir.path().join(roster_name);
        let journal = dir.path().join("journal.sqlite");

        let yaml = format!(
            "store: {store}\nroster: '{}'\njournal: '{}'\n",
            roster.display(),
            journal.display()
        );
        fs::write(&config, yaml).expect("write config");

        Self {
            dir,
            config,
            roster,
            journal,
        }
    }

    /// CSV workspace already holding the sample form responses.
    pub fn with_form_csv() -> Self {
        let ws = Self::new("csv", "roster.csv");
        fs::write(&ws.roster, FORM_CSV).expect("write roster");
        ws
    }

    pub fn cmd(&self) -> Command {
        let mut c = rti();
        c.arg("--config").arg(&self.config);
        c
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read file")
}
