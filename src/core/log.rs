use crate::db::journal::{JournalEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex is valid"));

const OP_TARGET_MAX: usize = 60;

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "init" => Colour::RGB(255, 153, 51), // arancione
        "export" => Colour::Blue,
        _ => Colour::White,
    }
}

/// Render one journal line; operation coloured, `op (target)` cut at 60 visible chars.
pub(crate) fn format_entry(e: &JournalEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
    let date = chrono::DateTime::parse_from_rfc3339(&e.date)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| e.date.clone());

    let op_target = if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    };

    let visible = if op_target.chars().count() > OP_TARGET_MAX {
        let mut s: String = op_target.chars().take(OP_TARGET_MAX - 3).collect();
        s.push_str("...");
        s
    } else {
        op_target
    };

    let color = color_for_operation(&e.operation);
    let colored = match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    };

    // padding calcolato sulla larghezza visibile, senza ANSI
    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        e.id, date, colored, padding, e.message
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_entries(pool)?;

        if entries.is_empty() {
            info("The journal is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.operation.chars().count() + e.target.chars().count() + 3)
            .max()
            .unwrap_or(10)
            .min(OP_TARGET_MAX);

        println!("📜 Internal log:\n");
        for e in &entries {
            println!("{}", format_entry(e, id_w, date_w, op_w));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(op: &str, target: &str) -> JournalEntry {
        JournalEntry {
            id: 7,
            date: "2024-10-05T09:30:00+07:00".into(),
            operation: op.into(),
            target: target.into(),
            message: "done".into(),
        }
    }

    #[test]
    fn long_targets_are_truncated() {
        let line = format_entry(&entry("checkin", &"x".repeat(100)), 1, 25, 60);
        let plain = strip_ansi(&line);
        assert!(plain.contains("checkin (xxx"));
        assert!(plain.contains("... => done"));
        assert!(!plain.contains(&"x".repeat(60)));
    }

    #[test]
    fn operation_is_coloured_and_target_is_not() {
        let line = format_entry(&entry("checkin", "UIT.Alpha"), 1, 25, 20);
        assert!(line.contains(&Colour::Green.paint("checkin").to_string()));
        assert!(
            strip_ansi(&line).starts_with("7: 2024-10-05T09:30:00+07:00 | checkin (UIT.Alpha)")
        );
    }
}
