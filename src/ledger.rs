use crate::util::ensure_dir;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

pub const TASK_LEDGER_COLUMNS: [&str; 5] = ["taskId", "runId", "driver", "timestamp", "success"];
pub const SUITE_LEDGER_COLUMNS: [&str; 3] = ["taskId", "runId", "success"];

/// Append-only CSV log. The file grows across invocations: it is opened in
/// append mode, and the header row is written exactly once, when the file is
/// first created. Rows are never edited after being written.
pub struct Ledger {
    file: File,
}

impl Ledger {
    pub fn open(path: &Path, columns: &[&str]) -> Result<Self> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let write_header = !path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open ledger {}", path.display()))?;
        let mut ledger = Self { file };
        if write_header {
            ledger.append(columns)?;
        }
        Ok(ledger)
    }

    pub fn append(&mut self, fields: &[&str]) -> Result<()> {
        let row = fields
            .iter()
            .map(|f| csv_field(f))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(self.file, "{row}").with_context(|| "append ledger row")
    }
}

fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') || raw.contains('\r') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
