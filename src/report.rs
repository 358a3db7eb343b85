use crate::action::Observation;
use crate::util::{ensure_dir, now_compact_utc};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Verdict and raw evidence for one single-task invocation. One JSON
/// document per run, keyed `<taskId>_<runId>.json` so repeated runs of the
/// same task never collide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReport {
    pub task_id: String,
    pub run_id: String,
    pub driver: String,
    pub timestamp: String,
    pub success: bool,
    pub criteria: Vec<String>,
    pub observations: Vec<Observation>,
    pub evidence: Value,
}

/// One entry of a suite report; the batch artifact is the ordered array of
/// entries, keyed by a UTC timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteEntry {
    pub task_id: String,
    pub run_id: String,
    pub success: bool,
    pub observations: Vec<Observation>,
    pub evidence: Value,
}

pub fn write_task_report(dir: &Path, report: &TaskReport) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(format!("{}_{}.json", report.task_id, report.run_id));
    std::fs::write(&path, serde_json::to_string_pretty(report)?)
        .with_context(|| format!("write report {}", path.display()))?;
    Ok(path)
}

pub fn write_suite_report(dir: &Path, entries: &[SuiteEntry]) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(format!("webarena_{}.json", now_compact_utc()));
    std::fs::write(&path, serde_json::to_string_pretty(entries)?)
        .with_context(|| format!("write report {}", path.display()))?;
    Ok(path)
}
