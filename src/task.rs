use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single benchmark task. Field absence is tolerated: a missing `startUrl`
/// stays `None` (the action targets a null URL), a missing `successCriteria`
/// list is empty (vacuously satisfied).
#[derive(Debug, Clone, Deserialize)]
pub struct TaskSpec {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "startUrl", default)]
    pub start_url: Option<String>,
    #[serde(rename = "successCriteria", default)]
    pub success_criteria: Vec<String>,
}

/// One entry of a suite file. Carries a single phrase instead of a criteria
/// list; a missing phrase is the empty string, which never matches.
#[derive(Debug, Clone, Deserialize)]
pub struct SuiteTask {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "startUrl", default)]
    pub start_url: Option<String>,
    #[serde(rename = "successPhrase", default)]
    pub success_phrase: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuiteSpec {
    #[serde(default)]
    pub tasks: Vec<SuiteTask>,
}

#[derive(Debug, Error)]
pub enum TaskFileError {
    #[error("task file not found: {0}")]
    NotFound(PathBuf),
    #[error("reading task file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("task file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn load_task(path: &Path) -> Result<TaskSpec, TaskFileError> {
    let raw = read(path)?;
    serde_json::from_str(&raw).map_err(|source| TaskFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_suite(path: &Path) -> Result<SuiteSpec, TaskFileError> {
    let raw = read(path)?;
    serde_json::from_str(&raw).map_err(|source| TaskFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, TaskFileError> {
    if !path.exists() {
        return Err(TaskFileError::NotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| TaskFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}
