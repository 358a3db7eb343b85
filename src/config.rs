use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub harness: Harness,
    #[serde(default)]
    pub reports: Reports,
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw).with_context(|| "parsing TOML")?;
        Ok(cfg)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            harness: Default::default(),
            reports: Default::default(),
            logging: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Harness {
    pub driver: String,
    pub control_plane_url: String,
    pub agent_name: String,
    pub request_timeout_seconds: u64,
}
impl Default for Harness {
    fn default() -> Self {
        Self {
            driver: "gemini-computer-use".into(),
            control_plane_url: "http://localhost:4000".into(),
            agent_name: "Arena Harness".into(),
            request_timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reports {
    pub dir: String,
    pub task_ledger_filename: String,
    pub suite_ledger_filename: String,
}
impl Default for Reports {
    fn default() -> Self {
        Self {
            dir: "reports".into(),
            task_ledger_filename: "summary.csv".into(),
            suite_ledger_filename: "webarena_summary.csv".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    pub level: String,
    pub json: bool,
    pub write_to_file: bool,
    pub file_path: String,
}
impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            write_to_file: false,
            file_path: "".into(),
        }
    }
}
