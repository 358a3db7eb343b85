use anyhow::{Context, Result};
use std::path::Path;
use time::format_description::well_known::Rfc3339;

pub fn ensure_dir(p: &Path) -> Result<()> {
    std::fs::create_dir_all(p).with_context(|| format!("create_dir_all {}", p.display()))
}

pub fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

/// Compact UTC stamp (`YYYYMMDDTHHMMSSZ`) used for suite report filenames.
pub fn now_compact_utc() -> String {
    time::format_description::parse("[year][month][day]T[hour][minute][second]Z")
        .ok()
        .and_then(|fmt| time::OffsetDateTime::now_utc().format(&fmt).ok())
        .unwrap_or_else(|| "19700101T000000Z".to_string())
}
