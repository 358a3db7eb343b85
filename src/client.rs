use crate::action::{Action, RunSummary};
use reqwest::blocking::Client as HttpClient;
use serde_json::{Value, json};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("control plane {method} {path} returned status {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },
    #[error("control plane request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("control plane response missing field: {0}")]
    Malformed(&'static str),
}

/// Thin synchronous wrapper over the control plane's HTTP contract. Bound to
/// a base URL with one bounded timeout per call; holds no state beyond the
/// pooled connection, which is released when the client is dropped.
pub struct ControlPlaneClient {
    base_url: String,
    http: HttpClient,
}

impl ControlPlaneClient {
    pub fn connect(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST /runs; returns the server-assigned run id (`run.id`), treated as
    /// an opaque correlation key from here on.
    pub fn create_run(&self, driver: &str) -> Result<String, ClientError> {
        let path = "/runs".to_string();
        let response = self
            .http
            .post(self.url_for(&path))
            .json(&json!({ "driver": driver }))
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                method: "POST",
                path,
                status: status.as_u16(),
            });
        }
        let body: Value = response.json()?;
        body.get("run")
            .and_then(|run| run.get("id"))
            .and_then(|id| id.as_str())
            .map(str::to_string)
            .ok_or(ClientError::Malformed("run.id"))
    }

    /// POST /runs/{runId}/actions; only the status code is consumed.
    pub fn submit_action(&self, run_id: &str, action: &Action) -> Result<(), ClientError> {
        let path = format!("/runs/{run_id}/actions");
        let response = self.http.post(self.url_for(&path)).json(action).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                method: "POST",
                path,
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    /// GET /runs/{runId}/summary.
    pub fn fetch_summary(&self, run_id: &str) -> Result<RunSummary, ClientError> {
        let path = format!("/runs/{run_id}/summary");
        let response = self.http.get(self.url_for(&path)).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                method: "GET",
                path,
                status: status.as_u16(),
            });
        }
        Ok(response.json()?)
    }
}
