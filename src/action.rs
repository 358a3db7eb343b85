use crate::util::now_rfc3339;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One instructed step submitted against a run. The harness only ever issues
/// a single navigation per run, so `sequence` is fixed at 0 and `status` at
/// the client-asserted initial state; the control plane owns every transition
/// after submission.
#[derive(Debug, Clone, Serialize)]
pub struct Action {
    pub id: String,
    #[serde(rename = "runId")]
    pub run_id: String,
    pub sequence: u32,
    pub timestamp: String,
    pub agent: AgentMeta,
    pub context: ActionContext,
    pub target: ActionTarget,
    pub payload: ActionPayload,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentMeta {
    pub id: String,
    pub name: String,
    pub driver: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionContext {
    #[serde(rename = "idempotencyKey")]
    pub idempotency_key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionTarget {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionPayload {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Action {
    /// Build the single navigate action for a run. Ids and the idempotency
    /// key are fresh per call so the control plane can safely de-duplicate a
    /// retried submission, even though this harness never retries.
    pub fn navigate(run_id: &str, agent_name: &str, driver: &str, url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            run_id: run_id.to_string(),
            sequence: 0,
            timestamp: now_rfc3339(),
            agent: AgentMeta {
                id: Uuid::new_v4().to_string(),
                name: agent_name.to_string(),
                driver: driver.to_string(),
            },
            context: ActionContext {
                idempotency_key: Uuid::new_v4().to_string(),
            },
            target: ActionTarget { url },
            payload: ActionPayload {
                kind: "navigate".into(),
            },
            status: "planned".into(),
        }
    }
}

/// Decoded body of `GET /runs/{id}/summary`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunSummary {
    #[serde(default)]
    pub observations: Vec<Observation>,
    #[serde(default)]
    pub evidence: Value,
}

/// Textual evidence about page state. Only `text` is interpreted (missing
/// text reads as empty); every other field is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
