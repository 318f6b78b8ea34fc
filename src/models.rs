use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One user-issued forwarding request as received from the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardRequest {
    pub agent_id: String,
    pub method: String,
    pub path: String,
    pub body: Option<String>,
}

/// Echo of the resolved call, reported back alongside the outcome.
#[derive(Debug, Serialize, Deserialize)]
pub struct RequestEcho {
    pub url: String,
    pub method: String,
    pub path: String,
    pub agent_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpstreamResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    /// Parsed JSON when the upstream payload parses, the verbatim text
    /// otherwise.
    pub body: serde_json::Value,
    pub elapsed_ms: f64,
}

/// A completed round trip carries exactly one of these. Flattened into the
/// report, the JSON gets either a `response` object or an `error` string,
/// never both.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForwardOutcome {
    Response(UpstreamResponse),
    Error(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForwardReport {
    pub request: RequestEcho,
    #[serde(flatten)]
    pub outcome: ForwardOutcome,
}
