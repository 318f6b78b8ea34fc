use crate::models::{ForwardOutcome, ForwardReport, ForwardRequest, RequestEcho, UpstreamResponse};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

/// Upper bound on one round trip. Applied when the shared client is built,
/// so it covers connect, send and body read together.
pub const FORWARD_TIMEOUT: Duration = Duration::from_secs(30);

/// Routing segment the proxy expects between its base address and the
/// agent-scoped path.
const PROXY_SEGMENT: &str = "/proxy/";

/// The closed set of methods the console will relay. Matching is
/// case-sensitive: "get" is rejected, "GET" is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl SupportedMethod {
    pub fn parse(method: &str) -> Result<Self, ForwardError> {
        match method {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            other => Err(ForwardError::UnsupportedMethod(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),
    #[error("upstream request timed out after {}s", FORWARD_TIMEOUT.as_secs())]
    Timeout,
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Builds the fully-qualified target URL for an agent-scoped path.
pub fn target_url(base_url: &str, agent_id: &str, path: &str) -> String {
    format!("{}{}{}{}", base_url, PROXY_SEGMENT, agent_id, path)
}

/// Relays one request to the proxy and folds the round trip, success or
/// failure, into a single report. Nothing escapes this boundary: every
/// failure ends up in the report's `error` half.
pub async fn forward(client: &Client, base_url: &str, request: ForwardRequest) -> ForwardReport {
    let url = target_url(base_url, &request.agent_id, &request.path);
    info!(
        "Forwarding {} {} for agent {}",
        request.method, url, request.agent_id
    );

    let outcome = match dispatch(client, &url, &request).await {
        Ok(response) => ForwardOutcome::Response(response),
        Err(e) => {
            warn!("Forwarding to {} failed: {}", url, e);
            ForwardOutcome::Error(e.to_string())
        }
    };

    ForwardReport {
        request: RequestEcho {
            url,
            method: request.method,
            path: request.path,
            agent_id: request.agent_id,
        },
        outcome,
    }
}

async fn dispatch(
    client: &Client,
    url: &str,
    request: &ForwardRequest,
) -> Result<UpstreamResponse, ForwardError> {
    // Unknown methods are rejected before anything touches the network.
    let method = SupportedMethod::parse(&request.method)?;

    let builder = match method {
        SupportedMethod::Get => client.get(url),
        SupportedMethod::Delete => client.delete(url),
        SupportedMethod::Post => with_json_body(client.post(url), request),
        SupportedMethod::Put => with_json_body(client.put(url), request),
    };

    let started = Instant::now();
    let response = builder.send().await.map_err(classify)?;

    let status_code = response.status().as_u16();
    let headers: HashMap<String, String> = response
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
        .collect();

    let text = response.text().await.map_err(classify)?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    Ok(UpstreamResponse {
        status_code,
        headers,
        body: parse_body(text),
        elapsed_ms,
    })
}

/// POST and PUT always carry a body (empty if none was given) and a JSON
/// content type, whether or not the payload actually is JSON.
fn with_json_body(builder: RequestBuilder, request: &ForwardRequest) -> RequestBuilder {
    builder
        .header(CONTENT_TYPE, "application/json")
        .body(request.body.clone().unwrap_or_default())
}

/// Try-parse-else-raw: remote services legitimately return non-JSON
/// payloads, so a parse failure falls back to the verbatim text instead of
/// failing the call.
fn parse_body(text: String) -> serde_json::Value {
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => serde_json::Value::String(text),
    }
}

fn classify(e: reqwest::Error) -> ForwardError {
    if e.is_timeout() {
        ForwardError::Timeout
    } else {
        ForwardError::Transport(e)
    }
}
