//! Remote collaborators: the flow lookup service and the documentation service.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::{
    domain::{FlowEndpoint, FlowId},
    protocol::{LookupRequest, SubmissionReceipt, SubmissionRequest},
};
use tracing::{info, warn};
use url::Url;

#[async_trait]
pub trait LookupService: Send + Sync {
    async fn lookup(&self, flow_id: &FlowId) -> Result<Vec<FlowEndpoint>>;
}

#[async_trait]
pub trait SubmissionService: Send + Sync {
    async fn submit(&self, endpoints: &[String]) -> Result<SubmissionReceipt>;
}

/// Both collaborators reached over JSON-over-HTTP `POST`s.
pub struct HttpCollaborators {
    http: Client,
    lookup_url: Url,
    submission_url: Url,
}

impl HttpCollaborators {
    pub fn new(lookup_url: Url, submission_url: Url) -> Self {
        Self::with_client(Client::new(), lookup_url, submission_url)
    }

    pub fn with_client(http: Client, lookup_url: Url, submission_url: Url) -> Self {
        Self {
            http,
            lookup_url,
            submission_url,
        }
    }
}

#[async_trait]
impl LookupService for HttpCollaborators {
    async fn lookup(&self, flow_id: &FlowId) -> Result<Vec<FlowEndpoint>> {
        info!(flow_id = %flow_id, url = %self.lookup_url, "requesting flow endpoints");
        let body = self
            .http
            .post(self.lookup_url.clone())
            .json(&LookupRequest {
                flow_id: flow_id.clone(),
            })
            .send()
            .await
            .context("failed to reach lookup service")?
            .error_for_status()?
            .bytes()
            .await
            .context("failed to read lookup response")?;
        Ok(decode_lookup_body(&body))
    }
}

#[async_trait]
impl SubmissionService for HttpCollaborators {
    async fn submit(&self, endpoints: &[String]) -> Result<SubmissionReceipt> {
        info!(
            count = endpoints.len(),
            url = %self.submission_url,
            "submitting endpoints for documentation"
        );
        let body = self
            .http
            .post(self.submission_url.clone())
            .json(&SubmissionRequest {
                endpoints: endpoints.to_vec(),
            })
            .send()
            .await
            .context("failed to reach documentation service")?
            .error_for_status()?
            .bytes()
            .await
            .context("failed to read documentation response")?;
        Ok(SubmissionReceipt {
            submitted: endpoints.len(),
            response: serde_json::from_slice(&body).ok(),
        })
    }
}

/// Normalizes a lookup body into a result set. Anything that is not a JSON
/// array yields no results; array items that do not look like an endpoint are
/// dropped.
pub fn decode_lookup_body(body: &[u8]) -> Vec<FlowEndpoint> {
    let items = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            warn!(kind = json_kind(&other), "lookup response is not an array; treating as empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(error = %err, "lookup response is not valid JSON; treating as empty");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<FlowEndpoint>(item) {
            Ok(endpoint) => Some(endpoint),
            Err(err) => {
                warn!(index, error = %err, "skipping malformed lookup item");
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
