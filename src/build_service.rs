//! HTTP client for the build-orchestration service.
//!
//! Two calls: trigger a prototype build for an approved job, or reject
//! one with a reason. Non-2xx responses carry a JSON `{message}` body
//! and, when the failure is structured, a machine-readable `code`
//! (e.g. "WRONG_STAGE"). The code is preserved intact so callers can
//! branch on specific failure causes without string-matching.

use serde::{Deserialize, Serialize};

/// Errors from build service calls.
#[derive(Debug, thiserror::Error)]
pub enum BuildServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-2xx response. `code` is `Some` only for structured failures.
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
}

#[derive(Debug, Serialize)]
struct TriggerBody<'a> {
    approved_by: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct RejectBody<'a> {
    reason: &'a str,
    rejected_by: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

pub struct BuildClient {
    http: reqwest::Client,
    base_url: String,
}

impl BuildClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Start a prototype build for a job.
    pub async fn trigger(
        &self,
        job_id: &str,
        approved_by: &str,
        notes: Option<&str>,
    ) -> Result<(), BuildServiceError> {
        let url = format!("{}/builds/trigger/{}", self.base_url, job_id);
        let resp = self
            .http
            .post(&url)
            .json(&TriggerBody { approved_by, notes })
            .send()
            .await?;
        Self::check(resp).await
    }

    /// Reject a pending build with a mandatory reason.
    pub async fn reject(
        &self,
        job_id: &str,
        reason: &str,
        rejected_by: &str,
        notes: Option<&str>,
    ) -> Result<(), BuildServiceError> {
        let url = format!("{}/builds/reject/{}", self.base_url, job_id);
        let resp = self
            .http
            .post(&url)
            .json(&RejectBody {
                reason,
                rejected_by,
                notes,
            })
            .send()
            .await?;
        Self::check(resp).await
    }

    async fn check(resp: reqwest::Response) -> Result<(), BuildServiceError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        // Error bodies are JSON {message, code?}; fall back to raw text
        // when the body is not parseable.
        let text = resp.text().await.unwrap_or_default();
        let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
        Err(BuildServiceError::Api {
            status: status.as_u16(),
            code: body.code,
            message: body.message.unwrap_or(text),
        })
    }
}
