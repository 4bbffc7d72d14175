//! HTTP client for the hosted record store.
//!
//! One table, bearer auth, JSON bodies. Reads paginate with an offset
//! token; writes PATCH a set of named fields on one record in a single
//! call (all-or-nothing per the store's contract). Single attempt
//! throughout — failures propagate to the caller, nothing retries.

use serde::Deserialize;
use serde_json::Value;

use crate::record::StoreRecord;
use crate::store::filter::{Filter, Sort};

/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("store returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("record not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    records: Vec<StoreRecord>,
    #[serde(default)]
    offset: Option<String>,
}

/// Client for one table of the record store.
pub struct TableClient {
    http: reqwest::Client,
    /// Base endpoint including the table, e.g. `https://store.example/v0/appX/Jobs`.
    endpoint: String,
    api_key: String,
}

impl TableClient {
    pub fn new(base_url: &str, table: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/{}", base_url.trim_end_matches('/'), table),
            api_key: api_key.to_string(),
        }
    }

    /// Query records matching `filter`, sorted server-side. Follows the
    /// offset cursor until the store stops returning one.
    pub async fn query(
        &self,
        filter: &Filter,
        sort: Option<&Sort>,
    ) -> Result<Vec<StoreRecord>, StoreError> {
        let formula = filter.to_formula();
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut request = self
                .http
                .get(&self.endpoint)
                .bearer_auth(&self.api_key)
                .query(&[("filterByFormula", formula.as_str())]);

            if let Some(sort) = sort {
                request = request.query(&[
                    ("sort[0][field]", sort.field),
                    ("sort[0][direction]", sort.direction.as_str()),
                ]);
            }
            if let Some(ref token) = offset {
                request = request.query(&[("offset", token.as_str())]);
            }

            let resp = request.send().await?;
            let status = resp.status();
            if !status.is_success() {
                let message = resp.text().await.unwrap_or_default();
                return Err(StoreError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let body: QueryResponse = resp.json().await?;
            records.extend(body.records);

            match body.offset {
                Some(token) => offset = Some(token),
                None => break,
            }
        }

        log::debug!("store query returned {} records ({})", records.len(), formula);
        Ok(records)
    }

    /// Fetch one record by its store id. Workflows use this for fresh
    /// reads instead of a possibly stale snapshot.
    pub async fn get(&self, record_id: &str) -> Result<StoreRecord, StoreError> {
        let resp = self
            .http
            .get(format!("{}/{}", self.endpoint, record_id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(record_id.to_string()));
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }

    /// Update named fields on one record. The store applies the whole
    /// field map or none of it, which is what the advancement workflow
    /// relies on when writing stage + due date together.
    pub async fn update_fields(
        &self,
        record_id: &str,
        fields: serde_json::Map<String, Value>,
    ) -> Result<(), StoreError> {
        let field_count = fields.len();
        let resp = self
            .http
            .patch(format!("{}/{}", self.endpoint, record_id))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "fields": fields }))
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(record_id.to_string()));
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        log::debug!("store update {} applied {} field(s)", record_id, field_count);
        Ok(())
    }
}
