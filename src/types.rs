//! Core entity types shared across services.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::stage::{ResponseType, Stage};

/// A job/deal flowing through the pipeline.
///
/// Every field except `id` is optional: upstream store columns are
/// provisioned lazily, so any of them may be absent on any record.
/// The mapper (`record::map_job`) is the only place raw store fields are
/// touched; past that boundary absence is an ordinary `None`, never an
/// error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Opaque record identifier assigned by the external store.
    pub id: String,
    /// Business identifier; falls back to `id` when the column is absent.
    pub external_job_id: String,

    /// Parsed stage. `None` means the token was empty or unrecognized;
    /// such jobs are excluded from every classification bucket.
    pub stage: Option<Stage>,
    /// Raw stage token as stored, kept for diagnostics.
    pub stage_token: String,
    pub response_type: Option<ResponseType>,

    pub scraped_at: Option<DateTime<Utc>>,
    pub applied_at: Option<DateTime<Utc>>,
    pub response_date: Option<DateTime<Utc>>,
    pub next_action_date: Option<DateTime<Utc>>,
    pub last_follow_up_date: Option<DateTime<Utc>>,
    pub call_completed_date: Option<DateTime<Utc>>,
    pub contract_sent_date: Option<DateTime<Utc>>,
    pub close_date: Option<DateTime<Utc>>,

    /// `None` means no budget recorded — distinct from a zero budget.
    pub budget_amount: Option<f64>,
    pub budget_type: Option<String>,
    pub deal_value: Option<f64>,
    pub lost_reason: Option<String>,

    pub title: Option<String>,
    pub description: Option<String>,
    pub client: Option<String>,
    /// Comma-separated skill list, as stored.
    pub skills: Option<String>,
    /// Serialized structured payload describing a buildable prototype.
    pub brief: Option<String>,
    pub buildable: Option<bool>,
    pub prototype_url: Option<String>,
    pub loom_url: Option<String>,
    pub cover_letter: Option<String>,
    pub job_url: Option<String>,
}

/// Dashboard views that can go stale after a workflow write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    HotLeads,
    FollowUps,
    Closing,
    Funnel,
    Approvals,
    Building,
}
