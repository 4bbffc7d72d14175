//! Record mapper: raw store rows → normalized `Job` entities.
//!
//! The external schema evolves independently of this code — columns may
//! not exist yet on any given base. Every field access therefore degrades
//! gracefully: missing or type-mismatched values resolve to `None`, never
//! an error. This is the single boundary where raw store fields are read.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::stage::{ResponseType, Stage};
use crate::types::Job;

/// Store column names. The store schema is the source of truth for these;
/// they are matched exactly, including casing.
pub mod fields {
    pub const JOB_ID: &str = "Job ID";
    pub const STAGE: &str = "Stage";
    pub const RESPONSE_TYPE: &str = "Response Type";

    pub const SCRAPED_AT: &str = "Scraped At";
    pub const APPLIED_AT: &str = "Applied At";
    pub const RESPONSE_DATE: &str = "Response Date";
    pub const NEXT_ACTION_DATE: &str = "Next Action Date";
    pub const LAST_FOLLOW_UP_DATE: &str = "Last Follow Up Date";
    pub const CALL_COMPLETED_DATE: &str = "Call Completed Date";
    pub const CONTRACT_SENT_DATE: &str = "Contract Sent Date";
    pub const CLOSE_DATE: &str = "Close Date";

    pub const BUDGET_AMOUNT: &str = "Budget Amount";
    pub const BUDGET_TYPE: &str = "Budget Type";
    pub const DEAL_VALUE: &str = "Deal Value";
    pub const LOST_REASON: &str = "Lost Reason";

    pub const TITLE: &str = "Title";
    pub const DESCRIPTION: &str = "Description";
    pub const CLIENT: &str = "Client";
    pub const SKILLS: &str = "Skills";
    pub const BRIEF: &str = "Brief";
    pub const BUILDABLE: &str = "Buildable";
    pub const PROTOTYPE_URL: &str = "Prototype URL";
    pub const LOOM_URL: &str = "Loom URL";
    pub const COVER_LETTER: &str = "Cover Letter";
    pub const JOB_URL: &str = "Job URL";
}

/// A raw row from the record store: opaque id plus a named-field map.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRecord {
    pub id: String,
    #[serde(default)]
    pub fields: serde_json::Map<String, Value>,
}

impl StoreRecord {
    /// String field, or `None` when absent or not a string.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Numeric field. Absent resolves to `None`, not 0, so callers can
    /// distinguish "no budget recorded" from "zero budget".
    pub fn f64_field(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(Value::as_f64)
    }

    pub fn bool_field(&self, name: &str) -> Option<bool> {
        self.fields.get(name).and_then(Value::as_bool)
    }

    /// ISO-8601 timestamp field. Unparseable values degrade to `None`
    /// the same as absent ones.
    pub fn datetime_field(&self, name: &str) -> Option<DateTime<Utc>> {
        self.str_field(name)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Map a raw store record into a `Job`. Total: never fails, whatever the
/// row contains.
pub fn map_job(record: &StoreRecord) -> Job {
    let stage_token = record.str_field(fields::STAGE).unwrap_or("").to_string();
    Job {
        external_job_id: record
            .str_field(fields::JOB_ID)
            .unwrap_or(&record.id)
            .to_string(),
        stage: Stage::parse(&stage_token),
        stage_token,
        response_type: record
            .str_field(fields::RESPONSE_TYPE)
            .and_then(ResponseType::parse),

        scraped_at: record.datetime_field(fields::SCRAPED_AT),
        applied_at: record.datetime_field(fields::APPLIED_AT),
        response_date: record.datetime_field(fields::RESPONSE_DATE),
        next_action_date: record.datetime_field(fields::NEXT_ACTION_DATE),
        last_follow_up_date: record.datetime_field(fields::LAST_FOLLOW_UP_DATE),
        call_completed_date: record.datetime_field(fields::CALL_COMPLETED_DATE),
        contract_sent_date: record.datetime_field(fields::CONTRACT_SENT_DATE),
        close_date: record.datetime_field(fields::CLOSE_DATE),

        budget_amount: record.f64_field(fields::BUDGET_AMOUNT),
        budget_type: record.str_field(fields::BUDGET_TYPE).map(str::to_string),
        deal_value: record.f64_field(fields::DEAL_VALUE),
        lost_reason: record.str_field(fields::LOST_REASON).map(str::to_string),

        title: record.str_field(fields::TITLE).map(str::to_string),
        description: record.str_field(fields::DESCRIPTION).map(str::to_string),
        client: record.str_field(fields::CLIENT).map(str::to_string),
        skills: record.str_field(fields::SKILLS).map(str::to_string),
        brief: record.str_field(fields::BRIEF).map(str::to_string),
        buildable: record.bool_field(fields::BUILDABLE),
        prototype_url: record.str_field(fields::PROTOTYPE_URL).map(str::to_string),
        loom_url: record.str_field(fields::LOOM_URL).map(str::to_string),
        cover_letter: record.str_field(fields::COVER_LETTER).map(str::to_string),
        job_url: record.str_field(fields::JOB_URL).map(str::to_string),

        id: record.id.clone(),
    }
}
