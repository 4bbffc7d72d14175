//! Pipeline snapshot assembly for the dashboard.
//!
//! One filtered read of the store, one pass of mapping, then the four
//! pure groupings. The snapshot holds no state between calls — every
//! load observes the store (and the clock) fresh.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::PipelineError;
use crate::record::{fields, map_job};
use crate::state::AppState;
use crate::store::filter::{Filter, Sort};
use crate::types::Job;

use super::closing::{group_deals, ClosingBoard};
use super::follow_ups::{group_follow_ups, FollowUpBoard};
use super::funnel::{count_funnel, FunnelCounts};
use super::hot_leads::{group_hot_leads, HotLeadBoard};

/// View-ready buckets for every dashboard, built from one store read.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSnapshot {
    pub hot_leads: HotLeadBoard,
    pub follow_ups: FollowUpBoard,
    pub closing: ClosingBoard,
    pub funnel: FunnelCounts,
    pub job_count: usize,
    pub fetched_at: DateTime<Utc>,
}

/// Run all four groupings over an already-mapped collection.
pub fn build_snapshot(jobs: Vec<Job>, now: DateTime<Utc>) -> PipelineSnapshot {
    let funnel = count_funnel(&jobs);
    let job_count = jobs.len();
    PipelineSnapshot {
        hot_leads: group_hot_leads(jobs.clone()),
        follow_ups: group_follow_ups(jobs.clone(), now),
        closing: group_deals(jobs, now),
        funnel,
        job_count,
        fetched_at: now,
    }
}

/// Load every staged job from the store and classify it.
pub async fn load_snapshot(
    state: &AppState,
    now: DateTime<Utc>,
) -> Result<PipelineSnapshot, PipelineError> {
    let records = state
        .store
        .query(
            &Filter::NotBlank(fields::STAGE),
            Some(&Sort::desc(fields::SCRAPED_AT)),
        )
        .await?;

    let jobs: Vec<Job> = records.iter().map(map_job).collect();
    log::debug!("snapshot mapped {} jobs", jobs.len());
    Ok(build_snapshot(jobs, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StoreRecord;
    use crate::services::follow_ups::job_urgency;
    use crate::services::advancement::plan_advancement;
    use crate::stage::Stage;
    use crate::urgency::Urgency;
    use chrono::Duration;
    use serde_json::json;

    fn job(id: &str, fields: serde_json::Value) -> Job {
        map_job(&StoreRecord {
            id: id.to_string(),
            fields: fields.as_object().cloned().unwrap_or_default(),
        })
    }

    fn now() -> DateTime<Utc> {
        "2026-08-20T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn snapshot_is_defined_for_empty_input() {
        let snap = build_snapshot(Vec::new(), now());
        assert_eq!(snap.job_count, 0);
        assert_eq!(snap.funnel.total(), 0);
        assert!(snap.hot_leads.shortlist.is_empty());
        assert!(snap.follow_ups.overdue.is_empty());
        assert!(snap.closing.engaged.is_empty());
    }

    #[test]
    fn one_read_feeds_all_four_views() {
        let jobs = vec![
            job("a", json!({ "Stage": "📬 Touchpoint 1", "Response Type": "⭐ Shortlist" })),
            job("b", json!({ "Stage": "💬 Light Engagement", "Call Completed Date": "2026-08-18T10:00:00Z" })),
            job("c", json!({ "Stage": "🆕 New" })),
        ];
        let snap = build_snapshot(jobs, now());
        assert_eq!(snap.job_count, 3);
        assert_eq!(snap.hot_leads.shortlist.len(), 1);
        assert_eq!(snap.follow_ups.overdue.follow_up_1.len(), 1);
        assert_eq!(snap.closing.call_done.len(), 1);
        assert_eq!(snap.funnel.total(), 3);
    }

    // Full follow-up cycle: a job at initial-message-sent with no due
    // date reads as due now; after advancement it sits at touchpoint 1
    // and stays upcoming until the 24h interval elapses.
    #[test]
    fn full_follow_up_cycle() {
        let fresh = job("a", json!({ "Stage": "📨 Initial Message Sent" }));
        assert_eq!(job_urgency(&fresh, now()), Urgency::Overdue);

        let plan = plan_advancement(fresh.stage.unwrap(), now()).unwrap();
        assert_eq!(plan.to, Stage::Touchpoint1);
        let due = plan.next_action_date.unwrap();

        let advanced = job(
            "a",
            json!({
                "Stage": plan.to.as_str(),
                "Next Action Date": due.to_rfc3339(),
            }),
        );

        // Before the interval elapses the job is upcoming...
        let board = build_snapshot(vec![advanced.clone()], now() + Duration::hours(1));
        assert_eq!(board.follow_ups.upcoming.follow_up_1.len(), 1);

        // ...and after 24h it is overdue again.
        let board = build_snapshot(vec![advanced], now() + Duration::hours(25));
        assert_eq!(board.follow_ups.overdue.follow_up_1.len(), 1);
    }
}
