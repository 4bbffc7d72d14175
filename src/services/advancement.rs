//! Follow-up advancement workflow.
//!
//! Reads the job's current stage fresh from the store (a cached snapshot
//! could double-advance or skip a touchpoint), looks up the successor in
//! the transition table, and writes the result back. A non-terminal
//! successor gets a due date exactly 24 hours out, written together with
//! the stage in one update call — the store applies the field map
//! all-or-nothing, so the stage and due date are always observed
//! together.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::json;

use crate::error::PipelineError;
use crate::record::fields;
use crate::stage::{next_follow_up_stage, Stage};
use crate::state::AppState;
use crate::types::View;

/// Hours until the next touchpoint comes due after an advancement.
const FOLLOW_UP_INTERVAL_HOURS: i64 = 24;

/// Outcome of an advancement, returned to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advancement {
    pub from: Stage,
    pub to: Stage,
    /// Absent when the transition was terminal (no further follow-up).
    pub next_action_date: Option<DateTime<Utc>>,
}

/// The field write an advancement will perform, computed before any
/// store call so the write stays a single update.
#[derive(Debug)]
pub struct AdvancementPlan {
    pub to: Stage,
    pub next_action_date: Option<DateTime<Utc>>,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Pure planning step: current stage in, successor plus the exact field
/// map out. Terminal successors write only the stage.
pub fn plan_advancement(current: Stage, now: DateTime<Utc>) -> Result<AdvancementPlan, PipelineError> {
    let to = next_follow_up_stage(current)?;

    let mut field_map = serde_json::Map::new();
    field_map.insert(fields::STAGE.to_string(), json!(to.as_str()));

    let next_action_date = if to.is_terminal() {
        None
    } else {
        let due = now + Duration::hours(FOLLOW_UP_INTERVAL_HOURS);
        field_map.insert(fields::NEXT_ACTION_DATE.to_string(), json!(due.to_rfc3339()));
        Some(due)
    };

    Ok(AdvancementPlan {
        to,
        next_action_date,
        fields: field_map,
    })
}

/// Advance a job one step along the follow-up chain.
pub async fn advance_follow_up(
    state: &AppState,
    job_id: &str,
    now: DateTime<Utc>,
) -> Result<Advancement, PipelineError> {
    // Fresh read — never advance off a dashboard snapshot.
    let record = state.store.get(job_id).await?;
    let token = record.str_field(fields::STAGE).unwrap_or("");
    let current = Stage::parse(token).ok_or_else(|| PipelineError::UnrecognizedStage {
        id: job_id.to_string(),
        value: token.to_string(),
    })?;

    let plan = plan_advancement(current, now)?;
    state.store.update_fields(job_id, plan.fields).await?;

    log::info!(
        "advanced job {} {} -> {}",
        job_id,
        current.label(),
        plan.to.label()
    );
    state.mark_stale(&[View::FollowUps, View::Funnel]);

    Ok(Advancement {
        from: current,
        to: plan.to,
        next_action_date: plan.next_action_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        "2026-08-20T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn non_terminal_plan_writes_stage_and_due_date_together() {
        let plan = plan_advancement(Stage::InitialMessageSent, now()).unwrap();
        assert_eq!(plan.to, Stage::Touchpoint1);
        assert_eq!(plan.fields.len(), 2);
        assert_eq!(plan.fields["Stage"], "📬 Touchpoint 1");

        let due = plan.next_action_date.unwrap();
        assert!(due >= now() && due <= now() + Duration::hours(24));
        assert_eq!(
            plan.fields["Next Action Date"].as_str().unwrap(),
            due.to_rfc3339()
        );
    }

    #[test]
    fn due_date_is_exactly_24_hours_out() {
        let plan = plan_advancement(Stage::Touchpoint1, now()).unwrap();
        assert_eq!(plan.next_action_date.unwrap(), now() + Duration::hours(24));
    }

    #[test]
    fn terminal_plan_writes_only_the_stage() {
        let plan = plan_advancement(Stage::Touchpoint3, now()).unwrap();
        assert_eq!(plan.to, Stage::ClosedLost);
        assert_eq!(plan.next_action_date, None);
        assert_eq!(plan.fields.len(), 1);
        assert_eq!(plan.fields["Stage"], "🪦 Closed Lost");
    }

    #[test]
    fn planning_fails_for_stages_without_progression() {
        let err = plan_advancement(Stage::Deployed, now()).unwrap_err();
        assert!(matches!(err, PipelineError::NoProgression { .. }));
    }

    #[test]
    fn repeated_planning_walks_the_whole_chain() {
        let mut stage = Stage::InitialMessageSent;
        let mut hops = Vec::new();
        while let Ok(plan) = plan_advancement(stage, now()) {
            hops.push(plan.to);
            stage = plan.to;
        }
        assert_eq!(
            hops,
            [
                Stage::Touchpoint1,
                Stage::Touchpoint2,
                Stage::Touchpoint3,
                Stage::ClosedLost
            ]
        );
    }
}
