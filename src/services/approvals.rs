//! Approval/rejection workflow for pending prototype builds.
//!
//! Approving delegates to the external build trigger; rejecting requires
//! a reason. Both resolve the acting user from config, falling back to
//! the "Unknown User" sentinel rather than blocking. Structured build
//! failures (machine-readable `code`) pass through `PipelineError`
//! intact so the caller can branch without string-matching; everything
//! else surfaces as a generic failure. Marking a build failed is a local
//! stage write with no external call.

use serde_json::json;

use crate::error::PipelineError;
use crate::record::fields;
use crate::stage::Stage;
use crate::state::AppState;
use crate::types::View;

/// Approve a pending job: trigger the external build and flag the
/// approval and building views for a re-read.
pub async fn approve_build(
    state: &AppState,
    job_id: &str,
    notes: Option<&str>,
) -> Result<(), PipelineError> {
    let user = state.acting_user();
    state.builds.trigger(job_id, &user, notes).await?;

    log::info!("build triggered for job {} by {}", job_id, user);
    state.mark_stale(&[View::Approvals, View::Building]);
    Ok(())
}

/// Reject a pending job with a mandatory reason.
pub async fn reject_build(
    state: &AppState,
    job_id: &str,
    reason: &str,
    notes: Option<&str>,
) -> Result<(), PipelineError> {
    let user = state.acting_user();
    state.builds.reject(job_id, reason, &user, notes).await?;

    log::info!("build rejected for job {} by {}: {}", job_id, user, reason);
    state.mark_stale(&[View::Approvals]);
    Ok(())
}

/// Mark a job's build failed: Building → Build Failed, written straight
/// to the store.
pub async fn mark_build_failed(state: &AppState, job_id: &str) -> Result<(), PipelineError> {
    let mut field_map = serde_json::Map::new();
    field_map.insert(
        fields::STAGE.to_string(),
        json!(Stage::BuildFailed.as_str()),
    );
    state.store.update_fields(job_id, field_map).await?;

    log::warn!("job {} marked build-failed", job_id);
    state.mark_stale(&[View::Building, View::Funnel]);
    Ok(())
}
