//! Funnel counts: one pass, twelve counters in four stage groups.
//!
//! Several distinct stage values collapse into one counter (prototype
//! built, send loom, and deployed all count as "deployed"; the three
//! touchpoints count as "followUps"). Unrecognized or empty stages count
//! nowhere, so the counter sum may be less than the input size.

use serde::Serialize;

use crate::stage::Stage;
use crate::types::Job;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelCounts {
    // Inbound
    pub new: usize,
    pub pending_approval: usize,
    pub approved: usize,
    pub rejected: usize,
    // Building
    pub building: usize,
    pub deployed: usize,
    // Outreach
    pub messaged: usize,
    pub follow_ups: usize,
    // Closing
    pub light_engagement: usize,
    pub engaged: usize,
    pub closed_won: usize,
    pub closed_lost: usize,
}

impl FunnelCounts {
    /// Sum of all counters. At most the number of classified jobs.
    pub fn total(&self) -> usize {
        self.new
            + self.pending_approval
            + self.approved
            + self.rejected
            + self.building
            + self.deployed
            + self.messaged
            + self.follow_ups
            + self.light_engagement
            + self.engaged
            + self.closed_won
            + self.closed_lost
    }
}

/// Tally every recognized job into exactly one counter.
pub fn count_funnel(jobs: &[Job]) -> FunnelCounts {
    let mut counts = FunnelCounts::default();
    for job in jobs {
        let stage = match job.stage {
            Some(s) => s,
            None => continue,
        };
        match stage {
            Stage::New => counts.new += 1,
            Stage::PendingApproval => counts.pending_approval += 1,
            Stage::Approved => counts.approved += 1,
            Stage::Rejected => counts.rejected += 1,
            Stage::Building | Stage::BuildFailed => counts.building += 1,
            Stage::PrototypeBuilt | Stage::SendLoom | Stage::Deployed => counts.deployed += 1,
            Stage::InitialMessageSent => counts.messaged += 1,
            Stage::Touchpoint1 | Stage::Touchpoint2 | Stage::Touchpoint3 => {
                counts.follow_ups += 1
            }
            Stage::LightEngagement => counts.light_engagement += 1,
            Stage::EngagementWithPrototype => counts.engaged += 1,
            Stage::ClosedWon => counts.closed_won += 1,
            Stage::ClosedLost => counts.closed_lost += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{map_job, StoreRecord};
    use crate::stage::ALL_STAGES;
    use serde_json::json;

    fn job(id: &str, stage: &str) -> Job {
        let mut fields = serde_json::Map::new();
        fields.insert("Stage".to_string(), json!(stage));
        map_job(&StoreRecord {
            id: id.to_string(),
            fields,
        })
    }

    #[test]
    fn every_recognized_stage_lands_in_exactly_one_counter() {
        let jobs: Vec<Job> = ALL_STAGES
            .iter()
            .enumerate()
            .map(|(i, s)| job(&format!("rec{i}"), s.as_str()))
            .collect();
        let counts = count_funnel(&jobs);
        assert_eq!(counts.total(), ALL_STAGES.len());
    }

    #[test]
    fn build_and_deploy_stages_collapse() {
        let jobs = vec![
            job("a", "🔨 Building"),
            job("b", "💥 Build Failed"),
            job("c", "🧪 Prototype Built"),
            job("d", "🎥 Send Loom"),
            job("e", "🚀 Deployed"),
        ];
        let counts = count_funnel(&jobs);
        assert_eq!(counts.building, 2);
        assert_eq!(counts.deployed, 3);
    }

    #[test]
    fn touchpoints_collapse_into_follow_ups() {
        let jobs = vec![
            job("a", "📬 Touchpoint 1"),
            job("b", "📬 Touchpoint 2"),
            job("c", "📬 Touchpoint 3"),
            job("d", "📨 Initial Message Sent"),
        ];
        let counts = count_funnel(&jobs);
        assert_eq!(counts.follow_ups, 3);
        assert_eq!(counts.messaged, 1);
    }

    #[test]
    fn unknown_and_empty_stages_count_nowhere() {
        let jobs = vec![job("a", ""), job("b", "Limbo"), job("c", "🆕 New")];
        let counts = count_funnel(&jobs);
        assert_eq!(counts.total(), 1);
        assert_eq!(counts.new, 1);
    }

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(count_funnel(&[]), FunnelCounts::default());
    }
}
