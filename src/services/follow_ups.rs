//! Follow-up board: two-level partition of outreach-stage jobs.
//!
//! First level splits overdue from upcoming. A job with no next-action
//! date is maximally overdue — it classifies as overdue, never upcoming.
//! Second level routes by touchpoint stage. The close-out column exists
//! structurally but the current transition table never routes a stage
//! there (Touchpoint 3 is the last follow-up message before closed-lost).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::stage::Stage;
use crate::types::Job;
use crate::urgency::{self, Urgency};

/// One follow-up column set, keyed by touchpoint.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpColumns {
    pub follow_up_1: Vec<Job>,
    pub follow_up_2: Vec<Job>,
    pub follow_up_3: Vec<Job>,
    pub close_out: Vec<Job>,
}

impl FollowUpColumns {
    fn push(&mut self, job: Job) {
        match job.stage {
            Some(Stage::Touchpoint1) => self.follow_up_1.push(job),
            Some(Stage::Touchpoint2) => self.follow_up_2.push(job),
            Some(Stage::Touchpoint3) => self.follow_up_3.push(job),
            _ => {}
        }
    }

    pub fn len(&self) -> usize {
        self.follow_up_1.len() + self.follow_up_2.len() + self.follow_up_3.len()
            + self.close_out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpBoard {
    pub overdue: FollowUpColumns,
    pub upcoming: FollowUpColumns,
}

/// A job is due for follow-up when its next-action date is missing or
/// has passed.
pub fn is_due(job: &Job, now: DateTime<Utc>) -> bool {
    match job.next_action_date {
        None => true,
        Some(due) => due <= now,
    }
}

/// Urgency tier for a job's next action. Missing date reads as overdue
/// here, matching `is_due` — the "none" tier is reserved for views where
/// absence genuinely means "not scheduled".
pub fn job_urgency(job: &Job, now: DateTime<Utc>) -> Urgency {
    match job.next_action_date {
        None => Urgency::Overdue,
        due => urgency::classify(due, now),
    }
}

/// Partition touchpoint-stage jobs into overdue/upcoming columns.
/// Stages outside the touchpoint set are dropped.
pub fn group_follow_ups(jobs: Vec<Job>, now: DateTime<Utc>) -> FollowUpBoard {
    let mut board = FollowUpBoard::default();
    for job in jobs {
        if !matches!(
            job.stage,
            Some(Stage::Touchpoint1) | Some(Stage::Touchpoint2) | Some(Stage::Touchpoint3)
        ) {
            continue;
        }
        if is_due(&job, now) {
            board.overdue.push(job);
        } else {
            board.upcoming.push(job);
        }
    }
    board
}
