//! Closing board: four mutually exclusive columns, evaluated in
//! precedence order.
//!
//! 1. Closed-won within the last 7 days → won (older wins are dropped
//!    from the board entirely, and a closed-won without a close date is
//!    excluded rather than fabricating one);
//! 2. contract sent → contractSent;
//! 3. call completed → callDone;
//! 4. otherwise → engaged.
//!
//! The order is policy, not an accident of timestamps: a deal with both
//! a call date and a contract date lands in contractSent.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::stage::Stage;
use crate::types::Job;

/// Window in which a won deal still shows on the board.
const WON_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosingBoard {
    pub won: Vec<Job>,
    pub contract_sent: Vec<Job>,
    pub call_done: Vec<Job>,
    pub engaged: Vec<Job>,
}

/// Group deals into closing-board columns. First matching rule wins.
pub fn group_deals(jobs: Vec<Job>, now: DateTime<Utc>) -> ClosingBoard {
    let mut board = ClosingBoard::default();
    let window_start = now - Duration::days(WON_WINDOW_DAYS);

    for job in jobs {
        if job.stage == Some(Stage::ClosedWon) {
            match job.close_date {
                Some(closed) if closed >= window_start && closed <= now => board.won.push(job),
                // Older wins and undated wins drop off the board.
                _ => {}
            }
        } else if job.contract_sent_date.is_some() {
            board.contract_sent.push(job);
        } else if job.call_completed_date.is_some() {
            board.call_done.push(job);
        } else {
            board.engaged.push(job);
        }
    }
    board
}
