//! Hot-lead board: jobs whose client response signals strong interest.

use serde::Serialize;

use crate::stage::ResponseType;
use crate::types::Job;

/// Hot leads partitioned by response strength.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotLeadBoard {
    pub shortlist: Vec<Job>,
    pub interview: Vec<Job>,
    pub hire: Vec<Job>,
}

/// Partition jobs by response type. Shortlist/Interview/Hire land in
/// their bucket; any other response type, or none, is dropped from every
/// bucket.
pub fn group_hot_leads(jobs: Vec<Job>) -> HotLeadBoard {
    let mut board = HotLeadBoard::default();
    for job in jobs {
        match job.response_type {
            Some(ResponseType::Shortlist) => board.shortlist.push(job),
            Some(ResponseType::Interview) => board.interview.push(job),
            Some(ResponseType::Hire) => board.hire.push(job),
            _ => {}
        }
    }
    board
}
