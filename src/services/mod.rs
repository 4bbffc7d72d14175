//! Business logic for dashboard views and pipeline workflows.
//!
//! The grouping modules are pure: collection of jobs in, named buckets
//! out, with `now` passed explicitly where time matters. The workflow
//! modules orchestrate external calls and store writes.

pub mod advancement;
pub mod approvals;
pub mod closing;
pub mod dashboard;
pub mod follow_ups;
pub mod funnel;
pub mod hot_leads;
