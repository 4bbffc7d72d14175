//! Dealflow pipeline core: stage state machine, classification engine,
//! and the approval/advancement workflows.
//!
//! The record store is external and authoritative; this crate reads it
//! through filtered queries, classifies the snapshot into view-ready
//! buckets, and writes back only through the two workflows.

pub mod ai;
pub mod build_service;
pub mod config;
pub mod drafts;
pub mod error;
pub mod record;
pub mod services;
pub mod stage;
pub mod state;
pub mod store;
pub mod types;
pub mod urgency;

pub use error::PipelineError;
pub use state::AppState;
