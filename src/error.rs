//! Crate-level error taxonomy for pipeline workflows.
//!
//! Four classes of failure, mirrored from the workflow contracts:
//! - degraded fields never surface here at all (the record mapper resolves
//!   them to `None`);
//! - `NoProgression` — advancing a stage with no transition-table entry;
//! - structured external failures — the build service returned a
//!   machine-readable `code` callers can branch on;
//! - generic external failures — message only, no code.
//!
//! Nothing retries. Every workflow is single-attempt and reports upward.

use thiserror::Error;

use crate::ai::DraftError;
use crate::build_service::BuildServiceError;
use crate::store::client::StoreError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no progression defined for stage: {stage}")]
    NoProgression { stage: &'static str },

    #[error("job {id} has unrecognized stage token: {value:?}")]
    UnrecognizedStage { id: String, value: String },

    #[error("record store error: {0}")]
    Store(#[from] StoreError),

    #[error("build service error: {0}")]
    BuildService(#[from] BuildServiceError),

    #[error("draft error: {0}")]
    Draft(#[from] DraftError),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PipelineError {
    /// Machine-readable failure code, present only for structured
    /// build-service failures. Callers branch on this instead of
    /// string-matching messages.
    pub fn code(&self) -> Option<&str> {
        match self {
            PipelineError::BuildService(BuildServiceError::Api { code, .. }) => code.as_deref(),
            _ => None,
        }
    }
}
