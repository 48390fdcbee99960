//! Error types for planning operations.

use thiserror::Error;
use wf_core::WfError;

/// Errors that can occur while building a plan.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid profile: {what}")]
    InvalidProfile { what: String },

    #[error(transparent)]
    Core(#[from] WfError),
}

pub type PlanResult<T> = Result<T, PlanError>;
