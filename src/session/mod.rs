//! Review session: the single-user walk-through of a meeting's tasks
//! culminating in a generated summary.

mod review_machine;
mod state;

use thiserror::Error;

use crate::summary::ServiceError;

pub use review_machine::{ReviewMachine, SubmitOutcome};
pub use state::{SessionPhase, SessionState, TaskResponse};

/// Errors surfaced by session operations. All are structured results for
/// the presentation layer; only `ResponseMismatch` indicates a defect.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Requested meeting id not found, or the meeting has no tasks.
    #[error("meeting not reviewable: {0}")]
    InvalidMeeting(String),
    /// Submission attempted without an answer or without reason text.
    /// Recoverable: re-prompt, nothing changed.
    #[error("incomplete response: {0}")]
    IncompleteResponse(&'static str),
    /// Internal invariant violation between responses and task order.
    #[error("task responses do not match the meeting task order")]
    ResponseMismatch,
    /// Operation attempted in a phase where it is not valid.
    #[error("operation not valid while session is {0}")]
    InvalidPhase(&'static str),
    #[error(transparent)]
    Service(#[from] ServiceError),
}
