//! Review session orchestrator.
//!
//! Drives a single meeting through
//! start → per-task answer/reason/submit → summarize → done.
//!
//! All dependencies are injected via constructor — no concrete types
//! hardcoded. Exactly one session is active per machine; `reset` is the
//! only cancellation mechanism and bumps the generation counter so a
//! late summary result cannot resurrect an abandoned session.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::catalog::{Meeting, MeetingCatalog};
use crate::summary::{build_summary_request, Summarizer};

use super::state::{SessionPhase, SessionState, TaskResponse};
use super::ReviewError;

/// Result of submitting the current task's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// More tasks remain; the index now points at the given task.
    NextTask(usize),
    /// All tasks answered; summary generation has started.
    SummaryStarted,
}

pub struct ReviewMachine {
    catalog: Arc<dyn MeetingCatalog>,
    summarizer: Arc<Summarizer>,
    state: Arc<Mutex<SessionState>>,
}

impl ReviewMachine {
    pub fn new(catalog: Arc<dyn MeetingCatalog>, summarizer: Arc<Summarizer>) -> Self {
        Self {
            catalog,
            summarizer,
            state: Arc::new(Mutex::new(SessionState::default())),
        }
    }

    /// Snapshot of the current session state.
    pub async fn state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Begin reviewing a meeting. Only valid from `NotStarted`.
    pub async fn start(&self, meeting_id: &str) -> Result<Arc<Meeting>, ReviewError> {
        let mut state = self.state.lock().await;
        if state.phase != SessionPhase::NotStarted {
            return Err(ReviewError::InvalidPhase(state.phase.as_str()));
        }

        let meeting = self.catalog.get_meeting(meeting_id).ok_or_else(|| {
            ReviewError::InvalidMeeting(format!("no meeting with id '{}'", meeting_id))
        })?;

        // A review collects one response per task; a meeting with none
        // has nothing to review.
        if meeting.tasks.is_empty() {
            return Err(ReviewError::InvalidMeeting(format!(
                "meeting '{}' has no tasks",
                meeting_id
            )));
        }

        info!(
            "Review session started for meeting {} ({} tasks)",
            meeting.id,
            meeting.tasks.len()
        );

        let generation = state.generation;
        *state = SessionState {
            phase: SessionPhase::InProgress,
            meeting: Some(meeting.clone()),
            generation,
            ..SessionState::default()
        };

        Ok(meeting)
    }

    /// Record the yes/no answer for the current task. May be called any
    /// number of times before submission; does not advance the index.
    pub async fn set_draft_answer(&self, completed: bool) -> Result<(), ReviewError> {
        let mut state = self.state.lock().await;
        if state.phase != SessionPhase::InProgress {
            return Err(ReviewError::InvalidPhase(state.phase.as_str()));
        }
        state.draft_answer = Some(completed);
        Ok(())
    }

    /// Update the free-form reason text for the current task.
    pub async fn set_draft_reason(&self, reason: impl Into<String>) -> Result<(), ReviewError> {
        let mut state = self.state.lock().await;
        if state.phase != SessionPhase::InProgress {
            return Err(ReviewError::InvalidPhase(state.phase.as_str()));
        }
        state.draft_reason = reason.into();
        Ok(())
    }

    /// Submit the drafted response for the current task.
    ///
    /// Requires a chosen answer and a non-blank reason; otherwise fails
    /// with `IncompleteResponse` and leaves the session untouched. The
    /// final submission kicks off summary generation in the background.
    pub async fn submit_current_task(&self) -> Result<SubmitOutcome, ReviewError> {
        let mut state = self.state.lock().await;
        if state.phase != SessionPhase::InProgress {
            return Err(ReviewError::InvalidPhase(state.phase.as_str()));
        }

        let meeting = state
            .meeting
            .clone()
            .ok_or(ReviewError::InvalidPhase("not_started"))?;

        let completed = state
            .draft_answer
            .ok_or(ReviewError::IncompleteResponse("no completion answer chosen"))?;

        let reason = state.draft_reason.trim().to_string();
        if reason.is_empty() {
            return Err(ReviewError::IncompleteResponse("reason text is empty"));
        }

        let task = meeting
            .tasks
            .get(state.task_index)
            .ok_or(ReviewError::ResponseMismatch)?;

        state.responses.push(TaskResponse {
            task_id: task.id.clone(),
            completed,
            reason,
        });
        state.draft_answer = None;
        state.draft_reason.clear();

        if state.task_index + 1 < meeting.tasks.len() {
            state.task_index += 1;
            debug!(
                "Task {} submitted for meeting {}, advancing to task {}",
                task.id, meeting.id, state.task_index
            );
            return Ok(SubmitOutcome::NextTask(state.task_index));
        }

        info!(
            "All {} tasks answered for meeting {}, generating summary",
            meeting.tasks.len(),
            meeting.id
        );

        state.phase = SessionPhase::Summarizing;
        state.generation += 1;
        let responses = state.responses.clone();
        let generation = state.generation;
        drop(state);

        self.spawn_summarize(meeting, responses, generation);
        Ok(SubmitOutcome::SummaryStarted)
    }

    /// Re-run summary generation after a service failure. The responses
    /// collected before the failure are reused as-is.
    pub async fn retry_summary(&self) -> Result<(), ReviewError> {
        let mut state = self.state.lock().await;
        if state.phase != SessionPhase::Failed {
            return Err(ReviewError::InvalidPhase(state.phase.as_str()));
        }

        let meeting = state
            .meeting
            .clone()
            .ok_or(ReviewError::InvalidPhase("not_started"))?;

        if state.responses.len() != meeting.tasks.len() {
            return Err(ReviewError::ResponseMismatch);
        }

        info!("Retrying summary generation for meeting {}", meeting.id);

        state.phase = SessionPhase::Summarizing;
        state.generation += 1;
        state.last_error = None;
        let responses = state.responses.clone();
        let generation = state.generation;
        drop(state);

        self.spawn_summarize(meeting, responses, generation);
        Ok(())
    }

    /// Abandon the session from any phase, discarding all drafts and
    /// responses. A summarization still in flight becomes stale.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        info!("Review session reset from phase {}", state.phase.as_str());
        *state = SessionState {
            generation: state.generation + 1,
            ..SessionState::default()
        };
    }

    fn spawn_summarize(&self, meeting: Arc<Meeting>, responses: Vec<TaskResponse>, generation: u64) {
        let state = self.state.clone();
        let summarizer = self.summarizer.clone();

        tokio::spawn(async move {
            let request = match build_summary_request(&meeting, &responses) {
                Ok(request) => request,
                Err(e) => {
                    // Contract violation: the machine produced responses
                    // out of step with the task order. Abort the session.
                    error!(
                        "Summary request rejected for meeting {}: {}",
                        meeting.id, e
                    );
                    let mut state = state.lock().await;
                    if state.generation == generation {
                        state.phase = SessionPhase::Failed;
                        state.last_error = Some(e.to_string());
                    }
                    return;
                }
            };

            let result = summarizer.generate(&request).await;

            let mut state = state.lock().await;
            if state.generation != generation || state.phase != SessionPhase::Summarizing {
                debug!(
                    "Discarding summary result for stale generation {} (now {})",
                    generation, state.generation
                );
                return;
            }

            match result {
                Ok(text) => {
                    info!(
                        "Summary ready for meeting {}: {} chars",
                        meeting.id,
                        text.len()
                    );
                    state.phase = SessionPhase::Summarized;
                    state.summary = Some(text);
                }
                Err(e) => {
                    error!("Summary generation failed for meeting {}: {}", meeting.id, e);
                    state.phase = SessionPhase::Failed;
                    state.last_error = Some(e.to_string());
                }
            }
        });
    }
}
