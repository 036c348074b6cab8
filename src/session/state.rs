//! Session state types shared between the machine and its drivers.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::{Meeting, Task};

/// Phase of a review session.
///
/// Completion of the final task transitions straight into `Summarizing`;
/// the collected responses stay on the state through every later phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Summarizing,
    Summarized,
    Failed,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Summarizing => "summarizing",
            Self::Summarized => "summarized",
            Self::Failed => "failed",
        }
    }
}

/// The user's completion judgment plus rationale for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task_id: String,
    pub completed: bool,
    pub reason: String,
}

/// Snapshot of the active review session.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub meeting: Option<Arc<Meeting>>,
    /// Index of the task currently being answered. Always refers to
    /// `meeting.tasks[task_index]` while in progress.
    pub task_index: usize,
    pub draft_answer: Option<bool>,
    pub draft_reason: String,
    /// One response per task, in task order.
    pub responses: Vec<TaskResponse>,
    pub summary: Option<String>,
    pub last_error: Option<String>,
    /// Tags each summarization attempt so late results from a reset or
    /// superseded attempt are discarded.
    pub generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::NotStarted,
            meeting: None,
            task_index: 0,
            draft_answer: None,
            draft_reason: String::new(),
            responses: Vec::new(),
            summary: None,
            last_error: None,
            generation: 0,
        }
    }
}

impl SessionState {
    /// The task currently up for review.
    pub fn current_task(&self) -> Option<&Task> {
        self.meeting
            .as_ref()
            .and_then(|m| m.tasks.get(self.task_index))
    }

    /// Completion fraction for progress display. An answered but not yet
    /// submitted task counts for half.
    pub fn progress(&self) -> f64 {
        match self.phase {
            SessionPhase::NotStarted => 0.0,
            SessionPhase::InProgress => {
                let count = self
                    .meeting
                    .as_ref()
                    .map(|m| m.tasks.len())
                    .unwrap_or_default();
                if count == 0 {
                    return 0.0;
                }
                let half = if self.draft_answer.is_some() { 0.5 } else { 0.0 };
                (self.task_index as f64 + half) / count as f64
            }
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MeetingCatalog, StaticCatalog};

    #[test]
    fn test_phase_as_str() {
        assert_eq!(SessionPhase::NotStarted.as_str(), "not_started");
        assert_eq!(SessionPhase::InProgress.as_str(), "in_progress");
        assert_eq!(SessionPhase::Summarizing.as_str(), "summarizing");
        assert_eq!(SessionPhase::Summarized.as_str(), "summarized");
        assert_eq!(SessionPhase::Failed.as_str(), "failed");
    }

    #[test]
    fn test_phase_serialization() {
        let json = serde_json::to_string(&SessionPhase::Summarizing).unwrap();
        assert_eq!(json, "\"summarizing\"");

        let parsed: SessionPhase = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(parsed, SessionPhase::Failed);
    }

    #[test]
    fn test_state_default() {
        let state = SessionState::default();
        assert_eq!(state.phase, SessionPhase::NotStarted);
        assert!(state.meeting.is_none());
        assert_eq!(state.task_index, 0);
        assert!(state.draft_answer.is_none());
        assert!(state.responses.is_empty());
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_progress_half_credit() {
        let meeting = StaticCatalog::demo().get_meeting("1").unwrap();
        let mut state = SessionState {
            phase: SessionPhase::InProgress,
            meeting: Some(meeting),
            task_index: 1,
            ..SessionState::default()
        };
        assert_eq!(state.progress(), 1.0 / 3.0);

        state.draft_answer = Some(true);
        assert_eq!(state.progress(), 1.5 / 3.0);
    }

    #[test]
    fn test_progress_terminal_phases() {
        for phase in [
            SessionPhase::Summarizing,
            SessionPhase::Summarized,
            SessionPhase::Failed,
        ] {
            let state = SessionState {
                phase,
                ..SessionState::default()
            };
            assert_eq!(state.progress(), 1.0);
        }
    }
}
