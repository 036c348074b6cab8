//! Pure construction of the summary service request.

use serde::Serialize;
use std::fmt::Write;
use thiserror::Error;

use crate::catalog::Meeting;
use crate::session::TaskResponse;

/// Fixed narrative-generation policy sent as the system instruction.
const SYSTEM_PROMPT: &str = "\
You are an assistant that analyzes team meeting notes and task updates.
Generate a professional but easy-to-read summary that includes:
- Meeting agenda, progress, and decisions
- Completed vs incomplete tasks
- Key insights and blockers
- Next action items
Format clearly with markdown sections and keep it concise but realistic.";

/// Structured instruction payload for the narrative-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRequest {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// The responses handed to the builder did not line up with the
/// meeting's task sequence. The session guarantees alignment by
/// construction, so this is a programming defect, not user error.
#[derive(Debug, Error)]
#[error("task responses do not match the meeting task order")]
pub struct ResponseMismatch;

/// Build the request payload from a meeting and its completed review.
///
/// Deterministic and side-effect free: identical inputs always produce
/// an identical request. Requires exactly one response per task, in
/// task order.
pub fn build_summary_request(
    meeting: &Meeting,
    responses: &[TaskResponse],
) -> Result<SummaryRequest, ResponseMismatch> {
    if responses.len() != meeting.tasks.len() {
        return Err(ResponseMismatch);
    }
    for (task, response) in meeting.tasks.iter().zip(responses) {
        if task.id != response.task_id {
            return Err(ResponseMismatch);
        }
    }

    let mut user_prompt = format!(
        "Meeting Title: {}\nAgenda: {}\nUpdates: {}\nDecisions: {}\nBlockers: {}\n\nTasks and Responses:\n",
        meeting.title, meeting.agenda, meeting.updates, meeting.decisions, meeting.blockers
    );

    for (i, (task, response)) in meeting.tasks.iter().zip(responses).enumerate() {
        if i > 0 {
            user_prompt.push('\n');
        }
        let status = if response.completed {
            "Completed"
        } else {
            "Not Completed"
        };
        // Infallible for String targets.
        let _ = write!(
            user_prompt,
            "Task: {} (Assigned to {})\nStatus: {}\nReason: {}\n",
            task.title, task.assignee, status, response.reason
        );
    }

    Ok(SummaryRequest {
        system_prompt: SYSTEM_PROMPT.to_string(),
        user_prompt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{StaticCatalog, MeetingCatalog};

    fn responses_for(meeting: &Meeting) -> Vec<TaskResponse> {
        meeting
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| TaskResponse {
                task_id: task.id.clone(),
                completed: i % 2 == 0,
                reason: format!("note {}", i),
            })
            .collect()
    }

    fn demo_meeting() -> std::sync::Arc<Meeting> {
        StaticCatalog::demo().get_meeting("1").unwrap()
    }

    #[test]
    fn test_builder_is_deterministic() {
        let meeting = demo_meeting();
        let responses = responses_for(&meeting);

        let a = build_summary_request(&meeting, &responses).unwrap();
        let b = build_summary_request(&meeting, &responses).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_contains_tasks_in_order() {
        let meeting = demo_meeting();
        let responses = responses_for(&meeting);

        let request = build_summary_request(&meeting, &responses).unwrap();
        assert!(request.user_prompt.starts_with("Meeting Title: Sprint Planning - Sept 9"));

        let mut last = 0;
        for task in &meeting.tasks {
            let pos = request
                .user_prompt
                .find(&format!("Task: {}", task.title))
                .expect("task present in prompt");
            assert!(pos >= last, "tasks out of order in prompt");
            last = pos;
        }
    }

    #[test]
    fn test_completion_status_wording() {
        let meeting = demo_meeting();
        let responses = responses_for(&meeting);

        let request = build_summary_request(&meeting, &responses).unwrap();
        assert!(request.user_prompt.contains("Status: Completed"));
        assert!(request.user_prompt.contains("Status: Not Completed"));
        assert!(request.user_prompt.contains("Reason: note 1"));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let meeting = demo_meeting();
        let mut responses = responses_for(&meeting);
        responses.pop();

        assert!(build_summary_request(&meeting, &responses).is_err());
    }

    #[test]
    fn test_order_mismatch_rejected() {
        let meeting = demo_meeting();
        let mut responses = responses_for(&meeting);
        responses.swap(0, 1);

        assert!(build_summary_request(&meeting, &responses).is_err());
    }
}
