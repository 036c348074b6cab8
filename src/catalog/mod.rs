//! Meeting catalog: the immutable set of meetings available for review.
//!
//! The catalog is injected as a trait object so tests can substitute
//! fixtures instead of relying on the compiled-in demo data.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod demo;

pub use demo::demo_meetings;

/// One assignable work item attached to a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub assignee: String,
    /// Opaque display string, never parsed for logic.
    pub deadline: String,
    /// Legacy post-review fields carried by some data sources. The review
    /// session never reads or writes these; its answers live in
    /// [`TaskResponse`](crate::session::TaskResponse) instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<TaskAnnotations>,
}

/// Optional pre-recorded review annotations on a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAnnotations {
    pub completed: Option<bool>,
    pub completion_reason: Option<String>,
    pub challenges: Option<String>,
}

/// A static record describing one team meeting and its review tasks.
/// Task order is the review order and is fixed once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub agenda: String,
    pub updates: String,
    pub decisions: String,
    pub next_actions: String,
    pub blockers: String,
    pub tasks: Vec<Task>,
}

/// Read-only provider of meetings.
pub trait MeetingCatalog: Send + Sync {
    /// All meetings, in catalog order.
    fn list_meetings(&self) -> Vec<Arc<Meeting>>;

    /// Look up a single meeting by id.
    fn get_meeting(&self, id: &str) -> Option<Arc<Meeting>>;
}

/// In-memory catalog built once at startup.
pub struct StaticCatalog {
    meetings: Vec<Arc<Meeting>>,
}

impl StaticCatalog {
    pub fn new(meetings: Vec<Meeting>) -> Self {
        Self {
            meetings: meetings.into_iter().map(Arc::new).collect(),
        }
    }

    /// Catalog pre-loaded with the built-in demo meetings.
    pub fn demo() -> Self {
        Self::new(demo_meetings())
    }
}

impl MeetingCatalog for StaticCatalog {
    fn list_meetings(&self) -> Vec<Arc<Meeting>> {
        self.meetings.clone()
    }

    fn get_meeting(&self, id: &str) -> Option<Arc<Meeting>> {
        self.meetings.iter().find(|m| m.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_contents() {
        let catalog = StaticCatalog::demo();
        let meetings = catalog.list_meetings();
        assert_eq!(meetings.len(), 3);
        for meeting in &meetings {
            assert_eq!(meeting.tasks.len(), 3);
        }
    }

    #[test]
    fn test_get_meeting_by_id() {
        let catalog = StaticCatalog::demo();
        let meeting = catalog.get_meeting("1").expect("demo meeting 1 exists");
        assert_eq!(meeting.title, "Sprint Planning - Sept 9");
        assert_eq!(meeting.tasks[0].id, "t1");
    }

    #[test]
    fn test_get_meeting_unknown_id() {
        let catalog = StaticCatalog::demo();
        assert!(catalog.get_meeting("nope").is_none());
    }

    #[test]
    fn test_task_ids_unique_within_meeting() {
        for meeting in StaticCatalog::demo().list_meetings() {
            let mut ids: Vec<&str> = meeting.tasks.iter().map(|t| t.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), meeting.tasks.len());
        }
    }

    #[test]
    fn test_task_deserializes_without_annotations() {
        let json = r#"{"id":"t1","title":"Do it","assignee":"Sam","deadline":"2024-09-12"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.annotations.is_none());
    }
}
