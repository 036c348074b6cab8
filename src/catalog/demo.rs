//! Built-in demo meetings used when no other catalog is supplied.

use super::{Meeting, Task};

fn task(id: &str, title: &str, assignee: &str, deadline: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        assignee: assignee.to_string(),
        deadline: deadline.to_string(),
        annotations: None,
    }
}

pub fn demo_meetings() -> Vec<Meeting> {
    vec![
        Meeting {
            id: "1".to_string(),
            title: "Sprint Planning - Sept 9".to_string(),
            date: "2024-09-09".to_string(),
            time: "10:00 AM".to_string(),
            agenda: "Plan upcoming sprint tasks and review backlog items".to_string(),
            updates: "Completed authentication module and database setup".to_string(),
            decisions: "Decided to implement CI/CD pipeline before next release".to_string(),
            next_actions: "Assign tasks for sprint, setup CI/CD, review login flow".to_string(),
            blockers: "Waiting for API keys from third-party service".to_string(),
            tasks: vec![
                task(
                    "t1",
                    "Implement OAuth login with Google & GitHub",
                    "Sarah",
                    "2024-09-12",
                ),
                task(
                    "t2",
                    "Finalize database schema and run migration scripts",
                    "Mike",
                    "2024-09-10",
                ),
                task(
                    "t3",
                    "Draft initial GitHub Actions pipeline for automated builds",
                    "Alex",
                    "2024-09-15",
                ),
            ],
        },
        Meeting {
            id: "2".to_string(),
            title: "Weekly Sync - Sept 16".to_string(),
            date: "2024-09-16".to_string(),
            time: "2:00 PM".to_string(),
            agenda: "Review progress and discuss upcoming milestones".to_string(),
            updates: "Login system deployed, database optimizations complete".to_string(),
            decisions: "Move mobile app development to next quarter".to_string(),
            next_actions: "Focus on web app features, prepare for user testing".to_string(),
            blockers: "Need design approval for new user dashboard".to_string(),
            tasks: vec![
                task(
                    "t4",
                    "Finalize high-fidelity designs for dashboard widgets",
                    "Emma",
                    "2024-09-18",
                ),
                task(
                    "t5",
                    "Write detailed API reference for authentication & user endpoints",
                    "David",
                    "2024-09-20",
                ),
                task(
                    "t6",
                    "Run load testing with 500 concurrent users",
                    "Lisa",
                    "2024-09-22",
                ),
            ],
        },
        Meeting {
            id: "3".to_string(),
            title: "Product Review - Sept 23".to_string(),
            date: "2024-09-23".to_string(),
            time: "11:30 AM".to_string(),
            agenda: "Demonstrate completed features and gather stakeholder feedback".to_string(),
            updates: "Dashboard implementation finished, user testing completed".to_string(),
            decisions: "Approved go-live date for October 1st".to_string(),
            next_actions: "Final bug fixes, deployment preparation, user training".to_string(),
            blockers: "Server capacity planning needs confirmation".to_string(),
            tasks: vec![
                task("t7", "Fix top 5 critical bugs reported in UAT", "Sarah", "2024-09-28"),
                task(
                    "t8",
                    "Prepare Docker & Kubernetes deployment scripts",
                    "Mike",
                    "2024-09-30",
                ),
                task(
                    "t9",
                    "Create step-by-step training deck for client onboarding",
                    "Emma",
                    "2024-09-29",
                ),
            ],
        },
    ]
}
