//! Review session endpoints.
//!
//! The presentation layer forwards user actions here; the machine owns
//! all session state and the summary credential never leaves this
//! process.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::session::{ReviewMachine, SessionState, SubmitOutcome};

use super::super::error::ApiResult;

/// Shared state for session routes.
#[derive(Clone)]
pub struct SessionRouteState {
    pub machine: Arc<ReviewMachine>,
}

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub meeting_id: String,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ReasonRequest {
    pub reason: String,
}

pub fn router(state: SessionRouteState) -> Router {
    Router::new()
        .route("/session/start", post(start_session))
        .route("/session/answer", post(set_answer))
        .route("/session/reason", post(set_reason))
        .route("/session/submit", post(submit_task))
        .route("/session/retry", post(retry_summary))
        .route("/session/reset", post(reset_session))
        .route("/session/status", axum::routing::get(session_status))
        .with_state(state)
}

fn status_json(state: &SessionState) -> Value {
    json!({
        "phase": state.phase.as_str(),
        "meeting_id": state.meeting.as_ref().map(|m| m.id.clone()),
        "task_index": state.task_index,
        "task_count": state.meeting.as_ref().map(|m| m.tasks.len()),
        "current_task": state.current_task(),
        "answered": state.draft_answer.is_some(),
        "responses": state.responses.len(),
        "progress": state.progress(),
        "summary": state.summary,
        "last_error": state.last_error,
    })
}

async fn start_session(
    State(state): State<SessionRouteState>,
    Json(body): Json<StartRequest>,
) -> ApiResult<Json<Value>> {
    info!("Session start requested for meeting {}", body.meeting_id);
    let meeting = state.machine.start(&body.meeting_id).await?;

    Ok(Json(json!({
        "success": true,
        "meeting_id": meeting.id,
        "task_count": meeting.tasks.len(),
        "message": "Review session started",
    })))
}

async fn set_answer(
    State(state): State<SessionRouteState>,
    Json(body): Json<AnswerRequest>,
) -> ApiResult<Json<Value>> {
    state.machine.set_draft_answer(body.completed).await?;
    let snapshot = state.machine.state().await;

    Ok(Json(json!({
        "success": true,
        "progress": snapshot.progress(),
    })))
}

async fn set_reason(
    State(state): State<SessionRouteState>,
    Json(body): Json<ReasonRequest>,
) -> ApiResult<Json<Value>> {
    state.machine.set_draft_reason(body.reason).await?;

    Ok(Json(json!({ "success": true })))
}

async fn submit_task(State(state): State<SessionRouteState>) -> ApiResult<Json<Value>> {
    let outcome = state.machine.submit_current_task().await?;
    let snapshot = state.machine.state().await;

    let message = match outcome {
        SubmitOutcome::NextTask(index) => format!("Response recorded, next task is {}", index + 1),
        SubmitOutcome::SummaryStarted => "All tasks answered, generating summary".to_string(),
    };

    Ok(Json(json!({
        "success": true,
        "message": message,
        "status": status_json(&snapshot),
    })))
}

async fn retry_summary(State(state): State<SessionRouteState>) -> ApiResult<Json<Value>> {
    state.machine.retry_summary().await?;

    Ok(Json(json!({
        "success": true,
        "message": "Summary generation restarted",
    })))
}

async fn reset_session(State(state): State<SessionRouteState>) -> ApiResult<Json<Value>> {
    state.machine.reset().await;

    Ok(Json(json!({
        "success": true,
        "message": "Session reset",
    })))
}

async fn session_status(State(state): State<SessionRouteState>) -> Json<Value> {
    let snapshot = state.machine.state().await;
    Json(status_json(&snapshot))
}
