//! Catalog endpoints.
//!
//! - Listing meetings (GET /meetings)
//! - Getting a specific meeting (GET /meetings/:id)

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::catalog::MeetingCatalog;

use super::super::error::{ApiError, ApiResult};

/// Shared state for catalog routes.
#[derive(Clone)]
pub struct CatalogState {
    pub catalog: Arc<dyn MeetingCatalog>,
}

pub fn router(state: CatalogState) -> Router {
    Router::new()
        .route("/meetings", get(list_meetings))
        .route("/meetings/:id", get(get_meeting))
        .with_state(state)
}

async fn list_meetings(State(state): State<CatalogState>) -> Json<Value> {
    let entries: Vec<Value> = state
        .catalog
        .list_meetings()
        .iter()
        .map(|m| {
            json!({
                "id": m.id,
                "title": m.title,
                "date": m.date,
                "time": m.time,
                "task_count": m.tasks.len(),
            })
        })
        .collect();

    Json(json!({ "meetings": entries }))
}

async fn get_meeting(
    Path(id): Path<String>,
    State(state): State<CatalogState>,
) -> ApiResult<Json<Value>> {
    let meeting = state
        .catalog
        .get_meeting(&id)
        .ok_or_else(|| ApiError::not_found(format!("no meeting with id '{}'", id)))?;

    Ok(Json(json!({
        "id": meeting.id,
        "title": meeting.title,
        "date": meeting.date,
        "time": meeting.time,
        "agenda": meeting.agenda,
        "updates": meeting.updates,
        "decisions": meeting.decisions,
        "next_actions": meeting.next_actions,
        "blockers": meeting.blockers,
        "tasks": meeting.tasks,
    })))
}
