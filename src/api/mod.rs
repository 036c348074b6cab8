//! REST API server for Recap.
//!
//! Provides HTTP endpoints for:
//! - Browsing the meeting catalog
//! - Driving the review session (start, answer, reason, submit, retry, reset)
//! - Session status and the generated summary

pub mod error;
pub mod routes;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;

use crate::catalog::MeetingCatalog;
use crate::session::ReviewMachine;

pub use routes::meetings::CatalogState;
pub use routes::session::SessionRouteState;

pub struct ApiServer {
    port: u16,
    catalog_state: CatalogState,
    session_state: SessionRouteState,
}

impl ApiServer {
    pub fn new(catalog: Arc<dyn MeetingCatalog>, machine: Arc<ReviewMachine>, port: u16) -> Self {
        Self {
            port,
            catalog_state: CatalogState { catalog },
            session_state: SessionRouteState { machine },
        }
    }

    pub async fn start(self) -> Result<()> {
        let app = Router::new()
            // Root and version endpoints
            .route("/", get(status))
            .route("/version", get(version))
            // Catalog and session routes
            .merge(routes::meetings::router(self.catalog_state))
            .merge(routes::session::router(self.session_state))
            .layer(ServiceBuilder::new());

        let listener = tokio::net::TcpListener::bind(&format!("127.0.0.1:{}", self.port)).await?;

        info!("API server listening on http://127.0.0.1:{}", self.port);
        info!("Endpoints:");
        info!("  GET  /                - Service info");
        info!("  GET  /version         - Get version info");
        info!("  GET  /meetings        - List meetings");
        info!("  GET  /meetings/:id    - Get single meeting");
        info!("  POST /session/start   - Start reviewing a meeting");
        info!("  POST /session/answer  - Set the yes/no answer for the current task");
        info!("  POST /session/reason  - Set the reason text for the current task");
        info!("  POST /session/submit  - Submit the current task response");
        info!("  POST /session/retry   - Retry summary generation after a failure");
        info!("  POST /session/reset   - Abandon the session");
        info!("  GET  /session/status  - Get session status and summary");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

async fn status() -> Json<Value> {
    Json(json!({
        "service": "recap",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": "recap"
    }))
}
