//! Liveness endpoint

use axum::Json;
use axum::extract::State;
use fleet::{ItemStore, MissionLogStore, MoverStore};
use serde_json::{Value, json};

use crate::webserver_impl::WebServer;

/// GET /health
pub async fn health_check<M, I, L>(State(server): State<WebServer<M, I, L>>) -> Json<Value>
where
    M: MoverStore + 'static,
    I: ItemStore + 'static,
    L: MissionLogStore + 'static,
{
    Json(json!({
        "status": "healthy",
        "startedAt": server.state.started_at,
        "uptimeSeconds": server.state.uptime_seconds(),
        "missingItems": server.fleet.config().missing_items,
    }))
}
