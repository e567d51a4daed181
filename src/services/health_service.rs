//! Health check service.

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with the process health and whether a game is active.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let engine = state.engine().lock().await;
    HealthResponse::ok(engine.game().is_some())
}
