//! DTO for the health endpoint.

use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status, always "ok" (state is in-process only).
    pub status: String,
    /// Whether a game is currently active.
    pub game_active: bool,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(game_active: bool) -> Self {
        Self {
            status: "ok".to_string(),
            game_active,
        }
    }
}
