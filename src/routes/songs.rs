//! Routes managing the song pool.

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::songs::{PoolMutationResponse, PoolSnapshotResponse, ReplacePoolRequest},
    services::pool_service,
    state::SharedState,
};

/// Routes exposing the active song pool and its operator overrides.
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/songs",
        get(get_songs).post(replace_songs).delete(clear_songs),
    )
}

/// Snapshot of the active song pool.
#[utoipa::path(
    get,
    path = "/songs",
    tag = "songs",
    responses((status = 200, description = "Active song pool", body = PoolSnapshotResponse))
)]
pub async fn get_songs(State(state): State<SharedState>) -> Json<PoolSnapshotResponse> {
    Json(pool_service::pool_snapshot(&state).await)
}

/// Replace the operator song pool.
#[utoipa::path(
    post,
    path = "/songs",
    tag = "songs",
    request_body = ReplacePoolRequest,
    responses(
        (status = 200, description = "Pool replaced", body = PoolMutationResponse),
        (status = 400, description = "Malformed song list")
    )
)]
pub async fn replace_songs(
    State(state): State<SharedState>,
    Json(payload): Json<ReplacePoolRequest>,
) -> Json<PoolMutationResponse> {
    Json(pool_service::replace_pool(&state, payload).await)
}

/// Clear the operator pool and fall back to the default catalog.
#[utoipa::path(
    delete,
    path = "/songs",
    tag = "songs",
    responses((status = 200, description = "Pool cleared", body = PoolMutationResponse))
)]
pub async fn clear_songs(State(state): State<SharedState>) -> Json<PoolMutationResponse> {
    Json(pool_service::clear_pool(&state).await)
}
