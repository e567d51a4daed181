//! Song pool management: snapshot, replace, clear.

use tracing::info;

use crate::{
    dto::songs::{PoolMutationResponse, PoolSnapshotResponse, ReplacePoolRequest},
    state::{SharedState, game::Song},
};

/// Snapshot of the active pool (operator pool when set, default otherwise).
pub async fn pool_snapshot(state: &SharedState) -> PoolSnapshotResponse {
    let pool = state.pool().read().await;
    let songs: Vec<_> = pool.active().iter().map(Into::into).collect();

    PoolSnapshotResponse {
        total: songs.len(),
        songs,
        is_custom: pool.is_custom(),
    }
}

/// Replace the operator pool with the supplied songs.
pub async fn replace_pool(
    state: &SharedState,
    request: ReplacePoolRequest,
) -> PoolMutationResponse {
    let songs: Vec<Song> = request.songs.into_iter().map(Into::into).collect();
    let total = songs.len();

    let mut pool = state.pool().write().await;
    pool.set_custom(songs);
    info!(total, "operator song pool replaced");

    PoolMutationResponse {
        message: "Song pool updated".into(),
        total,
    }
}

/// Clear the operator pool and fall back to the default catalog.
pub async fn clear_pool(state: &SharedState) -> PoolMutationResponse {
    let mut pool = state.pool().write().await;
    pool.clear_custom();
    info!("operator song pool cleared");

    PoolMutationResponse {
        message: "Custom songs cleared, using default pool".into(),
        total: pool.default_len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, dto::songs::SongInput, state::AppState};

    #[tokio::test]
    async fn replace_and_clear_round_trip() {
        let state = AppState::new(AppConfig::default());
        let default_total = pool_snapshot(&state).await.total;
        assert!(default_total > 0);

        let replaced = replace_pool(
            &state,
            ReplacePoolRequest {
                songs: vec![SongInput {
                    id: "x".into(),
                    track_ref: "track-x".into(),
                    title: "X".into(),
                    artist: "Y".into(),
                    year: 1999,
                }],
            },
        )
        .await;
        assert_eq!(replaced.total, 1);

        let snapshot = pool_snapshot(&state).await;
        assert!(snapshot.is_custom);
        assert_eq!(snapshot.total, 1);

        let cleared = clear_pool(&state).await;
        assert_eq!(cleared.total, default_total);
        assert!(!pool_snapshot(&state).await.is_custom);
    }
}
