//! DTOs for the song pool endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::game::SongView, state::game::Song};

/// Song record supplied by the operator when replacing the pool.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SongInput {
    /// Identifier within the pool; duplicates are the operator's responsibility.
    pub id: String,
    /// Playback reference.
    pub track_ref: String,
    /// Song title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
    /// Release year.
    pub year: i32,
}

/// Payload replacing the operator song pool.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplacePoolRequest {
    /// The new operator pool; an empty list falls back to the default pool.
    pub songs: Vec<SongInput>,
}

/// Snapshot of the active song pool.
#[derive(Debug, Serialize, ToSchema)]
pub struct PoolSnapshotResponse {
    /// Every song in the active pool.
    pub songs: Vec<SongView>,
    /// Number of songs in the active pool.
    pub total: usize,
    /// Whether the active pool is operator-supplied.
    pub is_custom: bool,
}

/// Acknowledgement of a pool mutation.
#[derive(Debug, Serialize, ToSchema)]
pub struct PoolMutationResponse {
    /// Human-readable acknowledgement.
    pub message: String,
    /// Number of songs in the pool the system now draws from.
    pub total: usize,
}

impl From<SongInput> for Song {
    fn from(value: SongInput) -> Self {
        Self {
            id: value.id,
            track_ref: value.track_ref,
            title: value.title,
            artist: value.artist,
            year: value.year,
        }
    }
}
