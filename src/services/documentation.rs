//! Aggregated OpenAPI specification.

use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Chrono Beat Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::game::create_game,
        crate::routes::game::get_game,
        crate::routes::game::play_song,
        crate::routes::game::reveal_song,
        crate::routes::game::guess_result,
        crate::routes::game::check_timeline,
        crate::routes::game::reset_game,
        crate::routes::songs::get_songs,
        crate::routes::songs::replace_songs,
        crate::routes::songs::clear_songs,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::game::CreateGameRequest,
            crate::dto::game::CreateGameResponse,
            crate::dto::game::GameSnapshotResponse,
            crate::dto::game::GameView,
            crate::dto::game::TeamView,
            crate::dto::game::TimelineEntryView,
            crate::dto::game::SongView,
            crate::dto::game::SongCueView,
            crate::dto::game::CurrentSongView,
            crate::dto::game::GameStatusView,
            crate::dto::game::PlaySongResponse,
            crate::dto::game::RevealResponse,
            crate::dto::game::GuessResultRequest,
            crate::dto::game::GuessResultResponse,
            crate::dto::game::PlaceSongRequest,
            crate::dto::game::PlacementResponse,
            crate::dto::game::ResetResponse,
            crate::dto::songs::SongInput,
            crate::dto::songs::ReplacePoolRequest,
            crate::dto::songs::PoolSnapshotResponse,
            crate::dto::songs::PoolMutationResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "game", description = "Game lifecycle and turn operations"),
        (name = "songs", description = "Song pool management"),
    )
)]
pub struct ApiDoc;
