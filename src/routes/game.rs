//! Routes driving the game turn protocol.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::game::{
        CreateGameRequest, CreateGameResponse, GameSnapshotResponse, GuessResultRequest,
        GuessResultResponse, PlaceSongRequest, PlacementResponse, PlaySongResponse, ResetResponse,
        RevealResponse,
    },
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes handling the lifecycle and turns of the single active game.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/game", get(get_game))
        .route("/game/create", post(create_game))
        .route("/game/play-song", post(play_song))
        .route("/game/reveal", post(reveal_song))
        .route("/game/guess-result", post(guess_result))
        .route("/game/check-timeline", post(check_timeline))
        .route("/game/reset", post(reset_game))
}

/// Create a fresh game, replacing any existing one.
#[utoipa::path(
    post,
    path = "/game/create",
    tag = "game",
    request_body = CreateGameRequest,
    responses(
        (status = 200, description = "Game created", body = CreateGameResponse),
        (status = 400, description = "Team count out of range")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    Json(payload): Json<CreateGameRequest>,
) -> Result<Json<CreateGameResponse>, AppError> {
    payload.validate()?;
    let response = game_service::create_game(&state, payload).await?;
    Ok(Json(response))
}

/// Current game state; the song in play is reduced to a cue until revealed.
#[utoipa::path(
    get,
    path = "/game",
    tag = "game",
    responses(
        (status = 200, description = "Current game state", body = GameSnapshotResponse),
        (status = 404, description = "No active game")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
) -> Result<Json<GameSnapshotResponse>, AppError> {
    let response = game_service::game_snapshot(&state).await?;
    Ok(Json(response))
}

/// Draw a song for the current turn; only playback data is returned.
#[utoipa::path(
    post,
    path = "/game/play-song",
    tag = "game",
    responses(
        (status = 200, description = "Song drawn", body = PlaySongResponse),
        (status = 404, description = "No active game"),
        (status = 409, description = "No more songs available")
    )
)]
pub async fn play_song(
    State(state): State<SharedState>,
) -> Result<Json<PlaySongResponse>, AppError> {
    let response = game_service::play_song(&state).await?;
    Ok(Json(response))
}

/// Reveal the song in play to all observers.
#[utoipa::path(
    post,
    path = "/game/reveal",
    tag = "game",
    responses(
        (status = 200, description = "Song revealed", body = RevealResponse),
        (status = 409, description = "No song in play")
    )
)]
pub async fn reveal_song(
    State(state): State<SharedState>,
) -> Result<Json<RevealResponse>, AppError> {
    let response = game_service::reveal_song(&state).await?;
    Ok(Json(response))
}

/// Report the year guess verdict for the current turn.
#[utoipa::path(
    post,
    path = "/game/guess-result",
    tag = "game",
    request_body = GuessResultRequest,
    responses(
        (status = 200, description = "Guess resolved", body = GuessResultResponse),
        (status = 409, description = "No song in play")
    )
)]
pub async fn guess_result(
    State(state): State<SharedState>,
    Json(payload): Json<GuessResultRequest>,
) -> Result<Json<GuessResultResponse>, AppError> {
    let response = game_service::resolve_guess(&state, payload).await?;
    Ok(Json(response))
}

/// Validate the claimed timeline position and settle the turn.
#[utoipa::path(
    post,
    path = "/game/check-timeline",
    tag = "game",
    request_body = PlaceSongRequest,
    responses(
        (status = 200, description = "Placement resolved", body = PlacementResponse),
        (status = 409, description = "No song in play")
    )
)]
pub async fn check_timeline(
    State(state): State<SharedState>,
    Json(payload): Json<PlaceSongRequest>,
) -> Result<Json<PlacementResponse>, AppError> {
    let response = game_service::place_song(&state, payload).await?;
    Ok(Json(response))
}

/// Drop the active game and return to the no-game state.
#[utoipa::path(
    post,
    path = "/game/reset",
    tag = "game",
    responses((status = 200, description = "Game reset", body = ResetResponse))
)]
pub async fn reset_game(State(state): State<SharedState>) -> Json<ResetResponse> {
    Json(game_service::reset_game(&state).await)
}
