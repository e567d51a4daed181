//! Game turn operations: create, snapshot, draw, reveal, guess, place, reset.

use tracing::{debug, info};

use crate::{
    dto::game::{
        CreateGameRequest, CreateGameResponse, CurrentSongView, GameSnapshotResponse,
        GuessResultRequest, GuessResultResponse, PlaceSongRequest, PlacementResponse,
        PlaySongResponse, ResetResponse, RevealResponse,
    },
    error::ServiceError,
    state::{
        SharedState,
        engine::{CreateGameParams, EngineError, GuessOutcome, PlacementOutcome},
    },
};

/// Create a fresh game, replacing any existing one.
pub async fn create_game(
    state: &SharedState,
    request: CreateGameRequest,
) -> Result<CreateGameResponse, ServiceError> {
    let mut engine = state.engine().lock().await;
    let game = engine.create_game(CreateGameParams {
        team_count: request.team_count,
        team_names: request.team_names,
        timeline_goal: request.timeline_goal,
    })?;

    info!(
        game_id = %game.id,
        teams = game.teams.len(),
        goal = game.timeline_goal,
        "created new game"
    );

    Ok(CreateGameResponse { game: game.into() })
}

/// Read-only snapshot of the active game; the song in play is reduced to a
/// playback cue while unrevealed.
pub async fn game_snapshot(state: &SharedState) -> Result<GameSnapshotResponse, ServiceError> {
    let engine = state.engine().lock().await;
    let game = engine.game().ok_or(EngineError::NoActiveGame)?;

    Ok(GameSnapshotResponse {
        game: game.into(),
        current_song: engine
            .current_song()
            .map(|song| CurrentSongView::for_turn(song, engine.song_revealed())),
        song_revealed: engine.song_revealed(),
    })
}

/// Draw an unused song for the current turn. Only playback data leaves the
/// engine here; title, artist, and year stay hidden until the reveal.
pub async fn play_song(state: &SharedState) -> Result<PlaySongResponse, ServiceError> {
    let pool = state.pool().read().await;
    let mut engine = state.engine().lock().await;
    let song = engine.draw_song(&pool)?;

    debug!(song_id = %song.id, "song drawn for current turn");

    Ok(PlaySongResponse {
        song_id: song.id.clone(),
        track_ref: song.track_ref.clone(),
    })
}

/// Reveal the song in play to all observers.
pub async fn reveal_song(state: &SharedState) -> Result<RevealResponse, ServiceError> {
    let mut engine = state.engine().lock().await;
    let song = engine.reveal_song()?;
    Ok(RevealResponse { song: song.into() })
}

/// Resolve the current team's year guess.
pub async fn resolve_guess(
    state: &SharedState,
    request: GuessResultRequest,
) -> Result<GuessResultResponse, ServiceError> {
    let mut engine = state.engine().lock().await;
    match engine.resolve_guess(request.correct)? {
        GuessOutcome::ProceedToPlacement { song } => Ok(GuessResultResponse {
            message: "Correct! Place the song in your timeline".into(),
            next_team: None,
            song: Some((&song).into()),
        }),
        GuessOutcome::NextTeam { next_team } => Ok(GuessResultResponse {
            message: "Incorrect guess, next team's turn".into(),
            next_team: Some((&next_team).into()),
            song: None,
        }),
    }
}

/// Validate the claimed timeline position and settle the turn.
pub async fn place_song(
    state: &SharedState,
    request: PlaceSongRequest,
) -> Result<PlacementResponse, ServiceError> {
    let mut engine = state.engine().lock().await;
    match engine.place_song(request.position)? {
        PlacementOutcome::Win { team, song } => {
            info!(team_id = team.id, team = %team.name, "team reached the timeline goal");
            Ok(PlacementResponse {
                valid: true,
                message: format!("{} wins!", team.name),
                song: (&song).into(),
                winner: Some((&team).into()),
                team: None,
                next_team: None,
            })
        }
        PlacementOutcome::Resolved {
            valid,
            song,
            team,
            next_team,
        } => Ok(PlacementResponse {
            valid,
            message: if valid {
                "Correct placement!"
            } else {
                "Wrong position, song discarded"
            }
            .into(),
            song: (&song).into(),
            winner: None,
            team: Some((&team).into()),
            next_team: Some((&next_team).into()),
        }),
    }
}

/// Drop the active game and return to the no-game state. Always succeeds.
pub async fn reset_game(state: &SharedState) -> ResetResponse {
    let mut engine = state.engine().lock().await;
    engine.reset();
    info!("game reset");
    ResetResponse {
        message: "Game reset".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, state::AppState};

    #[tokio::test]
    async fn full_turn_flow_over_the_service_layer() {
        let state = AppState::new(AppConfig::default());

        let created = create_game(
            &state,
            CreateGameRequest {
                team_count: 2,
                team_names: vec!["Alpha".into(), "Beta".into()],
                timeline_goal: Some(2),
            },
        )
        .await
        .unwrap();
        assert_eq!(created.game.teams.len(), 2);
        assert_eq!(created.game.timeline_goal, 2);

        let cue = play_song(&state).await.unwrap();
        assert!(!cue.song_id.is_empty());

        // Before the reveal the snapshot carries only the playback cue.
        let snapshot = game_snapshot(&state).await.unwrap();
        assert!(!snapshot.song_revealed);
        match snapshot.current_song {
            Some(CurrentSongView::Hidden(cue_view)) => assert_eq!(cue_view.id, cue.song_id),
            other => panic!("expected hidden song, got {other:?}"),
        }

        let revealed = reveal_song(&state).await.unwrap();
        assert_eq!(revealed.song.id, cue.song_id);

        let outcome = resolve_guess(&state, GuessResultRequest { correct: false })
            .await
            .unwrap();
        assert_eq!(outcome.next_team.unwrap().name, "Beta");
        assert!(outcome.song.is_none());

        reset_game(&state).await;
        let err = game_snapshot(&state).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn snapshot_without_game_is_not_found() {
        let state = AppState::new(AppConfig::default());
        assert!(matches!(
            game_snapshot(&state).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(
            play_song(&state).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }
}
