//! DTOs for game bootstrap, turn operations, and state snapshots.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::format_system_time,
    state::game::{Game, GameStatus, Song, Team, TimelineEntry},
};

/// Payload used to bootstrap a brand-new game, replacing any existing one.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateGameRequest {
    /// Number of teams, between 1 and 9.
    #[validate(range(min = 1, max = 9, message = "team count must be between 1 and 9"))]
    pub team_count: usize,
    /// Optional display names; missing or empty entries fall back to `Team {n}`.
    #[serde(default)]
    pub team_names: Vec<String>,
    /// Placements needed to win; absent or 0 falls back to 10.
    #[serde(default)]
    pub timeline_goal: Option<u32>,
}

/// Year guess verdict reported by the host.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GuessResultRequest {
    /// Whether the team guessed the release year correctly.
    pub correct: bool,
}

/// Claimed timeline position for the song in play.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceSongRequest {
    /// Index into the team's year sequence; 0 means "before everything" and
    /// anything past the end means "after everything".
    pub position: usize,
}

/// Full song projection, only exposed once the song is revealed or resolved.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SongView {
    /// Pool identifier of the song.
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

/// Reduced projection of a hidden song: enough to play it, nothing that
/// gives the year away.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SongCueView {
    /// Pool identifier of the song.
    pub id: String,
    /// Playback reference.
    pub track_ref: String,
}

/// Song in play as exposed to observers, depending on the reveal flag.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CurrentSongView {
    /// Unrevealed: playback cue only.
    Hidden(SongCueView),
    /// Revealed: the full record.
    Revealed(SongView),
}

impl CurrentSongView {
    /// Project the song in play according to the reveal flag.
    pub fn for_turn(song: &Song, revealed: bool) -> Self {
        if revealed {
            Self::Revealed(song.into())
        } else {
            Self::Hidden(SongCueView {
                id: song.id.clone(),
                track_ref: song.track_ref.clone(),
            })
        }
    }
}

/// A placed song on a team timeline.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TimelineEntryView {
    /// The placed song.
    pub song: SongView,
    /// Position claimed at placement time.
    pub position: usize,
}

/// Public projection of a team.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamView {
    /// One-based team identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Anchor year of the team's timeline.
    pub starting_year: i32,
    /// Placed songs in stored order.
    pub timeline: Vec<TimelineEntryView>,
    /// Number of successful placements.
    pub score: u32,
}

/// Lifecycle status as serialized to clients.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GameStatusView {
    /// Game exists but play has not begun.
    Setup,
    /// Teams are taking turns.
    Playing,
    /// A team reached the timeline goal.
    Finished,
}

/// Public projection of the active game.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GameView {
    /// Game identifier.
    pub id: Uuid,
    /// RFC3339 creation timestamp.
    pub created_at: String,
    /// Participating teams.
    pub teams: Vec<TeamView>,
    /// Index of the team whose turn it is.
    pub current_team_index: usize,
    /// Placements needed to win.
    pub timeline_goal: u32,
    /// Drawn song ids in draw order.
    pub used_song_ids: Vec<String>,
    /// Lifecycle status.
    pub status: GameStatusView,
    /// Winning team id once finished.
    pub winner_id: Option<u32>,
}

/// Response to a game creation request.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateGameResponse {
    /// The freshly created game.
    pub game: GameView,
}

/// Read-only snapshot of the active game and its turn state.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameSnapshotResponse {
    /// The active game.
    pub game: GameView,
    /// The song in play, reduced to a cue while unrevealed.
    pub current_song: Option<CurrentSongView>,
    /// Whether the song in play has been revealed.
    pub song_revealed: bool,
}

/// Response to drawing a song for the current turn: playback data only.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlaySongResponse {
    /// Pool identifier of the drawn song.
    pub song_id: String,
    /// Playback reference of the drawn song.
    pub track_ref: String,
}

/// Response to revealing the song in play.
#[derive(Debug, Serialize, ToSchema)]
pub struct RevealResponse {
    /// The full song record.
    pub song: SongView,
}

/// Response to a guess resolution.
#[derive(Debug, Serialize, ToSchema)]
pub struct GuessResultResponse {
    /// Human-readable outcome description.
    pub message: String,
    /// Present on a wrong guess: the team whose turn it now is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_team: Option<TeamView>,
    /// Present on a right guess: the song awaiting placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song: Option<SongView>,
}

/// Response to a timeline placement attempt.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlacementResponse {
    /// Whether the claimed position respected the year ordering.
    pub valid: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// The song that was in play, now fully exposed.
    pub song: SongView,
    /// Present when the placement won the game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<TeamView>,
    /// Present on a non-winning outcome: the team that placed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamView>,
    /// Present on a non-winning outcome: the team whose turn it now is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_team: Option<TeamView>,
}

/// Acknowledgement of a game reset.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResetResponse {
    /// Human-readable acknowledgement.
    pub message: String,
}

impl From<&Song> for SongView {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id.clone(),
            track_ref: song.track_ref.clone(),
            title: song.title.clone(),
            artist: song.artist.clone(),
            year: song.year,
        }
    }
}

impl From<&TimelineEntry> for TimelineEntryView {
    fn from(entry: &TimelineEntry) -> Self {
        Self {
            song: (&entry.song).into(),
            position: entry.position,
        }
    }
}

impl From<&Team> for TeamView {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            starting_year: team.starting_year,
            timeline: team.timeline.iter().map(Into::into).collect(),
            score: team.score,
        }
    }
}

impl From<GameStatus> for GameStatusView {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Setup => Self::Setup,
            GameStatus::Playing => Self::Playing,
            GameStatus::Finished => Self::Finished,
        }
    }
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            created_at: format_system_time(game.created_at),
            teams: game.teams.iter().map(Into::into).collect(),
            current_team_index: game.current_team_index,
            timeline_goal: game.timeline_goal,
            used_song_ids: game.used_song_ids.iter().cloned().collect(),
            status: game.status.into(),
            winner_id: game.winner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song() -> Song {
        Song {
            id: "42".into(),
            track_ref: "track-42".into(),
            title: "Secret Title".into(),
            artist: "Secret Artist".into(),
            year: 1987,
        }
    }

    #[test]
    fn hidden_song_leaks_no_metadata() {
        let view = CurrentSongView::for_turn(&song(), false);
        let json = serde_json::to_value(&view).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.get("id").unwrap(), "42");
        assert_eq!(object.get("track_ref").unwrap(), "track-42");
        assert!(!object.contains_key("title"));
        assert!(!object.contains_key("artist"));
        assert!(!object.contains_key("year"));
    }

    #[test]
    fn revealed_song_exposes_everything() {
        let view = CurrentSongView::for_turn(&song(), true);
        let json = serde_json::to_value(&view).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.get("title").unwrap(), "Secret Title");
        assert_eq!(object.get("artist").unwrap(), "Secret Artist");
        assert_eq!(object.get("year").unwrap(), 1987);
    }

    #[test]
    fn used_song_ids_serialize_in_draw_order() {
        use indexmap::IndexSet;
        use std::time::SystemTime;
        use uuid::Uuid;

        let mut used = IndexSet::new();
        used.insert("b".to_string());
        used.insert("a".to_string());
        used.insert("c".to_string());

        let game = Game {
            id: Uuid::new_v4(),
            created_at: SystemTime::now(),
            teams: Vec::new(),
            current_team_index: 0,
            timeline_goal: 10,
            used_song_ids: used,
            status: GameStatus::Playing,
            winner_id: None,
        };

        let view: GameView = (&game).into();
        assert_eq!(view.used_song_ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn placement_response_omits_absent_fields() {
        let response = PlacementResponse {
            valid: true,
            message: "Correct placement!".into(),
            song: (&song()).into(),
            winner: None,
            team: None,
            next_team: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("winner"));
        assert!(!object.contains_key("team"));
        assert!(!object.contains_key("next_team"));
    }
}
