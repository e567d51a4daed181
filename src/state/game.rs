//! Domain types for the single active timeline game.

use std::time::SystemTime;

use indexmap::IndexSet;
use uuid::Uuid;

/// Immutable catalog entry for a playable song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// Stable identifier within the pool.
    pub id: String,
    /// Opaque reference handed to clients for playback.
    pub track_ref: String,
    /// Song title; withheld while the song is in play and unrevealed.
    pub title: String,
    /// Performing artist; withheld while the song is in play and unrevealed.
    pub artist: String,
    /// Release year the teams guess around.
    pub year: i32,
}

/// A song successfully placed on a team's timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    /// The placed song.
    pub song: Song,
    /// Position the team claimed in its year sequence at placement time.
    pub position: usize,
}

/// A participating team and its timeline progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// One-based identifier, stable for the life of the game.
    pub id: u32,
    /// Display name chosen by the host, or a generated default.
    pub name: String,
    /// Anchor year assigned at game creation; never changes afterwards.
    pub starting_year: i32,
    /// Successfully placed songs in validated insertion order.
    pub timeline: Vec<TimelineEntry>,
    /// Count of successful placements; never decreases.
    pub score: u32,
}

impl Team {
    /// Year sequence placements are validated against: the starting year
    /// followed by the years of the placed songs in timeline order.
    pub fn year_sequence(&self) -> Vec<i32> {
        let mut years = Vec::with_capacity(self.timeline.len() + 1);
        years.push(self.starting_year);
        years.extend(self.timeline.iter().map(|entry| entry.song.year));
        years
    }
}

/// Lifecycle status of the active game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game exists but play has not begun.
    Setup,
    /// Teams are taking turns.
    Playing,
    /// A team reached the timeline goal.
    Finished,
}

/// The single active game.
#[derive(Debug, Clone)]
pub struct Game {
    /// Primary identifier of this game.
    pub id: Uuid,
    /// Creation timestamp for auditing/debugging.
    pub created_at: SystemTime,
    /// Participating teams, fixed at creation.
    pub teams: Vec<Team>,
    /// Index into `teams` of the team whose turn it is.
    pub current_team_index: usize,
    /// Number of placements a team needs to win.
    pub timeline_goal: u32,
    /// Ids of songs drawn during this game, in draw order.
    pub used_song_ids: IndexSet<String>,
    /// Current lifecycle status.
    pub status: GameStatus,
    /// Identifier of the winning team once the game is finished.
    pub winner_id: Option<u32>,
}

impl Game {
    /// The team whose turn it currently is.
    pub fn current_team(&self) -> &Team {
        &self.teams[self.current_team_index]
    }
}
