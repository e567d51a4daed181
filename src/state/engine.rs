//! Turn state machine for the timeline game.
//!
//! One engine instance owns the single active game and drives the turn
//! protocol: draw a hidden song, reveal it, resolve the year guess, validate
//! the timeline placement, then advance the turn or declare a winner.

use std::time::SystemTime;

use indexmap::IndexSet;
use thiserror::Error;
use uuid::Uuid;

use crate::state::{
    game::{Game, GameStatus, Song, Team, TimelineEntry},
    pool::SongPool,
    rng::Randomizer,
};

/// Decade anchors the starting-year draw picks from.
const DECADE_ANCHORS: [i32; 6] = [1960, 1970, 1980, 1990, 2000, 2010];
/// Placements needed to win when the host does not set a goal.
const DEFAULT_TIMELINE_GOAL: u32 = 10;
/// Minimum number of teams in a game.
pub const MIN_TEAMS: usize = 1;
/// Maximum number of teams in a game.
pub const MAX_TEAMS: usize = 9;

/// Errors surfaced by engine operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Requested team count is outside the supported range.
    #[error("team count must be between {MIN_TEAMS} and {MAX_TEAMS} (got {0})")]
    TeamCountOutOfRange(usize),
    /// An operation required an active game and none exists.
    #[error("no active game")]
    NoActiveGame,
    /// An operation required a turn with a song in play and there is none.
    #[error("no active turn")]
    NoActiveTurn,
    /// Every song in the active pool has already been drawn.
    #[error("no more songs available")]
    PoolExhausted,
}

/// Parameters accepted by [`GameEngine::create_game`].
#[derive(Debug, Default)]
pub struct CreateGameParams {
    /// Number of teams to create, between [`MIN_TEAMS`] and [`MAX_TEAMS`].
    pub team_count: usize,
    /// Display names; missing or empty entries fall back to `Team {n}`.
    pub team_names: Vec<String>,
    /// Placements needed to win; `None` or `Some(0)` falls back to the
    /// default goal of 10.
    pub timeline_goal: Option<u32>,
}

/// Outcome of resolving a year guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was right; the team must now place the song.
    ProceedToPlacement {
        /// The song awaiting placement, fully exposable.
        song: Song,
    },
    /// The guess was wrong; the song is discarded and play moves on.
    NextTeam {
        /// The team whose turn it now is.
        next_team: Team,
    },
}

/// Outcome of a timeline placement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The placement reached the timeline goal and ends the game.
    Win {
        /// The winning team, including the placed song on its timeline.
        team: Team,
        /// The song that sealed the win.
        song: Song,
    },
    /// The turn is over; play moves to the next team.
    Resolved {
        /// Whether the claimed position respected the year ordering.
        valid: bool,
        /// The song that was in play, now safe to expose fully.
        song: Song,
        /// The team that attempted the placement.
        team: Team,
        /// The team whose turn it now is.
        next_team: Team,
    },
}

/// Single-game turn state machine.
///
/// All mutation goes through one engine instance; callers serialize access
/// (the HTTP shell keeps it behind a mutex) so concurrent requests cannot
/// race on the turn pointer or the used-song set.
pub struct GameEngine {
    game: Option<Game>,
    current_song: Option<Song>,
    song_revealed: bool,
    rng: Box<dyn Randomizer>,
}

impl GameEngine {
    /// Build an engine with no active game, drawing randomness from `rng`.
    pub fn new(rng: Box<dyn Randomizer>) -> Self {
        Self {
            game: None,
            current_song: None,
            song_revealed: false,
            rng,
        }
    }

    /// The active game, if any.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// The song currently in play, if any.
    pub fn current_song(&self) -> Option<&Song> {
        self.current_song.as_ref()
    }

    /// Whether the song in play has been revealed to all observers.
    pub fn song_revealed(&self) -> bool {
        self.song_revealed
    }

    /// Replace any existing game with a freshly created one.
    ///
    /// Each team gets an independently randomized starting year: a decade
    /// anchor from [`DECADE_ANCHORS`] plus an offset in `[0, 9]`. The
    /// two-stage draw is deliberate; it weighs every decade equally.
    pub fn create_game(&mut self, params: CreateGameParams) -> Result<&Game, EngineError> {
        let CreateGameParams {
            team_count,
            team_names,
            timeline_goal,
        } = params;

        if !(MIN_TEAMS..=MAX_TEAMS).contains(&team_count) {
            return Err(EngineError::TeamCountOutOfRange(team_count));
        }

        let mut teams = Vec::with_capacity(team_count);
        for index in 0..team_count {
            let name = team_names
                .get(index)
                .filter(|name| !name.is_empty())
                .cloned()
                .unwrap_or_else(|| format!("Team {}", index + 1));

            teams.push(Team {
                id: index as u32 + 1,
                name,
                starting_year: self.random_starting_year(),
                timeline: Vec::new(),
                score: 0,
            });
        }

        let game = Game {
            id: Uuid::new_v4(),
            created_at: SystemTime::now(),
            teams,
            current_team_index: 0,
            timeline_goal: timeline_goal
                .filter(|goal| *goal != 0)
                .unwrap_or(DEFAULT_TIMELINE_GOAL),
            used_song_ids: IndexSet::new(),
            status: GameStatus::Playing,
            winner_id: None,
        };

        self.current_song = None;
        self.song_revealed = false;
        Ok(self.game.insert(game))
    }

    /// Draw an unused song from `pool` and put it in play, hidden.
    ///
    /// The song id joins the used set in the same step, so the same id can
    /// never be drawn twice even across back-to-back calls.
    pub fn draw_song(&mut self, pool: &SongPool) -> Result<&Song, EngineError> {
        let game = self.game.as_mut().ok_or(EngineError::NoActiveGame)?;

        let song = pool
            .draw_unused(&game.used_song_ids, self.rng.as_mut())
            .ok_or(EngineError::PoolExhausted)?;

        game.used_song_ids.insert(song.id.clone());
        self.song_revealed = false;
        Ok(self.current_song.insert(song))
    }

    /// Expose the song in play. Revealing an already revealed song is a
    /// no-op, not an error.
    pub fn reveal_song(&mut self) -> Result<&Song, EngineError> {
        let song = self.current_song.as_ref().ok_or(EngineError::NoActiveTurn)?;
        self.song_revealed = true;
        Ok(song)
    }

    /// Resolve the current team's year guess.
    ///
    /// A wrong guess discards the song (it is not returned to the pool) and
    /// advances the turn. A right guess changes nothing yet; the subsequent
    /// placement call settles the turn.
    pub fn resolve_guess(&mut self, correct: bool) -> Result<GuessOutcome, EngineError> {
        let Some(song) = self.current_song.clone() else {
            return Err(EngineError::NoActiveTurn);
        };
        let Some(game) = self.game.as_mut() else {
            return Err(EngineError::NoActiveTurn);
        };

        if correct {
            return Ok(GuessOutcome::ProceedToPlacement { song });
        }

        game.current_team_index = (game.current_team_index + 1) % game.teams.len();
        let next_team = game.teams[game.current_team_index].clone();
        self.current_song = None;
        self.song_revealed = false;

        Ok(GuessOutcome::NextTeam { next_team })
    }

    /// Validate the claimed timeline position for the song in play.
    ///
    /// `position` indexes the current team's year sequence (starting year
    /// plus placed songs): 0 claims "before everything", anything past the
    /// end claims "after everything", and a middle position claims a slot
    /// between two neighbours. Equal years on a boundary count as valid.
    ///
    /// A valid placement scores one point and may win the game; on the
    /// winning move the turn pointer and the song in play are left untouched.
    /// Any non-winning outcome, valid or not, ends the turn.
    pub fn place_song(&mut self, position: usize) -> Result<PlacementOutcome, EngineError> {
        let Some(song) = self.current_song.clone() else {
            return Err(EngineError::NoActiveTurn);
        };
        let Some(game) = self.game.as_mut() else {
            return Err(EngineError::NoActiveTurn);
        };

        let goal = game.timeline_goal;
        let team_index = game.current_team_index;
        let team = &mut game.teams[team_index];
        let years = team.year_sequence();

        let valid = if position == 0 {
            song.year <= years[0]
        } else if position >= years.len() {
            song.year >= years[years.len() - 1]
        } else {
            years[position - 1] <= song.year && song.year <= years[position]
        };

        if valid {
            // Requested positions 0 and 1 both land at the front of the
            // stored timeline; clients tell them apart via `position`.
            let insert_at = position.saturating_sub(1).min(team.timeline.len());
            team.timeline.insert(
                insert_at,
                TimelineEntry {
                    song: song.clone(),
                    position,
                },
            );
            team.score += 1;

            if team.score >= goal {
                let winner = team.clone();
                game.status = GameStatus::Finished;
                game.winner_id = Some(winner.id);
                // The turn pointer and the song in play stay put on the
                // winning move.
                return Ok(PlacementOutcome::Win { team: winner, song });
            }
        }

        let team = game.teams[team_index].clone();
        game.current_team_index = (team_index + 1) % game.teams.len();
        let next_team = game.teams[game.current_team_index].clone();
        self.current_song = None;
        self.song_revealed = false;

        Ok(PlacementOutcome::Resolved {
            valid,
            song,
            team,
            next_team,
        })
    }

    /// Drop any active game and return to the no-game state. Always succeeds.
    pub fn reset(&mut self) {
        self.game = None;
        self.current_song = None;
        self.song_revealed = false;
    }

    fn random_starting_year(&mut self) -> i32 {
        let decade = DECADE_ANCHORS[self.rng.pick(DECADE_ANCHORS.len())];
        decade + self.rng.pick(10) as i32
    }
}
