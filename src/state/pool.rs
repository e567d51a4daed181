//! Song pool provider: the catalog of songs eligible to be drawn.

use indexmap::IndexSet;

use crate::state::{game::Song, rng::Randomizer};

/// Catalog of playable songs, either the built-in default shipped with the
/// configuration or an operator-supplied replacement.
#[derive(Debug, Clone)]
pub struct SongPool {
    default_songs: Vec<Song>,
    custom_songs: Vec<Song>,
}

impl SongPool {
    /// Build a pool around the configured default catalog.
    pub fn new(default_songs: Vec<Song>) -> Self {
        Self {
            default_songs,
            custom_songs: Vec::new(),
        }
    }

    /// The catalog draws are made from: the operator pool when non-empty,
    /// otherwise the default catalog.
    pub fn active(&self) -> &[Song] {
        if self.custom_songs.is_empty() {
            &self.default_songs
        } else {
            &self.custom_songs
        }
    }

    /// Whether the active catalog is operator-supplied.
    pub fn is_custom(&self) -> bool {
        !self.custom_songs.is_empty()
    }

    /// Replace the operator pool. No validation beyond shape; duplicate ids
    /// are the caller's responsibility.
    pub fn set_custom(&mut self, songs: Vec<Song>) {
        self.custom_songs = songs;
    }

    /// Drop the operator pool and fall back to the default catalog.
    pub fn clear_custom(&mut self) {
        self.custom_songs.clear();
    }

    /// Number of songs in the default catalog.
    pub fn default_len(&self) -> usize {
        self.default_songs.len()
    }

    /// Draw one song uniformly at random among those whose id is not in
    /// `used`, or `None` when every song has been used.
    ///
    /// `used` is never mutated here; marking the drawn song as used belongs
    /// to the caller, atomically with putting the song in play.
    pub fn draw_unused(&self, used: &IndexSet<String>, rng: &mut dyn Randomizer) -> Option<Song> {
        let available: Vec<&Song> = self
            .active()
            .iter()
            .filter(|song| !used.contains(&song.id))
            .collect();

        if available.is_empty() {
            return None;
        }

        Some(available[rng.pick(available.len())].clone())
    }
}
