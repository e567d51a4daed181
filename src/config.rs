//! Application-level configuration loading, including the default song pool.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::state::game::Song;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/songs.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "CHRONO_BEAT_BACK_CONFIG_PATH";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    default_songs: Vec<Song>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// baked-in default song pool.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        count = config.default_songs.len(),
                        "loaded default song pool from config"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to built-in pool"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in song pool"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to built-in pool"
                );
                Self::default()
            }
        }
    }

    /// Consume the configuration into the default song pool.
    pub fn into_default_songs(self) -> Vec<Song> {
        self.default_songs
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_songs: default_song_pool(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    songs: Vec<RawSong>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let default_songs = value.songs.into_iter().map(Into::into).collect::<Vec<_>>();
        Self { default_songs }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of a single song inside the configuration file.
struct RawSong {
    id: String,
    track_ref: String,
    title: String,
    artist: String,
    year: i32,
}

impl From<RawSong> for Song {
    fn from(value: RawSong) -> Self {
        Self {
            id: value.id,
            track_ref: value.track_ref,
            title: value.title,
            artist: value.artist,
            year: value.year,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in song pool shipped with the binary, spanning the decades the
/// starting-year draw covers.
fn default_song_pool() -> Vec<Song> {
    fn song(id: &str, track_ref: &str, title: &str, artist: &str, year: i32) -> Song {
        Song {
            id: id.into(),
            track_ref: track_ref.into(),
            title: title.into(),
            artist: artist.into(),
            year,
        }
    }

    vec![
        song("1", "3pKkQVLjbrE2YpcVDY5UJr", "Good Vibrations", "The Beach Boys", 1966),
        song("2", "7LVHVU3tWfcxj5aiPFEW4T", "Respect", "Aretha Franklin", 1967),
        song("3", "0aym2LBJBk5V8dsUh6KZST", "Hey Jude", "The Beatles", 1968),
        song("4", "4NqWCNvQPBhMfBHZn1NDGV", "Superstition", "Stevie Wonder", 1972),
        song("5", "6l8GvAyoUZwWDgF1e4822w", "Bohemian Rhapsody", "Queen", 1975),
        song("6", "40riOy7x9W7GXjyGp4pjAv", "Hotel California", "Eagles", 1976),
        song("7", "3mRM4NM8iO7UBqrSigCQFH", "Stayin' Alive", "Bee Gees", 1977),
        song("8", "5ChkMS8OtdzJeqyybCc9R5", "Billie Jean", "Michael Jackson", 1982),
        song("9", "2WfaOiMkCvy7F5fcp2zZ8L", "Take On Me", "a-ha", 1985),
        song("10", "7o2CTH4ctstm8TNelqjb51", "Sweet Child O' Mine", "Guns N' Roses", 1987),
        song("11", "1z3ugFmUKoCzGsI6jdY4Ci", "Like a Prayer", "Madonna", 1989),
        song("12", "5ghIJDpPoe3CfHMGu71E6T", "Smells Like Teen Spirit", "Nirvana", 1991),
        song("13", "1qPbGZqppFwLwcBC1JQ6Vr", "Wonderwall", "Oasis", 1995),
        song("14", "1Je1IMUlBXcx1Fz0WE7oPT", "Wannabe", "Spice Girls", 1996),
        song("15", "3MjUtNVVq3C8Fn0MP3u5jb", "...Baby One More Time", "Britney Spears", 1998),
        song("16", "5IVuqXILoxVWvWEPm82Jxr", "Crazy in Love", "Beyoncé", 2003),
        song("17", "7d8GetVbeLmec2KTUEkdVg", "Mr. Brightside", "The Killers", 2004),
        song("18", "49FYlytm3dAAraYgpoJZux", "Umbrella", "Rihanna", 2007),
        song("19", "1c8gk2PeTE04A1pIDH9YMk", "Rolling in the Deep", "Adele", 2010),
        song("20", "2Foc5Q5nqNiosCNqttzHof", "Get Lucky", "Daft Punk", 2013),
        song("21", "32OlwWuMpZ6b0aN2RZOeMS", "Uptown Funk", "Mark Ronson", 2014),
        song("22", "0VjIjW4GlUZAMYd2vXMi3b", "Blinding Lights", "The Weeknd", 2019),
    ]
}
