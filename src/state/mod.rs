//! Shared application state and the domain modules it owns.

pub mod engine;
pub mod game;
pub mod pool;
pub mod rng;

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::AppConfig;

use self::{engine::GameEngine, pool::SongPool, rng::ThreadRandomizer};

/// Shared handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state: the single game engine and the song pool.
///
/// The engine sits behind a mutex so concurrent requests are serialized on
/// one sequential access path instead of racing on the turn state; the pool
/// only needs a read/write lock since draws never mutate it.
pub struct AppState {
    engine: Mutex<GameEngine>,
    pool: RwLock<SongPool>,
}

impl AppState {
    /// Construct the shared state around the configured default song pool.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self {
            engine: Mutex::new(GameEngine::new(Box::new(ThreadRandomizer))),
            pool: RwLock::new(SongPool::new(config.into_default_songs())),
        })
    }

    /// Sequential access path to the game engine.
    pub fn engine(&self) -> &Mutex<GameEngine> {
        &self.engine
    }

    /// Song pool shared between the engine and the pool routes.
    pub fn pool(&self) -> &RwLock<SongPool> {
        &self.pool
    }
}
