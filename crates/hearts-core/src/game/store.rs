use crate::game::serialization::{PersistenceError, deserialize_game_state, serialize_game_state};
use crate::model::state::GameState;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const STORAGE_KEY: &str = "hearts-game-state";

/// Saved-game slot. Failures never reach the caller: a failed save is logged and dropped, a
/// failed load reads as "no saved game".
pub trait GameStore {
    fn save(&mut self, state: &GameState);
    fn load(&self) -> Option<GameState>;
    fn clear(&mut self);
    fn exists(&self) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn save(&mut self, state: &GameState) {
        match serialize_game_state(state) {
            Ok(json) => self.blob = Some(json),
            Err(err) => tracing::warn!(error = %err, "failed to save game state"),
        }
    }

    fn load(&self) -> Option<GameState> {
        let json = self.blob.as_deref()?;
        decode(json)
    }

    fn clear(&mut self) {
        self.blob = None;
    }

    fn exists(&self) -> bool {
        self.blob.is_some()
    }
}

/// One JSON file per saved game.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/hearts-game-state.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{STORAGE_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, state: &GameState) -> Result<(), PersistenceError> {
        let json = serialize_game_state(state)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl GameStore for FileStore {
    fn save(&mut self, state: &GameState) {
        if let Err(err) = self.write(state) {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to save game state");
        }
    }

    fn load(&self) -> Option<GameState> {
        match fs::read_to_string(&self.path) {
            Ok(json) => decode(&json),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to read saved game");
                None
            }
        }
    }

    fn clear(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to clear saved game")
            }
        }
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }
}

fn decode(json: &str) -> Option<GameState> {
    match deserialize_game_state(json) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::warn!(error = %err, "discarding unreadable saved game");
            None
        }
    }
}
