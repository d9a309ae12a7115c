//! Persisted key/value settings.
//!
//! The game persists exactly one value, the AI difficulty, under
//! [`DIFFICULTY_KEY`]. It is read once when a session starts.
//!
//! Two stores are provided:
//! - `MemorySettings`: in-process map, for tests and embedders
//! - `JsonFileSettings`: a flat JSON object on disk

use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::config::Difficulty;
use super::error::SettingsError;

/// Setting name the difficulty is stored under.
pub const DIFFICULTY_KEY: &str = "spitDifficulty";

/// String key/value storage.
pub trait SettingsStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Read the difficulty from a store, defaulting when missing or invalid.
pub fn load_difficulty(store: &dyn SettingsStore) -> Difficulty {
    let raw = store.get(DIFFICULTY_KEY);
    let difficulty = Difficulty::from_setting(raw.as_deref());
    debug!(%difficulty, "loaded difficulty");
    difficulty
}

/// Store a difficulty.
pub fn save_difficulty(store: &mut dyn SettingsStore, difficulty: Difficulty) -> Result<(), SettingsError> {
    store.set(DIFFICULTY_KEY, &difficulty.to_string())
}

/// In-memory settings.
#[derive(Clone, Debug, Default)]
pub struct MemorySettings {
    values: FxHashMap<String, String>,
}

impl MemorySettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings stored as a flat JSON object of strings.
///
/// The file is read on `open` and rewritten on every `set`. A missing file
/// is treated as empty.
#[derive(Clone, Debug)]
pub struct JsonFileSettings {
    path: PathBuf,
    values: FxHashMap<String, String>,
}

impl JsonFileSettings {
    /// Open (or start) a settings file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FxHashMap::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        let text = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
