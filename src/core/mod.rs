//! Core engine types: sides, state, actions, events, RNG, configuration.

pub mod side;
pub mod rng;
pub mod config;
pub mod settings;
pub mod action;
pub mod event;
pub mod error;
pub mod state;

pub use side::{Side, SideMap};
pub use rng::GameRng;
pub use config::{Difficulty, SpitConfig};
pub use settings::{load_difficulty, save_difficulty, JsonFileSettings, MemorySettings, SettingsStore, DIFFICULTY_KEY};
pub use action::{Action, ActionRecord};
pub use event::{GameEvent, SPIT_BLOCKED_STATUS};
pub use error::{SettingsError, SpitError};
pub use state::{GameState, Selection};
