//! # spit-engine
//!
//! Rule engine for the card game Spit: one human player against a
//! timer-driven scripted opponent.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: The whole board is one `GameState` value. Every
//!    rule operation takes it by reference; nothing is global.
//!
//! 2. **Rendering Is Outside**: The crate exposes a `BoardView` and input
//!    entry points. Drawing cards and wiring clicks is the caller's job.
//!
//! 3. **Scheduler Agnostic**: The AI acts in discrete ticks. A real timer,
//!    a UI loop, or a test harness decides when ticks happen.
//!
//! ## Modules
//!
//! - `core`: Sides, state, actions, events, errors, RNG, configuration
//! - `cards`: Ranks, deck construction, the triangular deal
//! - `zones`: Layouts, spit piles, center piles
//! - `rules`: Legality oracle, turn resolver, `RulesEngine`
//! - `ai`: Opponent policies and headless self-play
//! - `session`: The game driver, input handlers, tick clock, board view

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod ai;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    GameRng,
    Difficulty, SpitConfig,
    SettingsStore, MemorySettings, JsonFileSettings, DIFFICULTY_KEY,
    Action, ActionRecord,
    GameEvent, SPIT_BLOCKED_STATUS,
    SpitError, SettingsError,
    GameState, Selection,
};

pub use crate::cards::{Rank, Deal};

pub use crate::zones::{Layout, Stack, SpitPile, CenterPiles, LAYOUT_STACKS, CENTER_PILES};

pub use crate::rules::{is_valid_move, GameResult, RulesEngine, SpitRules, SpitOutcome};

pub use crate::ai::{GreedyPolicy, RandomPolicy, OpponentPolicy, PlayoutEnd};

pub use crate::session::{Session, BoardView, TickClock};
