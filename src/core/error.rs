//! Error types.
//!
//! `SpitError` covers caller mistakes against the rule engine: indices out
//! of range, moves from empty stacks, and input after the game has ended.
//! Illegal rank placements are not errors; policies check legality before
//! asking the resolver to move anything.

use thiserror::Error;

use super::side::Side;
use crate::rules::GameResult;

/// Errors returned by rule engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpitError {
    #[error("stack index {index} out of range (layouts have {max} stacks)")]
    StackOutOfRange { index: usize, max: usize },

    #[error("center pile index {index} out of range (there are {max} center piles)")]
    CenterOutOfRange { index: usize, max: usize },

    #[error("{side} stack {stack} is empty")]
    EmptyStack { side: Side, stack: usize },

    #[error("{side} stack {stack} is not empty")]
    TargetNotEmpty { side: Side, stack: usize },

    #[error("cannot relocate stack {stack} onto itself")]
    SameStack { stack: usize },

    #[error("invalid rank {0} (expected 1..=13)")]
    InvalidRank(u8),

    #[error("game is over: {0}")]
    GameOver(GameResult),
}

/// Errors from the settings store.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is not a valid JSON object: {0}")]
    Json(#[from] serde_json::Error),
}
