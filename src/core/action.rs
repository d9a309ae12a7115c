//! Action representation.
//!
//! Spit has three kinds of move:
//! - play a layout top card onto a center pile
//! - relocate a layout top card into an empty stack
//! - spit: reveal the front of both spit piles onto the center
//!
//! Both the human input handlers and the AI policies express their moves as
//! `Action`s and hand them to the rules engine.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// A single move.
///
/// ```
/// use spit_engine::core::Action;
///
/// let play = Action::Play { stack: 3, center: 0 };
/// assert!(play.is_play());
/// assert!(!Action::Spit.is_play());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the top card of `stack` onto center pile `center`.
    Play { stack: usize, center: usize },
    /// Move the top card of `from` onto the empty stack `to`.
    Relocate { from: usize, to: usize },
    /// Reveal one card from each spit pile onto the center piles.
    Spit,
}

impl Action {
    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self, Action::Play { .. })
    }

    #[must_use]
    pub fn is_relocate(&self) -> bool {
        matches!(self, Action::Relocate { .. })
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging; the history lives only as long as the
/// game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that took this action.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Position in the game's action sequence (starts at 0).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(side: Side, action: Action, sequence: u32) -> Self {
        Self {
            side,
            action,
            sequence,
        }
    }
}
