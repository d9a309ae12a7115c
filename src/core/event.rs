//! Game events.
//!
//! Every state-changing entry point returns the events it produced, in
//! order. The presentation layer uses them to redraw, show status text and
//! announce the winner.

use serde::{Deserialize, Serialize};

use super::side::Side;
use crate::cards::Rank;
use crate::rules::GameResult;

/// Status text shown when a spit is requested but a spit pile is empty.
pub const SPIT_BLOCKED_STATUS: &str = "Spit piles empty! (Reload to reset)";

/// Something that happened on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A layout card was played onto a center pile.
    Played {
        side: Side,
        stack: usize,
        center: usize,
        rank: Rank,
    },
    /// A layout card moved into an empty stack.
    Relocated {
        side: Side,
        from: usize,
        to: usize,
        rank: Rank,
    },
    /// Both spit piles revealed a card (player's onto center 0, AI's onto 1).
    Spat { player: Rank, ai: Rank },
    /// A spit was requested with an empty spit pile; nothing moved.
    SpitBlocked { status: String },
    /// The player selected a card to move into an empty stack.
    Selected { stack: usize, rank: Rank },
    /// The player cleared their selection by clicking it again.
    Deselected { stack: usize },
    /// The AI found nothing to do this tick.
    Passed { side: Side },
    /// Nobody can move and the spit piles cannot refill the center.
    Stalled,
    /// A layout was cleared.
    GameOver(GameResult),
}

impl GameEvent {
    /// The final result, if this event ended the game.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            GameEvent::GameOver(result) => Some(*result),
            _ => None,
        }
    }
}
