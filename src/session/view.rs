//! Read-only board projection for the render layer.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::core::{GameState, Selection, Side};
use crate::rules::GameResult;
use crate::zones::{Layout, CENTER_PILES};

/// Everything a renderer needs to draw the table.
///
/// Stacks list cards bottom first; only the last card of each stack is
/// face-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub player_layout: Vec<Vec<Rank>>,
    pub ai_layout: Vec<Vec<Rank>>,
    pub player_spit_len: usize,
    pub ai_spit_len: usize,
    pub center: [Option<Rank>; CENTER_PILES],
    pub selection: Option<Selection>,
    pub outcome: Option<GameResult>,
}

impl BoardView {
    /// Snapshot the current board.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            player_layout: stacks_of(state.layout(Side::Player)),
            ai_layout: stacks_of(state.layout(Side::Ai)),
            player_spit_len: state.spit_pile(Side::Player).len(),
            ai_spit_len: state.spit_pile(Side::Ai).len(),
            center: state.center.tops(),
            selection: state.selection,
            outcome: state.outcome,
        }
    }

    /// Face-up card of a player stack.
    #[must_use]
    pub fn player_top(&self, stack: usize) -> Option<Rank> {
        self.player_layout.get(stack).and_then(|s| s.last().copied())
    }

    /// Status line: the result once the game is over.
    #[must_use]
    pub fn status(&self) -> Option<String> {
        self.outcome.map(|r| r.to_string())
    }
}

fn stacks_of(layout: &Layout) -> Vec<Vec<Rank>> {
    layout.stacks().iter().map(|s| s.to_vec()).collect()
}
