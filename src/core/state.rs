//! Game state.
//!
//! `GameState` is the single explicit value every rule operation reads and
//! mutates. It holds:
//! - both layouts and spit piles
//! - the two center piles
//! - the player's pending selection
//! - the final outcome once a layout is cleared
//! - action history and the RNG
//!
//! Uses `im` persistent structures for the spit piles and history so that
//! policies can clone the state cheaply for lookahead.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::action::{Action, ActionRecord};
use super::error::SpitError;
use super::rng::GameRng;
use super::side::{Side, SideMap};
use crate::cards::{self, Rank};
use crate::rules::{resolver, GameResult};
use crate::zones::{CenterPiles, Layout, SpitPile};

/// A player-chosen card waiting to be moved into an empty stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Source stack in the player's layout.
    pub stack: usize,
    /// Rank of the selected (top) card.
    pub rank: Rank,
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Five stacks per side.
    pub layouts: SideMap<Layout>,

    /// Reserve queues per side.
    pub spit_piles: SideMap<SpitPile>,

    /// Shared center pile tops.
    pub center: CenterPiles,

    /// Pending player empty-stack move.
    pub selection: Option<Selection>,

    /// Set once a layout is cleared. Never unset.
    pub outcome: Option<GameResult>,

    /// Cards each side has put into the center (plays and spit reveals).
    pub played: SideMap<u32>,

    /// Every applied action, in order.
    pub history: Vector<ActionRecord>,

    sequence: u32,

    /// Game RNG (available to policies through forks).
    pub rng: GameRng,
}

impl GameState {
    /// Shuffle, deal, and perform the opening spit.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let rng = GameRng::new(seed);
        let deal = cards::deal(&mut rng.for_context("deal"));

        let mut state = Self {
            layouts: deal.layouts,
            spit_piles: deal.spit_piles,
            center: CenterPiles::default(),
            selection: None,
            outcome: None,
            played: SideMap::with_value(0),
            history: Vector::new(),
            sequence: 0,
            rng,
        };

        let opening = resolver::reveal_spit(&mut state);
        info!(seed, center = ?state.center.tops(), ?opening, "new game dealt");
        state
    }

    /// Build a state from an explicit board, without dealing or spitting.
    ///
    /// Useful for scripted scenarios. `played` counters start at zero, so
    /// the 26-card conservation count only holds for dealt games. A board
    /// with a cleared layout starts out finished.
    #[must_use]
    pub fn from_board(
        layouts: SideMap<Layout>,
        spit_piles: SideMap<SpitPile>,
        center: CenterPiles,
    ) -> Self {
        let mut state = Self {
            layouts,
            spit_piles,
            center,
            selection: None,
            outcome: None,
            played: SideMap::with_value(0),
            history: Vector::new(),
            sequence: 0,
            rng: GameRng::new(0),
        };
        resolver::check_terminal(&mut state);
        state
    }

    /// A side's layout.
    #[must_use]
    pub fn layout(&self, side: Side) -> &Layout {
        &self.layouts[side]
    }

    /// A side's spit pile.
    #[must_use]
    pub fn spit_pile(&self, side: Side) -> &SpitPile {
        &self.spit_piles[side]
    }

    /// True once either layout has been cleared.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Fail with `GameOver` if the game has ended.
    pub fn ensure_running(&self) -> Result<(), SpitError> {
        match self.outcome {
            Some(result) => Err(SpitError::GameOver(result)),
            None => Ok(()),
        }
    }

    /// Layout + spit pile + cards played into the center, for one side.
    ///
    /// Always 26 for a dealt game: cards move, they are never created or
    /// destroyed.
    #[must_use]
    pub fn cards_accounted(&self, side: Side) -> usize {
        self.layouts[side].card_count() + self.spit_piles[side].len() + self.played[side] as usize
    }

    /// Number of actions applied so far.
    #[must_use]
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Append an action to the history.
    pub(crate) fn record(&mut self, side: Side, action: Action) {
        self.history.push_back(ActionRecord::new(side, action, self.sequence));
        self.sequence += 1;
    }
}
