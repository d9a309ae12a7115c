//! Opponent policies.
//!
//! A policy looks at the board and names one action for its side, or
//! `None` to pass. Policies never mutate the state; the caller applies the
//! chosen action through the rules engine.

use tracing::debug;

use crate::core::{Action, GameRng, GameState, Side};
use crate::rules::{is_valid_move, RulesEngine};
use crate::zones::CENTER_PILES;

/// Policy for choosing a side's next action.
pub trait OpponentPolicy<E: RulesEngine>: Send + Sync {
    /// Choose an action for `side`.
    ///
    /// Returns `None` to pass.
    fn choose_action(
        &self,
        engine: &E,
        state: &GameState,
        side: Side,
        rng: &mut GameRng,
    ) -> Option<Action>;
}

/// The scripted Spit opponent.
///
/// Each decision:
/// 1. Center 0 first: play the lowest-index top card legal there. Only if
///    none fits, do the same for center 1.
/// 2. Otherwise move a card into the first empty stack, taking it from the
///    first stack that holds more than one card. A single-card stack is
///    never used as the source, even when it is the only candidate.
/// 3. Otherwise pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    /// First (stack, center) play in pile-major, then stack-index order.
    #[must_use]
    pub fn find_play(state: &GameState, side: Side) -> Option<Action> {
        let layout = state.layout(side);

        (0..CENTER_PILES).find_map(|center| {
            let target = state.center.top(center);
            layout
                .tops()
                .find(|&(_, rank)| is_valid_move(rank, target))
                .map(|(stack, _)| Action::Play { stack, center })
        })
    }

    /// Move from the first multi-card stack into the first empty stack.
    #[must_use]
    pub fn find_relocation(state: &GameState, side: Side) -> Option<Action> {
        let layout = state.layout(side);
        let to = layout.first_empty()?;
        let from = layout.first_donor()?;
        Some(Action::Relocate { from, to })
    }
}

impl<E: RulesEngine> OpponentPolicy<E> for GreedyPolicy {
    fn choose_action(
        &self,
        _engine: &E,
        state: &GameState,
        side: Side,
        _rng: &mut GameRng,
    ) -> Option<Action> {
        if state.is_over() {
            return None;
        }

        let action = Self::find_play(state, side).or_else(|| Self::find_relocation(state, side));
        debug!(%side, ?action, "greedy policy decision");
        action
    }
}

/// Uniform random policy over plays and relocations.
///
/// Never requests a spit: spitting is a table-wide event, not a move made
/// by one side's policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl<E: RulesEngine> OpponentPolicy<E> for RandomPolicy {
    fn choose_action(
        &self,
        engine: &E,
        state: &GameState,
        side: Side,
        rng: &mut GameRng,
    ) -> Option<Action> {
        let actions: Vec<Action> = engine
            .legal_actions(state, side)
            .into_iter()
            .filter(|a| *a != Action::Spit)
            .collect();
        rng.choose(&actions).copied()
    }
}
