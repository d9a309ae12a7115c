//! Rules engine trait and the Spit implementation.
//!
//! The trait is the seam between the board and whatever drives it: human
//! input handlers, AI policies, and test harnesses all go through
//! `apply_action`, which dispatches to the resolver and records history.

use serde::{Deserialize, Serialize};

use super::legality::is_valid_move;
use super::resolver::{self, SpitOutcome};
use crate::core::{Action, GameEvent, GameState, Side, SpitError};
use crate::zones::CENTER_PILES;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The human cleared their layout first.
    PlayerWins,
    /// The AI cleared its layout first.
    AiWins,
}

impl GameResult {
    /// The winning side.
    #[must_use]
    pub fn winner(self) -> Side {
        match self {
            GameResult::PlayerWins => Side::Player,
            GameResult::AiWins => Side::Ai,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, side: Side) -> bool {
        self.winner() == side
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::PlayerWins => write!(f, "YOU WIN"),
            GameResult::AiWins => write!(f, "AI WINS"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec once the game is over
/// - `apply_action`: Must be deterministic; records successful actions
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Every action `side` could take right now.
    fn legal_actions(&self, state: &GameState, side: Side) -> Vec<Action>;

    /// Apply an action to the game state, returning the events it produced.
    fn apply_action(
        &self,
        state: &mut GameState,
        side: Side,
        action: &Action,
    ) -> Result<Vec<GameEvent>, SpitError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// True when no sequence of actions can change the board any more.
    fn is_deadlocked(&self, state: &GameState) -> bool;

    // === Convenience Methods ===

    /// Only the center-pile plays among the legal actions.
    fn legal_plays(&self, state: &GameState, side: Side) -> Vec<Action> {
        self.legal_actions(state, side)
            .into_iter()
            .filter(Action::is_play)
            .collect()
    }
}

/// The Spit rule set.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpitRules;

impl SpitRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Would a spit transfer move any cards?
    #[must_use]
    pub fn can_spit(state: &GameState) -> bool {
        Side::ALL.iter().all(|&s| !state.spit_pile(s).is_empty())
    }

    /// Could `side` expose a face-down card by moving onto an empty stack?
    fn can_uncover(state: &GameState, side: Side) -> bool {
        let layout = state.layout(side);
        layout.first_empty().is_some() && layout.first_donor().is_some()
    }
}

impl RulesEngine for SpitRules {
    fn legal_actions(&self, state: &GameState, side: Side) -> Vec<Action> {
        if self.is_terminal(state).is_some() {
            return vec![];
        }

        let layout = state.layout(side);
        let mut actions = Vec::new();

        // Pile-major order, matching the greedy AI's preference.
        for center in 0..CENTER_PILES {
            let target = state.center.top(center);
            actions.extend(
                layout
                    .tops()
                    .filter(|&(_, rank)| is_valid_move(rank, target))
                    .map(|(stack, _)| Action::Play { stack, center }),
            );
        }

        for (to, stack) in layout.stacks().iter().enumerate() {
            if !stack.is_empty() {
                continue;
            }
            actions.extend(
                layout
                    .tops()
                    .map(|(from, _)| Action::Relocate { from, to }),
            );
        }

        if Self::can_spit(state) {
            actions.push(Action::Spit);
        }

        actions
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        side: Side,
        action: &Action,
    ) -> Result<Vec<GameEvent>, SpitError> {
        state.ensure_running()?;

        let events = match *action {
            Action::Play { stack, center } => resolver::play_card(state, side, stack, center)?,
            Action::Relocate { from, to } => resolver::relocate(state, side, from, to)?,
            Action::Spit => {
                let outcome = resolver::spit_both(state)?;
                if outcome == SpitOutcome::Blocked {
                    // Nothing moved, nothing to record.
                    return Ok(vec![outcome.into_event()]);
                }
                // Catches boards whose layouts were cleared by hand.
                let mut events = vec![outcome.into_event()];
                events.extend(resolver::check_terminal(state).map(GameEvent::GameOver));
                events
            }
        };

        state.record(side, *action);
        Ok(events)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.outcome.or_else(|| resolver::terminal_result(state))
    }

    fn is_deadlocked(&self, state: &GameState) -> bool {
        if self.is_terminal(state).is_some() || Self::can_spit(state) {
            return false;
        }

        Side::ALL.iter().all(|&side| {
            self.legal_plays(state, side).is_empty() && !Self::can_uncover(state, side)
        })
    }
}
