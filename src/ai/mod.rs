//! The scripted opponent.
//!
//! - `policy`: `OpponentPolicy` trait, the greedy Spit AI, a random policy
//! - `simulate`: headless self-play between two policies
//!
//! [`take_turn`] is one AI tick: ask the policy, apply its choice, or pass.

pub mod policy;
pub mod simulate;

pub use policy::{GreedyPolicy, OpponentPolicy, RandomPolicy};
pub use simulate::{play_out, PlayoutEnd};

use tracing::debug;

use crate::core::{GameEvent, GameRng, GameState, Side, SpitError};
use crate::rules::RulesEngine;

/// Run one decision for `side`.
///
/// Returns the events of the applied action, `[Passed]` when the policy
/// has nothing to do, or no events at all once the game is over.
pub fn take_turn<E, P>(
    engine: &E,
    state: &mut GameState,
    policy: &P,
    side: Side,
    rng: &mut GameRng,
) -> Result<Vec<GameEvent>, SpitError>
where
    E: RulesEngine,
    P: OpponentPolicy<E>,
{
    if state.is_over() {
        return Ok(vec![]);
    }

    match policy.choose_action(engine, state, side, rng) {
        Some(action) => engine.apply_action(state, side, &action),
        None => {
            debug!(%side, "passed");
            Ok(vec![GameEvent::Passed { side }])
        }
    }
}
