//! Headless self-play.
//!
//! Alternates decisions between two policies until the game ends, the board
//! deadlocks, or the step budget runs out. Used for soak tests and
//! benchmarks; the interactive game is driven by `Session` instead.

use super::policy::OpponentPolicy;
use crate::core::{GameRng, GameState, Side, SpitError};
use crate::rules::{GameResult, RulesEngine};

/// Why a self-play run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayoutEnd {
    /// A layout was cleared.
    Finished(GameResult),
    /// Nobody can move any more.
    Deadlocked,
    /// Both policies passed on consecutive turns without deadlock.
    BothPassed,
    /// Step budget exhausted.
    StepLimit,
}

/// Play the game out with one policy per side.
///
/// The player moves first each round. Returns how the run ended and the
/// number of actions applied.
pub fn play_out<E, P, A>(
    engine: &E,
    state: &mut GameState,
    player_policy: &P,
    ai_policy: &A,
    rng: &mut GameRng,
    max_steps: u32,
) -> Result<(PlayoutEnd, u32), SpitError>
where
    E: RulesEngine,
    P: OpponentPolicy<E>,
    A: OpponentPolicy<E>,
{
    let mut steps = 0;
    let mut consecutive_passes = 0;
    let mut side = Side::Player;

    loop {
        if let Some(result) = engine.is_terminal(state) {
            return Ok((PlayoutEnd::Finished(result), steps));
        }
        if engine.is_deadlocked(state) {
            return Ok((PlayoutEnd::Deadlocked, steps));
        }
        if steps >= max_steps {
            return Ok((PlayoutEnd::StepLimit, steps));
        }

        let choice = match side {
            Side::Player => player_policy.choose_action(engine, state, side, rng),
            Side::Ai => ai_policy.choose_action(engine, state, side, rng),
        };

        match choice {
            Some(action) => {
                engine.apply_action(state, side, &action)?;
                steps += 1;
                consecutive_passes = 0;
            }
            None => {
                consecutive_passes += 1;
                if consecutive_passes >= 2 {
                    return Ok((PlayoutEnd::BothPassed, steps));
                }
            }
        }

        side = side.opponent();
    }
}
