//! Turn resolution: the board mutations behind every action.
//!
//! The resolver checks indices and that a source card exists, but trusts
//! its callers on rank legality. Input handlers and AI policies consult
//! [`is_valid_move`](super::is_valid_move) before asking for a play.
//!
//! Every mutation refuses to run on a finished game. Plays and relocations
//! end with a terminal check.

use tracing::{debug, info, warn};

use super::engine::GameResult;
use crate::cards::Rank;
use crate::core::{GameEvent, GameState, Side, SpitError, SPIT_BLOCKED_STATUS};
use crate::zones::{CenterPiles, Layout};

/// Result of a spit request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpitOutcome {
    /// Both piles revealed a card.
    Revealed { player: Rank, ai: Rank },
    /// At least one spit pile was empty; nothing moved.
    Blocked,
}

impl SpitOutcome {
    /// The event reported for this outcome.
    #[must_use]
    pub fn into_event(self) -> GameEvent {
        match self {
            SpitOutcome::Revealed { player, ai } => GameEvent::Spat { player, ai },
            SpitOutcome::Blocked => GameEvent::SpitBlocked {
                status: SPIT_BLOCKED_STATUS.to_string(),
            },
        }
    }
}

/// Play the top card of `stack` onto center pile `center`.
///
/// Overwrites the pile's previous top. When the player moves, any pending
/// selection is abandoned.
pub fn play_card(
    state: &mut GameState,
    side: Side,
    stack: usize,
    center: usize,
) -> Result<Vec<GameEvent>, SpitError> {
    state.ensure_running()?;
    Layout::check_index(stack)?;
    CenterPiles::check_index(center)?;

    let rank = state.layouts[side]
        .pop(stack)
        .ok_or(SpitError::EmptyStack { side, stack })?;

    state.center.set(center, rank);
    state.played[side] += 1;
    if side == Side::Player {
        state.selection = None;
    }

    debug!(%side, stack, center, %rank, "played card");

    let mut events = vec![GameEvent::Played {
        side,
        stack,
        center,
        rank,
    }];
    events.extend(check_terminal(state).map(GameEvent::GameOver));
    Ok(events)
}

/// Move the top card of `from` onto the empty stack `to`.
pub fn relocate(
    state: &mut GameState,
    side: Side,
    from: usize,
    to: usize,
) -> Result<Vec<GameEvent>, SpitError> {
    state.ensure_running()?;
    Layout::check_index(from)?;
    Layout::check_index(to)?;

    if from == to {
        return Err(SpitError::SameStack { stack: from });
    }
    if state.layouts[side].stack_len(to) > 0 {
        return Err(SpitError::TargetNotEmpty { side, stack: to });
    }

    let layout = &mut state.layouts[side];
    let rank = layout.pop(from).ok_or(SpitError::EmptyStack { side, stack: from })?;
    layout.push(to, rank);

    if side == Side::Player {
        state.selection = None;
    }

    debug!(%side, from, to, %rank, "relocated card");

    let mut events = vec![GameEvent::Relocated { side, from, to, rank }];
    events.extend(check_terminal(state).map(GameEvent::GameOver));
    Ok(events)
}

/// Reveal the front card of both spit piles.
///
/// The player's card goes onto center 0 and the AI's onto center 1. If
/// either pile is empty nothing moves; discards are never reshuffled back.
/// A spit never touches a layout, so it cannot end the game by itself.
pub fn spit_both(state: &mut GameState) -> Result<SpitOutcome, SpitError> {
    state.ensure_running()?;
    Ok(reveal_spit(state))
}

/// The spit transfer without the running check, for the opening deal.
pub(crate) fn reveal_spit(state: &mut GameState) -> SpitOutcome {
    let (Some(player), Some(ai)) = (
        state.spit_piles[Side::Player].front(),
        state.spit_piles[Side::Ai].front(),
    ) else {
        warn!(
            player_spit = state.spit_piles[Side::Player].len(),
            ai_spit = state.spit_piles[Side::Ai].len(),
            "spit blocked"
        );
        return SpitOutcome::Blocked;
    };

    state.spit_piles[Side::Player].draw();
    state.spit_piles[Side::Ai].draw();
    state.center.set(0, player);
    state.center.set(1, ai);
    state.played[Side::Player] += 1;
    state.played[Side::Ai] += 1;

    debug!(%player, %ai, "spit");
    SpitOutcome::Revealed { player, ai }
}

/// Which side, if any, has cleared its layout.
///
/// The player is checked first. Spit piles do not count.
#[must_use]
pub fn terminal_result(state: &GameState) -> Option<GameResult> {
    if state.layouts[Side::Player].is_clear() {
        Some(GameResult::PlayerWins)
    } else if state.layouts[Side::Ai].is_clear() {
        Some(GameResult::AiWins)
    } else {
        None
    }
}

/// Record the outcome if the game just ended.
///
/// Returns the result only on the call that ends the game.
pub fn check_terminal(state: &mut GameState) -> Option<GameResult> {
    if state.outcome.is_some() {
        return None;
    }

    let result = terminal_result(state)?;
    state.outcome = Some(result);
    state.selection = None;
    info!(%result, "game over");
    Some(result)
}
