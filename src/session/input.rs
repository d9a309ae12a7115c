//! Human input handlers.
//!
//! The render layer calls these when the player clicks a top card or an
//! empty stack slot. A click on a card plays it if it fits either center
//! pile; otherwise it toggles a selection, which a later click on an empty
//! slot turns into a relocation.

use tracing::debug;

use crate::core::{Action, GameEvent, GameState, Selection, Side, SpitError};
use crate::rules::{is_valid_move, RulesEngine};
use crate::zones::{Layout, CENTER_PILES};

/// The player clicked the top card of `stack`.
///
/// Tries center 0, then center 1. If neither accepts the card, selects it
/// (or clears the selection when it was already selected).
pub fn handle_player_card_click<E: RulesEngine>(
    engine: &E,
    state: &mut GameState,
    stack: usize,
) -> Result<Vec<GameEvent>, SpitError> {
    state.ensure_running()?;
    Layout::check_index(stack)?;

    let rank = state
        .layout(Side::Player)
        .top(stack)
        .ok_or(SpitError::EmptyStack {
            side: Side::Player,
            stack,
        })?;

    if let Some(center) = (0..CENTER_PILES).find(|&c| is_valid_move(rank, state.center.top(c))) {
        return engine.apply_action(state, Side::Player, &Action::Play { stack, center });
    }

    if state.selection.is_some_and(|s| s.stack == stack) {
        state.selection = None;
        debug!(stack, "deselected");
        Ok(vec![GameEvent::Deselected { stack }])
    } else {
        state.selection = Some(Selection { stack, rank });
        debug!(stack, %rank, "selected");
        Ok(vec![GameEvent::Selected { stack, rank }])
    }
}

/// The player clicked the empty stack slot `target`.
///
/// Without a selection this does nothing. With one, the selected card
/// moves into `target` and the selection is cleared.
pub fn handle_empty_slot_click<E: RulesEngine>(
    engine: &E,
    state: &mut GameState,
    target: usize,
) -> Result<Vec<GameEvent>, SpitError> {
    state.ensure_running()?;
    Layout::check_index(target)?;

    let Some(selection) = state.selection else {
        return Ok(vec![]);
    };

    engine.apply_action(
        state,
        Side::Player,
        &Action::Relocate {
            from: selection.stack,
            to: target,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::core::SideMap;
    use crate::rules::{GameResult, SpitRules};
    use crate::zones::CenterPiles;

    fn r(v: u8) -> Rank {
        Rank::new(v).unwrap()
    }

    fn player_board(player: Layout, center: [Option<Rank>; 2]) -> GameState {
        GameState::from_board(
            SideMap::from_parts(player, Layout::from_stacks([vec![r(1)]])),
            SideMap::default(),
            CenterPiles::new(center),
        )
    }

    #[test]
    fn test_click_plays_on_center_zero_first() {
        // 6 fits both 7 and 5; center 0 wins.
        let mut state = player_board(Layout::from_stacks([vec![r(2), r(6)]]), [Some(r(7)), Some(r(5))]);

        let events = handle_player_card_click(&SpitRules, &mut state, 0).unwrap();

        assert!(matches!(events[..], [GameEvent::Played { center: 0, .. }]));
        assert_eq!(state.center.tops(), [Some(r(6)), Some(r(5))]);
    }

    #[test]
    fn test_click_plays_on_center_one() {
        let mut state = player_board(Layout::from_stacks([vec![r(4)]]), [Some(r(9)), Some(r(5))]);

        handle_player_card_click(&SpitRules, &mut state, 0).unwrap();

        assert_eq!(state.center.tops(), [Some(r(9)), Some(r(4))]);
    }

    #[test]
    fn test_click_toggles_selection() {
        let mut state = player_board(
            Layout::from_stacks([vec![r(2)], vec![r(3)]]),
            [Some(r(9)), Some(r(9))],
        );

        let events = handle_player_card_click(&SpitRules, &mut state, 0).unwrap();
        assert_eq!(events, vec![GameEvent::Selected { stack: 0, rank: r(2) }]);
        assert_eq!(state.selection, Some(Selection { stack: 0, rank: r(2) }));

        // Another stack replaces the selection.
        handle_player_card_click(&SpitRules, &mut state, 1).unwrap();
        assert_eq!(state.selection, Some(Selection { stack: 1, rank: r(3) }));

        // Same stack again clears it.
        let events = handle_player_card_click(&SpitRules, &mut state, 1).unwrap();
        assert_eq!(events, vec![GameEvent::Deselected { stack: 1 }]);
        assert!(state.selection.is_none());
    }

    #[test]
    fn test_click_on_empty_stack_is_rejected() {
        let mut state = player_board(Layout::from_stacks([vec![], vec![r(3)]]), [None, None]);

        assert_eq!(
            handle_player_card_click(&SpitRules, &mut state, 0),
            Err(SpitError::EmptyStack { side: Side::Player, stack: 0 })
        );
    }

    #[test]
    fn test_empty_slot_without_selection_is_noop() {
        let mut state = player_board(Layout::from_stacks([vec![r(2), r(3)]]), [Some(r(9)), Some(r(9))]);
        let before = state.layouts.clone();

        let events = handle_empty_slot_click(&SpitRules, &mut state, 1).unwrap();

        assert!(events.is_empty());
        assert_eq!(state.layouts, before);
    }

    #[test]
    fn test_selection_moves_to_empty_slot() {
        let mut state = player_board(Layout::from_stacks([vec![r(2), r(3)]]), [Some(r(9)), Some(r(9))]);

        handle_player_card_click(&SpitRules, &mut state, 0).unwrap();
        let events = handle_empty_slot_click(&SpitRules, &mut state, 3).unwrap();

        assert_eq!(
            events,
            vec![GameEvent::Relocated {
                side: Side::Player,
                from: 0,
                to: 3,
                rank: r(3)
            }]
        );
        assert!(state.selection.is_none());
        assert_eq!(state.layout(Side::Player).top(0), Some(r(2)));
        assert_eq!(state.layout(Side::Player).top(3), Some(r(3)));
    }

    #[test]
    fn test_selection_onto_occupied_slot_fails() {
        let mut state = player_board(
            Layout::from_stacks([vec![r(2), r(3)], vec![r(11)]]),
            [Some(r(9)), Some(r(9))],
        );

        handle_player_card_click(&SpitRules, &mut state, 0).unwrap();

        assert_eq!(
            handle_empty_slot_click(&SpitRules, &mut state, 1),
            Err(SpitError::TargetNotEmpty { side: Side::Player, stack: 1 })
        );
        assert!(state.selection.is_some());
    }

    #[test]
    fn test_input_after_game_over() {
        let mut state = player_board(Layout::from_stacks([vec![r(6)]]), [Some(r(7)), None]);
        state.outcome = Some(GameResult::AiWins);

        assert_eq!(
            handle_player_card_click(&SpitRules, &mut state, 0),
            Err(SpitError::GameOver(GameResult::AiWins))
        );
        assert_eq!(
            handle_empty_slot_click(&SpitRules, &mut state, 1),
            Err(SpitError::GameOver(GameResult::AiWins))
        );
    }
}
