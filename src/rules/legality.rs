//! Move legality.

use crate::cards::Rank;

/// Can `card` be placed on a center pile whose top is `target`?
///
/// Any card goes on an empty pile. Otherwise the ranks must be adjacent,
/// with Ace and King adjacent to each other. Equal ranks never match.
///
/// ```
/// use spit_engine::cards::Rank;
/// use spit_engine::rules::is_valid_move;
///
/// let r = |v| Rank::new(v).unwrap();
/// assert!(is_valid_move(r(6), Some(r(7))));
/// assert!(is_valid_move(Rank::KING, Some(Rank::ACE)));
/// assert!(!is_valid_move(r(7), Some(r(7))));
/// assert!(is_valid_move(r(7), None));
/// ```
#[must_use]
pub fn is_valid_move(card: Rank, target: Option<Rank>) -> bool {
    let Some(target) = target else {
        return true;
    };

    let (a, b) = (card.value(), target.value());
    a.abs_diff(b) == 1 || (a.min(b) == Rank::ACE.value() && a.max(b) == Rank::KING.value())
}
