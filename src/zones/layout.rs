//! A side's five-stack layout.
//!
//! Only the top card (the last element) of a stack is ever inspected or
//! moved. Cards beneath it are face-down and only matter for counting and
//! for being exposed as the stack shrinks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Rank;
use crate::core::SpitError;

/// Number of stacks in every layout.
pub const LAYOUT_STACKS: usize = 5;

/// A single layout stack. Top card is the last element.
///
/// SmallVec keeps the dealt sizes (1..=5) inline; relocations rarely grow a
/// stack past 8.
pub type Stack = SmallVec<[Rank; 8]>;

/// Five ordered stacks belonging to one side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    stacks: [Stack; LAYOUT_STACKS],
}

impl Layout {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a layout from explicit stacks (bottom card first).
    ///
    /// Extra stacks beyond five are ignored; missing stacks are empty.
    ///
    /// ```
    /// use spit_engine::cards::Rank;
    /// use spit_engine::zones::Layout;
    ///
    /// let r = |v| Rank::new(v).unwrap();
    /// let layout = Layout::from_stacks([vec![r(3)], vec![], vec![r(9), r(10)]]);
    /// assert_eq!(layout.top(2), Some(r(10)));
    /// assert_eq!(layout.top(1), None);
    /// ```
    pub fn from_stacks<I, S>(stacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = Rank>,
    {
        let mut layout = Self::new();
        for (slot, cards) in layout.stacks.iter_mut().zip(stacks) {
            slot.extend(cards);
        }
        layout
    }

    /// Check that `index` names one of the five stacks.
    pub fn check_index(index: usize) -> Result<(), SpitError> {
        if index < LAYOUT_STACKS {
            Ok(())
        } else {
            Err(SpitError::StackOutOfRange {
                index,
                max: LAYOUT_STACKS,
            })
        }
    }

    /// Get a stack by index.
    #[must_use]
    pub fn stack(&self, index: usize) -> Option<&Stack> {
        self.stacks.get(index)
    }

    /// All five stacks in index order.
    #[must_use]
    pub fn stacks(&self) -> &[Stack; LAYOUT_STACKS] {
        &self.stacks
    }

    /// Top card of a stack, or `None` if the stack is empty or out of range.
    #[must_use]
    pub fn top(&self, index: usize) -> Option<Rank> {
        self.stacks.get(index).and_then(|s| s.last().copied())
    }

    /// Number of cards in a stack (0 when out of range).
    #[must_use]
    pub fn stack_len(&self, index: usize) -> usize {
        self.stacks.get(index).map_or(0, |s| s.len())
    }

    /// Remove and return the top card of a stack.
    pub fn pop(&mut self, index: usize) -> Option<Rank> {
        self.stacks.get_mut(index).and_then(|s| s.pop())
    }

    /// Place a card on top of a stack.
    pub(crate) fn push(&mut self, index: usize, rank: Rank) {
        self.stacks[index].push(rank);
    }

    /// Total cards across all stacks.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stacks.iter().map(|s| s.len()).sum()
    }

    /// True when every stack is empty (the win condition).
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.stacks.iter().all(|s| s.is_empty())
    }

    /// Index of the first empty stack.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.stacks.iter().position(|s| s.is_empty())
    }

    /// Index of the first stack holding more than one card.
    ///
    /// Such a stack can give up its top card and still keep a face-down
    /// card underneath.
    #[must_use]
    pub fn first_donor(&self) -> Option<usize> {
        self.stacks.iter().position(|s| s.len() > 1)
    }

    /// Iterate over (index, top card) for every non-empty stack.
    pub fn tops(&self) -> impl Iterator<Item = (usize, Rank)> + '_ {
        self.stacks
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.last().map(|&r| (i, r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(v: u8) -> Rank {
        Rank::new(v).unwrap()
    }

    #[test]
    fn test_empty_layout_is_clear() {
        let layout = Layout::new();
        assert!(layout.is_clear());
        assert_eq!(layout.card_count(), 0);
        assert_eq!(layout.first_empty(), Some(0));
        assert_eq!(layout.first_donor(), None);
    }

    #[test]
    fn test_one_card_blocks_clear() {
        let layout = Layout::from_stacks([vec![], vec![], vec![], vec![], vec![r(4)]]);
        assert!(!layout.is_clear());
        assert_eq!(layout.card_count(), 1);
    }

    #[test]
    fn test_pop_and_push() {
        let mut layout = Layout::from_stacks([vec![r(1), r(2)]]);

        assert_eq!(layout.pop(0), Some(r(2)));
        layout.push(3, r(2));

        assert_eq!(layout.top(0), Some(r(1)));
        assert_eq!(layout.top(3), Some(r(2)));
        assert_eq!(layout.pop(1), None);
        assert_eq!(layout.pop(9), None);
    }

    #[test]
    fn test_first_donor_skips_single_cards() {
        let layout = Layout::from_stacks([vec![r(5)], vec![], vec![r(6), r(7)], vec![r(8), r(9)]]);
        assert_eq!(layout.first_donor(), Some(2));
        assert_eq!(layout.first_empty(), Some(1));
    }

    #[test]
    fn test_tops() {
        let layout = Layout::from_stacks([vec![r(5)], vec![], vec![r(6), r(7)]]);
        let tops: Vec<_> = layout.tops().collect();
        assert_eq!(tops, vec![(0, r(5)), (2, r(7))]);
    }

    #[test]
    fn test_check_index() {
        assert!(Layout::check_index(4).is_ok());
        assert_eq!(
            Layout::check_index(5),
            Err(SpitError::StackOutOfRange { index: 5, max: 5 })
        );
    }
}
