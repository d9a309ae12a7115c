//! Spit piles and center piles.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::core::SpitError;

/// Number of shared center piles.
pub const CENTER_PILES: usize = 2;

/// A side's reserve queue, drawn from the front.
///
/// Backed by `im::Vector` so cloning a whole game state stays cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpitPile {
    cards: Vector<Rank>,
}

impl SpitPile {
    /// Create a pile from cards in draw order.
    pub fn from_cards(cards: impl IntoIterator<Item = Rank>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Take the front card.
    pub fn draw(&mut self) -> Option<Rank> {
        self.cards.pop_front()
    }

    /// Peek at the front card.
    #[must_use]
    pub fn front(&self) -> Option<Rank> {
        self.cards.front().copied()
    }

    /// Cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = Rank> + '_ {
        self.cards.iter().copied()
    }
}

/// The two shared discard targets.
///
/// Each slot holds only its current top card; a card played over another
/// discards the old one permanently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterPiles {
    slots: [Option<Rank>; CENTER_PILES],
}

impl CenterPiles {
    /// Create center piles with the given tops.
    #[must_use]
    pub const fn new(slots: [Option<Rank>; CENTER_PILES]) -> Self {
        Self { slots }
    }

    /// Check that `index` names a center pile.
    pub fn check_index(index: usize) -> Result<(), SpitError> {
        if index < CENTER_PILES {
            Ok(())
        } else {
            Err(SpitError::CenterOutOfRange {
                index,
                max: CENTER_PILES,
            })
        }
    }

    /// Current top of a center pile (`None` if empty or out of range).
    #[must_use]
    pub fn top(&self, index: usize) -> Option<Rank> {
        self.slots.get(index).copied().flatten()
    }

    /// Both tops, pile 0 first.
    #[must_use]
    pub fn tops(&self) -> [Option<Rank>; CENTER_PILES] {
        self.slots
    }

    /// Overwrite a pile's top card.
    pub(crate) fn set(&mut self, index: usize, rank: Rank) {
        self.slots[index] = Some(rank);
    }
}
