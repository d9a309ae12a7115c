//! Deck construction and the triangular deal.
//!
//! A game starts from a standard 52-card deck (suits are irrelevant, so four
//! copies of each rank), shuffled, split in half, and dealt into each side's
//! layout. Whatever a half has left after the layout becomes that side's
//! spit pile.

use tracing::debug;

use super::rank::Rank;
use crate::core::{GameRng, Side, SideMap};
use crate::zones::{Layout, SpitPile, LAYOUT_STACKS};

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Cards each side receives.
pub const HALF_DECK: usize = DECK_SIZE / 2;

/// Cards consumed by a full triangular layout (1 + 2 + 3 + 4 + 5).
pub const LAYOUT_CARDS: usize = LAYOUT_STACKS * (LAYOUT_STACKS + 1) / 2;

/// A freshly dealt board, before the opening spit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub layouts: SideMap<Layout>,
    pub spit_piles: SideMap<SpitPile>,
}

/// Build an unshuffled deck: four copies of each rank, Ace first.
#[must_use]
pub fn standard_deck() -> Vec<Rank> {
    Rank::all().flat_map(|r| std::iter::repeat(r).take(4)).collect()
}

/// Split a deck into the player's half (front) and the AI's half (back).
///
/// Odd-sized decks give the extra card to the AI half.
#[must_use]
pub fn split_halves(mut deck: Vec<Rank>) -> (Vec<Rank>, Vec<Rank>) {
    let back = deck.split_off(deck.len() / 2);
    (deck, back)
}

/// Deal a triangular layout from the front of `source`.
///
/// Stack `i` receives `i + 1` cards; stack 0 is filled first. If `source`
/// runs out, later stacks stay short. Dealt cards are removed from
/// `source`, which keeps the remainder in order.
pub fn deal_layout(source: &mut Vec<Rank>) -> Layout {
    let take = source.len().min(LAYOUT_CARDS);
    let mut cards = source.drain(..take);

    let stacks: Vec<Vec<Rank>> = (0..LAYOUT_STACKS)
        .map(|i| cards.by_ref().take(i + 1).collect())
        .collect();

    Layout::from_stacks(stacks)
}

/// Shuffle a standard deck and deal both sides.
pub fn deal(rng: &mut GameRng) -> Deal {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);

    let (mut player_half, mut ai_half) = split_halves(deck);

    let player_layout = deal_layout(&mut player_half);
    let ai_layout = deal_layout(&mut ai_half);

    debug!(
        player_spit = player_half.len(),
        ai_spit = ai_half.len(),
        "dealt layouts"
    );

    Deal {
        layouts: SideMap::from_parts(player_layout, ai_layout),
        spit_piles: SideMap::from_parts(
            SpitPile::from_cards(player_half),
            SpitPile::from_cards(ai_half),
        ),
    }
}

impl Deal {
    /// Cards held by a side (layout + spit pile).
    #[must_use]
    pub fn cards_held(&self, side: Side) -> usize {
        self.layouts[side].card_count() + self.spit_piles[side].len()
    }
}
