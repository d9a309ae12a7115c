//! Cards and the deck.
//!
//! - `Rank`: the only card property gameplay uses
//! - `deck`: building, shuffling, splitting and dealing

pub mod rank;
pub mod deck;

pub use rank::Rank;
pub use deck::{deal, deal_layout, split_halves, standard_deck, Deal, DECK_SIZE, HALF_DECK, LAYOUT_CARDS};
