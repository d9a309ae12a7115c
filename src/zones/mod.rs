//! Card zones: each side's layout and spit pile, plus the shared center.
//!
//! Unlike a general card engine, Spit's zones are fixed: five layout stacks
//! and one spit pile per side, two center piles shared by both.

pub mod layout;
pub mod piles;

pub use layout::{Layout, Stack, LAYOUT_STACKS};
pub use piles::{CenterPiles, SpitPile, CENTER_PILES};
