//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use spit_engine::cards::Rank;
use spit_engine::core::{GameState, SideMap};
use spit_engine::zones::{CenterPiles, Layout, SpitPile};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Shorthand for a rank in tests.
pub fn r(value: u8) -> Rank {
    Rank::new(value).expect("test rank in 1..=13")
}

/// Build a layout from raw rank values, bottom card first.
pub fn layout(stacks: &[&[u8]]) -> Layout {
    Layout::from_stacks(stacks.iter().map(|s| s.iter().map(|&v| r(v)).collect::<Vec<_>>()))
}

/// Build a board with no spit cards.
pub fn board(player: Layout, ai: Layout, center: [Option<Rank>; 2]) -> GameState {
    GameState::from_board(
        SideMap::from_parts(player, ai),
        SideMap::default(),
        CenterPiles::new(center),
    )
}

/// Build a board with spit piles.
pub fn board_with_spit(
    player: Layout,
    ai: Layout,
    player_spit: &[u8],
    ai_spit: &[u8],
    center: [Option<Rank>; 2],
) -> GameState {
    GameState::from_board(
        SideMap::from_parts(player, ai),
        SideMap::from_parts(
            SpitPile::from_cards(player_spit.iter().map(|&v| r(v))),
            SpitPile::from_cards(ai_spit.iter().map(|&v| r(v))),
        ),
        CenterPiles::new(center),
    )
}
