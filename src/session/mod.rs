//! Session driver and render boundary.
//!
//! - `Session`: owns one game and exposes the input entry points, the AI
//!   `tick`, and `advance` for any scheduler
//! - `input`: player click handlers over a bare `GameState`
//! - `clock`: elapsed time to tick count
//! - `view`: `BoardView`, the read-only projection renderers consume

pub mod clock;
pub mod input;
pub mod runner;
pub mod view;

pub use clock::TickClock;
pub use input::{handle_empty_slot_click, handle_player_card_click};
pub use runner::{Session, MAX_CATCH_UP_TICKS};
pub use view::BoardView;
