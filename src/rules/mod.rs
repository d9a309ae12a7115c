//! Spit rules.
//!
//! - `legality`: the move legality oracle
//! - `resolver`: board mutations (play, relocate, spit, terminal check)
//! - `engine`: the `RulesEngine` seam and `SpitRules`

pub mod legality;
pub mod resolver;
pub mod engine;

pub use legality::is_valid_move;
pub use resolver::{check_terminal, play_card, relocate, spit_both, terminal_result, SpitOutcome};
pub use engine::{GameResult, RulesEngine, SpitRules};
