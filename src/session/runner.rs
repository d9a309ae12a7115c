//! A running game: state, rules, opponent policy and tick clock.

use std::time::Duration;
use tracing::{info, warn};

use super::clock::TickClock;
use super::input;
use super::view::BoardView;
use crate::ai::{self, GreedyPolicy, OpponentPolicy};
use crate::core::{load_difficulty, Action, GameEvent, GameRng, GameState, SettingsStore, Side, SpitConfig, SpitError};
use crate::rules::{GameResult, RulesEngine, SpitRules};

/// Most AI ticks a single `advance` call will run.
///
/// A caller that stalls for minutes (a suspended laptop, a debugger) catches
/// up this far and drops the rest.
pub const MAX_CATCH_UP_TICKS: u32 = 1_000;

/// One human-vs-AI game.
///
/// All entry points run to completion and return the events they caused.
/// A finished session rejects input with `SpitError::GameOver`; ticks on a
/// finished session do nothing. Start a new session to play again.
///
/// ```
/// use std::time::Duration;
/// use spit_engine::core::{Difficulty, SpitConfig};
/// use spit_engine::session::Session;
///
/// let config = SpitConfig::default().with_seed(7).with_difficulty(Difficulty::MAX);
/// let mut session = Session::new(config);
///
/// // 400ms per tick at difficulty 10.
/// let events = session.advance(Duration::from_millis(800)).unwrap();
/// assert!(!events.is_empty());
/// ```
#[derive(Debug)]
pub struct Session<P = GreedyPolicy> {
    config: SpitConfig,
    rules: SpitRules,
    state: GameState,
    policy: P,
    clock: TickClock,
    rng: GameRng,
    stall_reported: bool,
}

impl Session<GreedyPolicy> {
    /// Deal a new game against the standard AI.
    #[must_use]
    pub fn new(config: SpitConfig) -> Self {
        Self::with_policy(config, GreedyPolicy)
    }

    /// Deal a new game, reading the difficulty from persisted settings.
    #[must_use]
    pub fn from_settings(store: &dyn SettingsStore, seed: u64) -> Self {
        let config = SpitConfig::default()
            .with_seed(seed)
            .with_difficulty(load_difficulty(store));
        Self::new(config)
    }
}

impl<P: OpponentPolicy<SpitRules>> Session<P> {
    /// Deal a new game against a custom opponent policy.
    pub fn with_policy(config: SpitConfig, policy: P) -> Self {
        let state = GameState::new(config.seed);
        Self::from_state(config, state, policy)
    }

    /// Resume play on an existing board.
    pub fn from_state(config: SpitConfig, mut state: GameState, policy: P) -> Self {
        let rng = state.rng.fork();
        info!(
            seed = config.seed,
            difficulty = %config.difficulty,
            interval_ms = config.tick_interval().as_millis() as u64,
            "session started"
        );

        Self {
            clock: TickClock::new(config.tick_interval()),
            config,
            rules: SpitRules,
            state,
            policy,
            rng,
            stall_reported: false,
        }
    }

    /// The player clicked the top card of `stack`.
    pub fn click_card(&mut self, stack: usize) -> Result<Vec<GameEvent>, SpitError> {
        let events = input::handle_player_card_click(&self.rules, &mut self.state, stack)?;
        Ok(self.after(events))
    }

    /// The player clicked the empty slot `stack`.
    pub fn click_empty_slot(&mut self, stack: usize) -> Result<Vec<GameEvent>, SpitError> {
        let events = input::handle_empty_slot_click(&self.rules, &mut self.state, stack)?;
        Ok(self.after(events))
    }

    /// Request a spit transfer.
    ///
    /// The spit moves both piles, but only the player can ask for one, so
    /// history records it as a player action.
    pub fn spit(&mut self) -> Result<Vec<GameEvent>, SpitError> {
        let events = self
            .rules
            .apply_action(&mut self.state, Side::Player, &Action::Spit)?;
        Ok(self.after(events))
    }

    /// Run one AI decision.
    pub fn tick(&mut self) -> Result<Vec<GameEvent>, SpitError> {
        let events = ai::take_turn(&self.rules, &mut self.state, &self.policy, Side::Ai, &mut self.rng)?;
        Ok(self.after(events))
    }

    /// Report elapsed wall time; runs every AI tick that has come due.
    ///
    /// Stops early once the game ends. At most [`MAX_CATCH_UP_TICKS`] run
    /// per call.
    pub fn advance(&mut self, elapsed: Duration) -> Result<Vec<GameEvent>, SpitError> {
        let due = self.clock.advance(elapsed);
        if due > MAX_CATCH_UP_TICKS {
            warn!(due, cap = MAX_CATCH_UP_TICKS, "dropping overdue AI ticks");
        }
        let due = due.min(MAX_CATCH_UP_TICKS);
        let mut events = Vec::new();

        for _ in 0..due {
            if self.state.is_over() {
                break;
            }
            events.extend(self.tick()?);
        }

        Ok(events)
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::from_state(&self.state)
    }

    /// The final result, once there is one.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.state.outcome
    }

    /// True when nobody can move and the spit piles cannot help.
    #[must_use]
    pub fn is_deadlocked(&self) -> bool {
        self.rules.is_deadlocked(&self.state)
    }

    /// Time between AI ticks.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.clock.interval()
    }

    #[must_use]
    pub fn config(&self) -> &SpitConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Append a one-time `Stalled` event when the board has locked up.
    fn after(&mut self, mut events: Vec<GameEvent>) -> Vec<GameEvent> {
        if !self.stall_reported && self.rules.is_deadlocked(&self.state) {
            warn!(
                player_cards = self.state.layout(Side::Player).card_count(),
                ai_cards = self.state.layout(Side::Ai).card_count(),
                "board deadlocked"
            );
            self.stall_reported = true;
            events.push(GameEvent::Stalled);
        }
        events
    }
}
