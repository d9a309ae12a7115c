//! Game configuration.
//!
//! - `Difficulty`: the single persisted setting, controls AI tick speed
//! - `SpitConfig`: everything needed to start a session (seed + difficulty)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// AI speed setting in `1..=10`. Higher is faster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(1);
    pub const MAX: Difficulty = Difficulty(10);
    pub const DEFAULT: Difficulty = Difficulty(5);

    /// Create a difficulty, or `None` outside 1..=10.
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level >= Self::MIN.0 && level <= Self::MAX.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Get the raw level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Parse a stored setting value.
    ///
    /// Only the leading digits count, so `"7abc"` reads as 7. Missing,
    /// non-numeric, or out-of-range values fall back to the default.
    ///
    /// ```
    /// use spit_engine::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_setting(Some(" 8 ")).level(), 8);
    /// assert_eq!(Difficulty::from_setting(Some("7abc")).level(), 7);
    /// assert_eq!(Difficulty::from_setting(Some("fast")), Difficulty::DEFAULT);
    /// assert_eq!(Difficulty::from_setting(None), Difficulty::DEFAULT);
    /// ```
    #[must_use]
    pub fn from_setting(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::DEFAULT;
        };

        let trimmed = raw.trim_start();
        let digits = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .map_or(trimmed, |end| &trimmed[..end]);

        match digits.parse::<u8>().ok().and_then(Self::new) {
            Some(difficulty) => difficulty,
            None => {
                warn!(value = raw, "invalid stored difficulty, using default");
                Self::DEFAULT
            }
        }
    }

    /// Time between AI ticks: `2600 - 220 * level` milliseconds.
    ///
    /// Level 1 ticks every 2380ms, level 10 every 400ms.
    #[must_use]
    pub const fn tick_interval(self) -> Duration {
        Duration::from_millis(2600 - 220 * self.0 as u64)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or_else(|| format!("difficulty {level} out of range 1..=10"))
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpitConfig {
    /// Seed for the shuffle. Same seed produces the same deal.
    pub seed: u64,

    /// AI speed.
    pub difficulty: Difficulty,
}

impl Default for SpitConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty: Difficulty::DEFAULT,
        }
    }
}

impl SpitConfig {
    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the AI difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Time between AI ticks for this configuration.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.difficulty.tick_interval()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_bounds() {
        assert!(Difficulty::new(0).is_none());
        assert!(Difficulty::new(11).is_none());
        assert_eq!(Difficulty::new(1), Some(Difficulty::MIN));
        assert_eq!(Difficulty::new(10), Some(Difficulty::MAX));
        assert_eq!(Difficulty::default().level(), 5);
    }

    #[test]
    fn test_tick_interval_mapping() {
        assert_eq!(Difficulty::MIN.tick_interval(), Duration::from_millis(2380));
        assert_eq!(Difficulty::DEFAULT.tick_interval(), Duration::from_millis(1500));
        assert_eq!(Difficulty::MAX.tick_interval(), Duration::from_millis(400));

        let intervals: Vec<_> = (1..=10)
            .filter_map(Difficulty::new)
            .map(Difficulty::tick_interval)
            .collect();
        assert!(intervals.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_from_setting_fallbacks() {
        assert_eq!(Difficulty::from_setting(Some("3")).level(), 3);
        assert_eq!(Difficulty::from_setting(Some("0")), Difficulty::DEFAULT);
        assert_eq!(Difficulty::from_setting(Some("11")), Difficulty::DEFAULT);
        assert_eq!(Difficulty::from_setting(Some("-2")), Difficulty::DEFAULT);
        assert_eq!(Difficulty::from_setting(Some("")), Difficulty::DEFAULT);
        assert_eq!(Difficulty::from_setting(None), Difficulty::DEFAULT);
    }

    #[test]
    fn test_from_setting_reads_leading_digits() {
        assert_eq!(Difficulty::from_setting(Some("7abc")).level(), 7);
        assert_eq!(Difficulty::from_setting(Some("  10px")).level(), 10);
        assert_eq!(Difficulty::from_setting(Some("9.5")).level(), 9);
        assert_eq!(Difficulty::from_setting(Some("abc7")), Difficulty::DEFAULT);
        assert_eq!(Difficulty::from_setting(Some("300")), Difficulty::DEFAULT);
        assert_eq!(Difficulty::from_setting(Some("12x")), Difficulty::DEFAULT);
    }

    #[test]
    fn test_config_builder() {
        let config = SpitConfig::default()
            .with_seed(123)
            .with_difficulty(Difficulty::MAX);

        assert_eq!(config.seed, 123);
        assert_eq!(config.tick_interval(), Duration::from_millis(400));
    }

    #[test]
    fn test_config_serialization() {
        let config = SpitConfig::default().with_difficulty(Difficulty::MIN);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SpitConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        let bad = r#"{"seed":1,"difficulty":42}"#;
        assert!(serde_json::from_str::<SpitConfig>(bad).is_err());
    }
}
