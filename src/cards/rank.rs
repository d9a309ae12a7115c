//! Card ranks.
//!
//! Spit ignores suits entirely, so a card is just its rank.

use serde::{Deserialize, Serialize};

use crate::core::SpitError;

/// A card rank from Ace (1) to King (13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, or `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw rank value (1..=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All thirteen ranks, Ace to King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = SpitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or(SpitError::InvalidRank(value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert!(Rank::new(0).is_none());
        assert!(Rank::new(14).is_none());
        assert_eq!(Rank::new(1), Some(Rank::ACE));
        assert_eq!(Rank::new(13), Some(Rank::KING));
        assert_eq!(Rank::all().count(), 13);
    }

    #[test]
    fn test_rank_symbols() {
        let symbols: Vec<String> = Rank::all().map(|r| r.to_string()).collect();
        assert_eq!(
            symbols,
            vec!["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"]
        );
    }

    #[test]
    fn test_rank_serde_validates() {
        let json = serde_json::to_string(&Rank::QUEEN).unwrap();
        assert_eq!(json, "12");
        assert_eq!(serde_json::from_str::<Rank>("12").unwrap(), Rank::QUEEN);
        assert!(serde_json::from_str::<Rank>("0").is_err());
        assert!(serde_json::from_str::<Rank>("99").is_err());
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Rank::try_from(7).map(Rank::value), Ok(7));
        assert_eq!(Rank::try_from(20), Err(SpitError::InvalidRank(20)));
    }
}
