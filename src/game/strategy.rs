//! Card-selection policies.
//!
//! A strategy is a closed set of tags resolved by `match`. Tags arriving as
//! text or numeric codes are checked at that boundary; an unknown tag is a
//! `StrategyError`, never a silent fallback.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::Card;
use crate::core::{GameRng, StrategyError};

use super::hand::Hand;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Play the lowest card that beats the table.
    Lowest,
    /// Play the highest card that beats the table.
    Highest,
    /// Play any card that beats the table, uniformly at random.
    #[default]
    Random,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Lowest, Strategy::Highest, Strategy::Random];

    /// Numeric code: 0 lowest, 1 highest, 2 random.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Strategy::Lowest => 0,
            Strategy::Highest => 1,
            Strategy::Random => 2,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Lowest => "lowest",
            Strategy::Highest => "highest",
            Strategy::Random => "random",
        }
    }

    /// Index into `hand` of the card to play on `beat`, or `None` to pass.
    pub fn select(self, hand: &Hand, beat: Option<Card>, rng: &mut GameRng) -> Option<usize> {
        match self {
            Strategy::Lowest => hand.lowest(beat),
            Strategy::Highest => hand.highest(beat),
            Strategy::Random => hand.random(beat, rng),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = StrategyError;

    /// Accepts the tag names case-insensitively, with or without a `play_`
    /// prefix, or a numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        if let Ok(code) = tag.parse::<u8>() {
            return Strategy::try_from(code);
        }

        match tag.strip_prefix("play_").unwrap_or(&tag) {
            "lowest" => Ok(Strategy::Lowest),
            "highest" => Ok(Strategy::Highest),
            "random" => Ok(Strategy::Random),
            _ => Err(StrategyError::UnknownTag(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Strategy {
    type Error = StrategyError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Strategy::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or(StrategyError::UnknownCode(code))
    }
}
