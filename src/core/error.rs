//! Error taxonomy.
//!
//! Only configuration mistakes are errors. A deadlocked trick is recovered
//! inside the round, and a game stopped by the turn ceiling is reported on
//! its outcome, not here.

use thiserror::Error;

use super::player::HandId;

/// A strategy tag that names no known policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("unknown strategy `{0}` (expected lowest, highest or random)")]
    UnknownTag(String),

    #[error("unknown strategy code {0} (expected 0, 1 or 2)")]
    UnknownCode(u8),

    #[error("malformed strategy assignment `{0}` (expected <hand>=<strategy>)")]
    MalformedAssignment(String),
}

/// A game configuration the engine refuses to run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("hand count {0} is outside 2..=60")]
    HandCount(usize),

    #[error("starter {starter} is not a hand at a {hand_count}-hand table")]
    Starter { starter: usize, hand_count: usize },

    #[error("strategy assigned to {hand}, but the table has {hand_count} hands")]
    UnknownHand { hand: HandId, hand_count: usize },

    #[error("turn ceiling must be at least 1")]
    ZeroTurnCeiling,

    #[error("hand at position {position} is {found}, expected hands ordered by id")]
    HandOrder { position: usize, found: HandId },
}

/// Any error surfaced by the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = StrategyError::UnknownTag("bluff".into());
        assert_eq!(
            err.to_string(),
            "unknown strategy `bluff` (expected lowest, highest or random)"
        );

        let err = ConfigError::Starter { starter: 5, hand_count: 5 };
        assert_eq!(err.to_string(), "starter 5 is not a hand at a 5-hand table");

        let err = ConfigError::HandOrder { position: 0, found: HandId::new(1) };
        assert_eq!(
            err.to_string(),
            "hand at position 0 is Hand 1, expected hands ordered by id"
        );
    }

    #[test]
    fn test_from_conversions() {
        let err: Error = StrategyError::UnknownCode(9).into();
        assert!(matches!(err, Error::Strategy(StrategyError::UnknownCode(9))));

        let err: Error = ConfigError::ZeroTurnCeiling.into();
        assert_eq!(err.to_string(), "turn ceiling must be at least 1");
    }
}
