//! Game configuration.
//!
//! A `GameConfig` describes one table: how many hands are dealt, which hand
//! leads, which strategy each hand follows, and how many turns a round may
//! take before it is cut off. Configs are built with `with_*` methods and
//! checked by `validate` before a round starts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::game::{NoopObserver, RoundObserver, Strategy, TracingObserver};

use super::error::{ConfigError, StrategyError};
use super::player::{HandId, HandMap, MAX_HANDS};

/// Default per-round turn ceiling.
pub const DEFAULT_MAX_TURNS: usize = 10_000;

/// Strategy for every hand: one default plus per-hand overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyAssignment {
    pub default: Strategy,
    pub overrides: BTreeMap<HandId, Strategy>,
}

impl StrategyAssignment {
    /// Every hand plays `strategy`.
    #[must_use]
    pub fn uniform(strategy: Strategy) -> Self {
        Self {
            default: strategy,
            overrides: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn strategy_for(&self, hand: HandId) -> Strategy {
        self.overrides.get(&hand).copied().unwrap_or(self.default)
    }

    /// Resolve the assignment for a table of `hand_count` hands.
    pub fn resolve(&self, hand_count: usize) -> Result<HandMap<Strategy>, ConfigError> {
        if let Some((&hand, _)) = self.overrides.iter().find(|(h, _)| h.index() >= hand_count) {
            return Err(ConfigError::UnknownHand { hand, hand_count });
        }
        Ok(HandMap::new(hand_count, |hand| self.strategy_for(hand)))
    }
}

/// Configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of hands dealt (2-60).
    pub hand_count: usize,

    /// Position of the leading hand.
    pub starter: usize,

    pub strategies: StrategyAssignment,

    /// Turns allowed before the round is stopped and flagged.
    pub max_turns: usize,

    /// Emit a per-turn trace through `tracing`.
    pub trace: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_count: 5,
            starter: 0,
            strategies: StrategyAssignment::default(),
            max_turns: DEFAULT_MAX_TURNS,
            trace: false,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(hand_count: usize) -> Self {
        Self {
            hand_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_starter(mut self, starter: usize) -> Self {
        self.starter = starter;
        self
    }

    /// Strategy for every hand without an override.
    #[must_use]
    pub fn with_default_strategy(mut self, strategy: Strategy) -> Self {
        self.strategies.default = strategy;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, hand: HandId, strategy: Strategy) -> Self {
        self.strategies.overrides.insert(hand, strategy);
        self
    }

    /// Override one hand's strategy from a text tag such as `"highest"`.
    pub fn with_strategy_tag(self, hand: HandId, tag: &str) -> Result<Self, StrategyError> {
        let strategy: Strategy = tag.parse()?;
        Ok(self.with_strategy(hand, strategy))
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_HANDS).contains(&self.hand_count) {
            return Err(ConfigError::HandCount(self.hand_count));
        }
        if self.starter >= self.hand_count {
            return Err(ConfigError::Starter {
                starter: self.starter,
                hand_count: self.hand_count,
            });
        }
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroTurnCeiling);
        }
        self.strategies.resolve(self.hand_count).map(|_| ())
    }

    /// Observer matching the trace toggle.
    #[must_use]
    pub fn observer(&self) -> Box<dyn RoundObserver> {
        if self.trace {
            Box::new(TracingObserver)
        } else {
            Box::new(NoopObserver)
        }
    }
}
