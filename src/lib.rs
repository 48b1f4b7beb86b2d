//! # president-sim
//!
//! Simulates a President-style trick-elimination card game to compare
//! play strategies over many randomized games.
//!
//! ## The game
//!
//! A 60-card deck (ranks One to Ace plus a Joker, in four suits) is dealt
//! round-robin to every hand. On its turn a hand must play a card ranked
//! strictly above the top of the heap, or pass. When play comes back to the
//! hand that made the last play, the trick is reopened and that hand may
//! lead anything. Hands drop out as they empty; the first out wins and the
//! last one left loses.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness flows through a seeded `GameRng`
//!    passed in by the caller. Same seed, same game.
//!
//! 2. **Side-effect free engine**: the round never logs by itself; it
//!    reports to an injected `RoundObserver`.
//!
//! 3. **Bounded**: every round has a turn ceiling, and a round stopped by
//!    it says so on its outcome.
//!
//! ## Modules
//!
//! - `core`: hand ids, per-hand storage, RNG, configuration, errors
//! - `cards`: cards, ranks, suits, deck generation and dealing
//! - `game`: hands, strategies, the heap and the round engine
//! - `batch`: chained multi-game runs and the finishing-position table

pub mod batch;
pub mod cards;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Error, GameConfig, GameRng, HandId, HandMap, StrategyAssignment,
    StrategyError, DEFAULT_MAX_TURNS, MAX_HANDS,
};

pub use crate::cards::{deal, generate_deck, shuffled_deck, Card, Rank, Suit, DECK_SIZE};

pub use crate::game::{
    play_round, EventLog, Hand, Heap, HeapEntry, NoopObserver, Round, RoundEvent, RoundObserver,
    RoundOutcome, RoundStatus, Strategy, Termination, TracingObserver,
};

pub use crate::batch::{Batch, BatchConfig, Scoreboard};
