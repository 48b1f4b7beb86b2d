//! Core plumbing shared by the engine and the batch driver: hand
//! identities, seeded randomness, configuration and errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, StrategyAssignment, DEFAULT_MAX_TURNS};
pub use error::{ConfigError, Error, StrategyError};
pub use player::{HandId, HandMap, MAX_HANDS};
pub use rng::GameRng;
