//! Batch driver: many games in a row, tallied into a scoreboard.
//!
//! Games are chained the way a real table plays: the winner of one game
//! leads the next. Each game is dealt from its own generator, forked from
//! the batch seed, so a batch is reproducible from `(seed, config)` and a
//! single game can be replayed from the seed on its outcome.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Error, GameConfig, GameRng};
use crate::game::{play_round, RoundObserver, RoundOutcome};

use super::scoreboard::Scoreboard;

/// Configuration for a batch of games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of games to play.
    pub games: usize,

    /// Master seed; game seeds are forked from it.
    pub seed: u64,

    /// Tally games stopped by the turn ceiling along with the rest.
    pub include_anomalies: bool,

    /// Log progress every this many games (0 = never).
    pub progress_every: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            seed: 42,
            include_anomalies: true,
            progress_every: 100,
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_include_anomalies(mut self, include: bool) -> Self {
        self.include_anomalies = include;
        self
    }

    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }
}

/// Runs a batch of chained games.
pub struct Batch {
    game: GameConfig,
    config: BatchConfig,
}

impl Batch {
    pub fn new(game: GameConfig, config: BatchConfig) -> Self {
        Self { game, config }
    }

    pub fn game_config(&self) -> &GameConfig {
        &self.game
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Play every game and return the outcomes in order.
    ///
    /// The first game is led by the configured starter, each later one by
    /// the previous winner.
    pub fn play(&self, observer: &mut dyn RoundObserver) -> Result<Vec<RoundOutcome>, Error> {
        self.game.validate()?;

        let mut master = GameRng::new(self.config.seed);
        let mut outcomes = Vec::with_capacity(self.config.games);
        let mut game = self.game.clone();

        for index in 0..self.config.games {
            let mut rng = master.fork();
            let outcome = play_round(&game, &mut rng, observer)?;

            if index == 0 {
                info!(finishers = ?outcome.finishers, "first game");
            }
            if let Some(winner) = outcome.winner() {
                game.starter = winner.index();
            }
            if self.config.progress_every > 0 && (index + 1) % self.config.progress_every == 0 {
                info!(played = index + 1, total = self.config.games, "progress");
            }

            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Play every game and tally the finishing positions.
    pub fn run(&self, observer: &mut dyn RoundObserver) -> Result<Scoreboard, Error> {
        let outcomes = self.play(observer)?;

        let mut board = Scoreboard::new(self.game.hand_count);
        for outcome in &outcomes {
            board.record(outcome, self.config.include_anomalies);
        }

        info!(
            played = board.games_played(),
            counted = board.games_counted(),
            anomalies = board.anomalies(),
            "batch complete"
        );
        Ok(board)
    }
}
