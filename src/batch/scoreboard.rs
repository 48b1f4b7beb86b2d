//! Finishing-position tallies across many games.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{HandId, HandMap};
use crate::game::RoundOutcome;

/// How often each hand finished in each position.
///
/// `positions[hand][p]` counts the counted games in which `hand` finished
/// in 0-based position `p`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    positions: HandMap<Vec<u32>>,
    games_played: u32,
    games_counted: u32,
    anomalies: u32,
    first_game: Option<Vec<HandId>>,
}

impl Scoreboard {
    #[must_use]
    pub fn new(hand_count: usize) -> Self {
        Self {
            positions: HandMap::with_value(hand_count, vec![0; hand_count]),
            games_played: 0,
            games_counted: 0,
            anomalies: 0,
            first_game: None,
        }
    }

    /// Tally one game. Games stopped by the turn ceiling are always counted
    /// as anomalies, and only enter the table when `include_anomalies` is set.
    pub fn record(&mut self, outcome: &RoundOutcome, include_anomalies: bool) {
        self.games_played += 1;
        if self.first_game.is_none() {
            self.first_game = Some(outcome.finishers.clone());
        }
        if outcome.is_anomalous() {
            self.anomalies += 1;
            if !include_anomalies {
                return;
            }
        }

        self.games_counted += 1;
        for (place, &hand) in outcome.finishers.iter().enumerate() {
            if let Some(row) = self.positions.get_mut(hand) {
                row[place] += 1;
            }
        }
    }

    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.positions.hand_count()
    }

    /// Games in which `hand` finished in 0-based `position`.
    #[must_use]
    pub fn count(&self, hand: HandId, position: usize) -> u32 {
        self.positions
            .get(hand)
            .and_then(|row| row.get(position))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn row(&self, hand: HandId) -> &[u32] {
        &self.positions[hand]
    }

    #[must_use]
    pub fn wins(&self, hand: HandId) -> u32 {
        self.count(hand, 0)
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Games that made it into the table.
    #[must_use]
    pub fn games_counted(&self) -> u32 {
        self.games_counted
    }

    /// Games stopped by the turn ceiling.
    #[must_use]
    pub fn anomalies(&self) -> u32 {
        self.anomalies
    }

    /// Finishing order of the first game recorded.
    #[must_use]
    pub fn first_game(&self) -> Option<&[HandId]> {
        self.first_game.as_deref()
    }
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8}", "hand")?;
        for position in 1..=self.hand_count() {
            write!(f, "{:>7}", ordinal(position))?;
        }
        writeln!(f)?;

        for (hand, row) in self.positions.iter() {
            write!(f, "{:<8}", hand.0)?;
            for count in row {
                write!(f, "{count:>7}")?;
            }
            writeln!(f)?;
        }

        write!(
            f,
            "{} games played, {} counted, {} hit the turn ceiling",
            self.games_played, self.games_counted, self.anomalies
        )
    }
}
