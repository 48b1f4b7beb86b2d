//! The round engine.
//!
//! A round runs turns until one hand is left or the turn ceiling is hit.
//! Each turn:
//!
//! 1. If the hand due to play also made the last play, everyone else has
//!    passed or gone out since, so a sentinel reopens the trick.
//! 2. The hand's strategy picks a card that beats the heap top; the card
//!    moves to the heap. With nothing eligible the hand passes.
//! 3. A hand left empty drops out and is recorded as the next finisher.
//! 4. The turn counter advances.
//!
//! The hand due to play is `active[(starter + turn) % active.len()]`,
//! taken over the active list as it stands on that turn. Once hands drop
//! out, seats shift under the formula, so the hand after `X` is not always
//! the same hand.

use serde::{Deserialize, Serialize};

use crate::cards::deal;
use crate::core::{ConfigError, Error, GameConfig, GameRng, HandId, HandMap, StrategyAssignment, MAX_HANDS};

use super::hand::Hand;
use super::heap::Heap;
use super::observer::{RoundEvent, RoundObserver};
use super::strategy::Strategy;

/// Why a round stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    /// Only one hand was left.
    Completed,
    /// The turn ceiling ran out with several hands still playing. The
    /// finishing order past the last real finisher is not meaningful.
    TurnCeiling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Running,
    Finished(Termination),
}

/// Result of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Every hand once, winner first, loser last.
    pub finishers: Vec<HandId>,
    pub termination: Termination,
    pub turns: usize,
    /// Tricks reopened after a deadlock.
    pub trick_resets: usize,
    /// Seed of the generator the round was dealt from, when known.
    pub seed: Option<u64>,
}

impl RoundOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<HandId> {
        self.finishers.first().copied()
    }

    #[must_use]
    pub fn loser(&self) -> Option<HandId> {
        self.finishers.last().copied()
    }

    /// 0-based finishing position of `hand`.
    #[must_use]
    pub fn position_of(&self, hand: HandId) -> Option<usize> {
        self.finishers.iter().position(|&h| h == hand)
    }

    #[must_use]
    pub fn is_anomalous(&self) -> bool {
        self.termination == Termination::TurnCeiling
    }
}

/// State of a round in progress.
#[derive(Clone, Debug)]
pub struct Round {
    hands: HandMap<Hand>,
    strategies: HandMap<Strategy>,
    active: Vec<HandId>,
    heap: Heap,
    finishers: Vec<HandId>,
    starter: usize,
    turn: usize,
    max_turns: usize,
    last_played: Option<HandId>,
    trick_resets: usize,
    status: RoundStatus,
}

impl Round {
    /// Set up a round over already dealt hands.
    ///
    /// `hands` must be ordered by id, starting at `HandId(0)`.
    pub fn new(
        hands: Vec<Hand>,
        strategies: &StrategyAssignment,
        starter: usize,
        max_turns: usize,
    ) -> Result<Self, ConfigError> {
        let hand_count = hands.len();
        if !(2..=MAX_HANDS).contains(&hand_count) {
            return Err(ConfigError::HandCount(hand_count));
        }
        if starter >= hand_count {
            return Err(ConfigError::Starter { starter, hand_count });
        }
        if max_turns == 0 {
            return Err(ConfigError::ZeroTurnCeiling);
        }
        if let Some((position, hand)) = hands
            .iter()
            .enumerate()
            .find(|(i, h)| h.id().index() != *i)
        {
            return Err(ConfigError::HandOrder { position, found: hand.id() });
        }

        let strategies = strategies.resolve(hand_count)?;
        let hands = HandMap::from_vec(hands);
        let active = hands.hand_ids().collect();

        Ok(Self {
            hands,
            strategies,
            active,
            heap: Heap::new(),
            finishers: Vec::with_capacity(hand_count),
            starter,
            turn: 0,
            max_turns,
            last_played: None,
            trick_resets: 0,
            status: RoundStatus::Running,
        })
    }

    /// Deal a fresh deck per `config` and set up the round.
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let hands = deal(config.hand_count, rng);
        Self::new(hands, &config.strategies, config.starter, config.max_turns)
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Hand due to play this turn, `None` once the round is over.
    #[must_use]
    pub fn current(&self) -> Option<HandId> {
        match self.status {
            RoundStatus::Running => Some(self.active[(self.starter + self.turn) % self.active.len()]),
            RoundStatus::Finished(_) => None,
        }
    }

    #[must_use]
    pub fn hands(&self) -> &HandMap<Hand> {
        &self.hands
    }

    #[must_use]
    pub fn active(&self) -> &[HandId] {
        &self.active
    }

    #[must_use]
    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    #[must_use]
    pub fn finishers(&self) -> &[HandId] {
        &self.finishers
    }

    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub fn last_played(&self) -> Option<HandId> {
        self.last_played
    }

    /// Play one turn.
    pub fn step(&mut self, rng: &mut GameRng, observer: &mut dyn RoundObserver) -> RoundStatus {
        let Some(current) = self.current() else {
            return self.status;
        };
        let turn = self.turn;

        if self.last_played == Some(current) {
            self.heap.reset();
            self.trick_resets += 1;
            observer.on_event(&RoundEvent::TrickReset { turn, hand: current });
        }

        let beat = self.heap.top();
        let hand = &mut self.hands[current];
        match self.strategies[current].select(hand, beat, rng) {
            Some(index) => {
                let card = hand.remove(index);
                self.heap.push(card);
                self.last_played = Some(current);
                observer.on_event(&RoundEvent::Played { turn, hand: current, card });
            }
            None => {
                observer.on_event(&RoundEvent::Passed { turn, hand: current, beat });
            }
        }

        if hand.is_empty() {
            self.active.retain(|&h| h != current);
            self.finishers.push(current);
            observer.on_event(&RoundEvent::Finished {
                turn,
                hand: current,
                position: self.finishers.len(),
            });
        }

        self.turn += 1;

        if self.active.len() <= 1 {
            self.finish(Termination::Completed, observer);
        } else if self.turn >= self.max_turns {
            self.finish(Termination::TurnCeiling, observer);
        }
        self.status
    }

    /// Append the hands still playing, in active order, and stop.
    fn finish(&mut self, termination: Termination, observer: &mut dyn RoundObserver) {
        if termination == Termination::TurnCeiling {
            observer.on_event(&RoundEvent::CeilingHit {
                turn: self.turn,
                remaining: self.active.len(),
            });
        }

        for hand in std::mem::take(&mut self.active) {
            self.finishers.push(hand);
            observer.on_event(&RoundEvent::Finished {
                turn: self.turn,
                hand,
                position: self.finishers.len(),
            });
        }
        self.status = RoundStatus::Finished(termination);
    }

    /// Play turns until the round is over.
    pub fn run(mut self, rng: &mut GameRng, observer: &mut dyn RoundObserver) -> RoundOutcome {
        while self.step(rng, observer) == RoundStatus::Running {}

        let termination = match self.status {
            RoundStatus::Finished(termination) => termination,
            RoundStatus::Running => Termination::TurnCeiling,
        };
        RoundOutcome {
            finishers: self.finishers,
            termination,
            turns: self.turn,
            trick_resets: self.trick_resets,
            seed: None,
        }
    }
}

/// Deal and play one game, returning its finishing order.
///
/// The deal and every random choice draw on `rng`; its seed is recorded on
/// the outcome.
pub fn play_round(
    config: &GameConfig,
    rng: &mut GameRng,
    observer: &mut dyn RoundObserver,
) -> Result<RoundOutcome, Error> {
    let round = Round::deal(config, rng)?;
    for (hand, cards) in round.hands().iter() {
        observer.on_event(&RoundEvent::Dealt {
            hand,
            cards: cards.cards().to_vec(),
        });
    }

    let mut outcome = round.run(rng, observer);
    outcome.seed = Some(rng.seed());
    Ok(outcome)
}
