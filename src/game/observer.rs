//! Per-turn trace of a round.
//!
//! The engine never logs on its own. Callers hand it a `RoundObserver`:
//! `NoopObserver` for batch runs, `TracingObserver` to emit `tracing`
//! events, or `EventLog` to keep the events for inspection.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::cards::Card;
use crate::core::HandId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A hand's cards after the deal.
    Dealt { hand: HandId, cards: Vec<Card> },
    /// The hand due to play also played last, so the trick was reopened.
    TrickReset { turn: usize, hand: HandId },
    Played { turn: usize, hand: HandId, card: Card },
    /// Nothing in the hand beats `beat`.
    Passed { turn: usize, hand: HandId, beat: Option<Card> },
    /// `position` is 1-based.
    Finished { turn: usize, hand: HandId, position: usize },
    /// The turn ceiling stopped the round with `remaining` hands still in.
    CeilingHit { turn: usize, remaining: usize },
}

pub trait RoundObserver {
    fn on_event(&mut self, event: &RoundEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {
    fn on_event(&mut self, _event: &RoundEvent) {}
}

/// Forwards events to `tracing`. Turn detail is `debug`, the deal is
/// `trace`, and a ceiling hit is a warning.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl RoundObserver for TracingObserver {
    fn on_event(&mut self, event: &RoundEvent) {
        match event {
            RoundEvent::Dealt { hand, cards } => {
                trace!(%hand, cards = ?cards, "dealt");
            }
            RoundEvent::TrickReset { turn, hand } => {
                debug!(turn, %hand, "deadlock, reopening trick");
            }
            RoundEvent::Played { turn, hand, card } => {
                debug!(turn, %hand, %card, "played");
            }
            RoundEvent::Passed { turn, hand, beat } => match beat {
                Some(beat) => debug!(turn, %hand, %beat, "cannot beat, passing"),
                None => debug!(turn, %hand, "cannot play, passing"),
            },
            RoundEvent::Finished { turn, hand, position } => {
                debug!(turn, %hand, position, "finished");
            }
            RoundEvent::CeilingHit { turn, remaining } => {
                warn!(turn, remaining, "turn ceiling hit, round stopped early");
            }
        }
    }
}

/// Records every event in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<RoundEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events other than the deal.
    pub fn turns(&self) -> impl Iterator<Item = &RoundEvent> {
        self.events
            .iter()
            .filter(|e| !matches!(e, RoundEvent::Dealt { .. }))
    }

    #[must_use]
    pub fn trick_resets(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RoundEvent::TrickReset { .. }))
            .count()
    }
}

impl RoundObserver for EventLog {
    fn on_event(&mut self, event: &RoundEvent) {
        self.events.push(event.clone());
    }
}
