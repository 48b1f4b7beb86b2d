//! A player's hand and the card-selection queries strategies are built on.
//!
//! Cards stay in the order they were dealt. Every query answers with an
//! index into that order, and ties between equal ranks go to the card that
//! comes first in it, so identical hands always give identical answers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{GameRng, HandId};

use super::strategy::Strategy;

/// Inline capacity covers a full share at tables of four or more.
pub type HandCards = SmallVec<[Card; 16]>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    id: HandId,
    cards: HandCards,
}

impl Hand {
    #[must_use]
    pub fn new(id: HandId) -> Self {
        Self {
            id,
            cards: HandCards::new(),
        }
    }

    /// A hand already holding `cards`, in that order.
    #[must_use]
    pub fn with_cards(id: HandId, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            id,
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn id(&self) -> HandId {
        self.id
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// An empty hand has finished the game.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn deal(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Take the card at `index` out of the hand, keeping the others in order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }

    /// Cards that may be played on `beat`, with their storage indices.
    ///
    /// With no card to beat every card is eligible.
    pub fn eligible(&self, beat: Option<Card>) -> impl Iterator<Item = (usize, &Card)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(move |(_, card)| beat.map_or(true, |top| card.beats(&top)))
    }

    /// Index of the lowest-ranked eligible card.
    #[must_use]
    pub fn lowest(&self, beat: Option<Card>) -> Option<usize> {
        self.eligible(beat)
            .reduce(|best, next| if next.1.rank < best.1.rank { next } else { best })
            .map(|(index, _)| index)
    }

    /// Index of the highest-ranked eligible card.
    #[must_use]
    pub fn highest(&self, beat: Option<Card>) -> Option<usize> {
        self.eligible(beat)
            .reduce(|best, next| if next.1.rank > best.1.rank { next } else { best })
            .map(|(index, _)| index)
    }

    /// Index of a uniformly chosen eligible card.
    pub fn random(&self, beat: Option<Card>, rng: &mut GameRng) -> Option<usize> {
        let candidates: SmallVec<[usize; 16]> = self.eligible(beat).map(|(index, _)| index).collect();
        rng.choose(&candidates).copied()
    }

    /// Ask `strategy` which card to play on `beat`. `None` means pass.
    pub fn select(&self, strategy: Strategy, beat: Option<Card>, rng: &mut GameRng) -> Option<usize> {
        strategy.select(self, beat, rng)
    }
}
