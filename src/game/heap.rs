//! The shared discard pile.
//!
//! The heap keeps every play of the game in order. A `Sentinel` entry opens
//! a trick: while it is on top there is nothing to beat.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeapEntry {
    /// Start of a trick, any card may follow.
    Sentinel,
    Card(Card),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heap {
    entries: Vec<HeapEntry>,
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heap {
    /// A heap opened by a single sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![HeapEntry::Sentinel],
        }
    }

    /// Card to beat, `None` when a trick has just been opened.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        match self.entries.last() {
            Some(HeapEntry::Card(card)) => Some(*card),
            Some(HeapEntry::Sentinel) | None => None,
        }
    }

    pub fn push(&mut self, card: Card) {
        self.entries.push(HeapEntry::Card(card));
    }

    /// Open a new trick.
    pub fn reset(&mut self) {
        self.entries.push(HeapEntry::Sentinel);
    }

    #[must_use]
    pub fn entries(&self) -> &[HeapEntry] {
        &self.entries
    }

    /// Played cards, oldest first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            HeapEntry::Card(card) => Some(*card),
            HeapEntry::Sentinel => None,
        })
    }
}
