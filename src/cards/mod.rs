//! Card model: ranks, suits and the 60-card deck.
//!
//! The deck holds ranks One through Ace plus a Joker in each of the four
//! suits. Ranks decide who may play on whom; suits only keep cards distinct.

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{deal, generate_deck, shuffled_deck, DECK_SIZE};
