//! Deck generation and dealing.

use crate::core::{GameRng, HandId};
use crate::game::Hand;

use super::card::{Card, Rank, Suit};

/// Cards in a full deck: every suit crossed with every rank.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// Every (suit, rank) pair exactly once, suit-major.
#[must_use]
pub fn generate_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

/// A full deck in uniformly random order.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = generate_deck();
    rng.shuffle(&mut deck);
    deck
}

/// Shuffle a full deck and deal it round-robin: card `i` goes to hand
/// `i % hand_count`.
///
/// # Panics
///
/// Panics if `hand_count` is zero or exceeds the deck size.
#[must_use]
pub fn deal(hand_count: usize, rng: &mut GameRng) -> Vec<Hand> {
    assert!(
        (1..=DECK_SIZE).contains(&hand_count),
        "Hand count must be 1-{DECK_SIZE}"
    );

    let mut hands: Vec<Hand> = HandId::all(hand_count).map(Hand::new).collect();
    for (i, card) in shuffled_deck(rng).into_iter().enumerate() {
        hands[i % hand_count].deal(card);
    }
    hands
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_deck_is_complete() {
        let deck = generate_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(DECK_SIZE, 60);

        let unique: HashSet<_> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 60);
    }

    #[test]
    fn test_generate_deck_order() {
        let deck = generate_deck();
        assert_eq!(deck[0], Card::new(Suit::Hearts, Rank::One));
        assert_eq!(deck[14], Card::new(Suit::Hearts, Rank::Joker));
        assert_eq!(deck[15], Card::new(Suit::Diamond, Rank::One));
        assert_eq!(deck[59], Card::new(Suit::Clubs, Rank::Joker));
    }

    #[test]
    fn test_shuffled_deck_is_a_permutation() {
        let mut rng = GameRng::new(3);
        let shuffled = shuffled_deck(&mut rng);
        assert_ne!(shuffled, generate_deck());

        let unique: HashSet<_> = shuffled.iter().copied().collect();
        let full: HashSet<_> = generate_deck().into_iter().collect();
        assert_eq!(unique, full);
    }

    #[test]
    fn test_deal_five_hands() {
        let mut rng = GameRng::new(42);
        let hands = deal(5, &mut rng);

        assert_eq!(hands.len(), 5);
        for (i, hand) in hands.iter().enumerate() {
            assert_eq!(hand.id(), HandId::new(i as u8));
            assert_eq!(hand.len(), 12);
        }
    }

    #[test]
    fn test_deal_uneven_split() {
        let mut rng = GameRng::new(42);
        let sizes: Vec<_> = deal(7, &mut rng).iter().map(Hand::len).collect();

        // 60 = 7 * 8 + 4: the first four hands get the extra card.
        assert_eq!(sizes, vec![9, 9, 9, 9, 8, 8, 8]);
    }

    #[test]
    fn test_deal_is_seeded() {
        let a = deal(4, &mut GameRng::new(11));
        let b = deal(4, &mut GameRng::new(11));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "Hand count must be 1-60")]
    fn test_deal_zero_hands() {
        let _ = deal(0, &mut GameRng::new(1));
    }
}
