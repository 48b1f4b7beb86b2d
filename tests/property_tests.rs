//! Property tests over randomly seeded decks, deals and rounds.

use proptest::prelude::*;
use proptest::strategy::Strategy as _;
use std::collections::HashSet;

use president_sim::{
    deal, generate_deck, play_round, shuffled_deck, Card, GameConfig, GameRng, Hand, HandId,
    NoopObserver, Rank, Strategy, Suit, DECK_SIZE,
};

fn strategy() -> impl proptest::strategy::Strategy<Value = Strategy> {
    prop_oneof![
        Just(Strategy::Lowest),
        Just(Strategy::Highest),
        Just(Strategy::Random),
    ]
}

fn card() -> impl proptest::strategy::Strategy<Value = Card> {
    (0..4usize, 1..=15u8).prop_map(|(suit, value)| {
        Card::new(Suit::ALL[suit], Rank::from_value(value).unwrap_or(Rank::Joker))
    })
}

#[test]
fn test_deck_has_every_card_once() {
    let deck = generate_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&Card::new(suit, rank)));
        }
    }
}

proptest! {
    #[test]
    fn prop_shuffle_is_a_permutation(seed in any::<u64>()) {
        let shuffled: HashSet<Card> = shuffled_deck(&mut GameRng::new(seed)).into_iter().collect();
        let full: HashSet<Card> = generate_deck().into_iter().collect();
        prop_assert_eq!(shuffled, full);
    }

    #[test]
    fn prop_deal_conserves_cards(hand_count in 1..=DECK_SIZE, seed in any::<u64>()) {
        let hands = deal(hand_count, &mut GameRng::new(seed));
        prop_assert_eq!(hands.len(), hand_count);

        let sizes: Vec<usize> = hands.iter().map(Hand::len).collect();
        prop_assert_eq!(sizes.iter().sum::<usize>(), DECK_SIZE);

        let max = sizes.iter().max().copied().unwrap_or(0);
        let min = sizes.iter().min().copied().unwrap_or(0);
        prop_assert!(max - min <= 1);

        let unique: HashSet<Card> = hands.iter().flat_map(|h| h.cards().iter().copied()).collect();
        prop_assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn prop_round_returns_a_permutation(
        hand_count in 2..=8usize,
        starter_seed in any::<usize>(),
        default in strategy(),
        seed in any::<u64>(),
    ) {
        let config = GameConfig::new(hand_count)
            .with_starter(starter_seed % hand_count)
            .with_default_strategy(default);

        let outcome = play_round(&config, &mut GameRng::new(seed), &mut NoopObserver).unwrap();

        let mut sorted = outcome.finishers.clone();
        sorted.sort();
        prop_assert_eq!(sorted, HandId::all(hand_count).collect::<Vec<_>>());
    }

    #[test]
    fn prop_selection_only_returns_beating_cards(
        cards in prop::collection::vec(card(), 0..20),
        beat in proptest::option::of(card()),
        policy in strategy(),
        seed in any::<u64>(),
    ) {
        let hand = Hand::with_cards(HandId::new(0), cards.iter().copied());
        let mut rng = GameRng::new(seed);
        let can_play = cards.iter().any(|c| beat.map_or(true, |b| c.rank > b.rank));

        match hand.select(policy, beat, &mut rng) {
            Some(index) => {
                prop_assert!(can_play);
                if let Some(b) = beat {
                    prop_assert!(cards[index].rank > b.rank);
                }
            }
            None => prop_assert!(!can_play),
        }
    }

    #[test]
    fn prop_lowest_and_highest_pick_first_extreme(
        cards in prop::collection::vec(card(), 1..20),
    ) {
        let hand = Hand::with_cards(HandId::new(0), cards.iter().copied());
        let mut rng = GameRng::new(0);

        let low = hand.select(Strategy::Lowest, None, &mut rng).unwrap();
        let high = hand.select(Strategy::Highest, None, &mut rng).unwrap();

        let min_rank = cards.iter().map(|c| c.rank).min().unwrap();
        let max_rank = cards.iter().map(|c| c.rank).max().unwrap();
        prop_assert_eq!(low, cards.iter().position(|c| c.rank == min_rank).unwrap());
        prop_assert_eq!(high, cards.iter().position(|c| c.rank == max_rank).unwrap());
    }
}
