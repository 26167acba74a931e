//! RNG tests
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - отсутствие повторяющихся карт после shuffle
//! - работу Deck + shuffle + RandomSource

use std::collections::HashSet;

use poker_showdown::domain::deck::Deck;
use poker_showdown::engine::{GameConfig, PokerGame, RandomSource};
use poker_showdown::infra::{DeterministicRng, SystemRng};

#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

#[test]
fn deck_shuffle_keeps_52_unique_cards() {
    let mut deck = Deck::standard_52();
    let mut rng = DeterministicRng::from_seed(999);

    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), 52);
    let set: HashSet<_> = deck.cards.iter().collect();
    assert_eq!(set.len(), 52);
    assert_ne!(deck, Deck::standard_52(), "Shuffle must change the order");
}

#[test]
fn shuffle_only_touches_remaining_cards() {
    let mut deck = Deck::standard_52();
    let mut rng = DeterministicRng::from_seed(5);

    let dealt = deck.deal(5).unwrap();
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), 47);
    for card in &dealt {
        assert!(!deck.cards.contains(card));
    }
}

#[test]
fn same_seed_same_game() {
    let config = GameConfig::default();
    let g1 = PokerGame::deal(&config, &mut DeterministicRng::from_seed(77)).unwrap();
    let g2 = PokerGame::deal(&config, &mut DeterministicRng::from_seed(77)).unwrap();
    assert_eq!(g1, g2);
}

#[test]
fn system_rng_deals_valid_game() {
    let mut rng = SystemRng;
    let game = PokerGame::deal(&GameConfig::default(), &mut rng).unwrap();
    assert_eq!(game.hands().len(), 5);
    assert!(game.determine_winner().is_some());
}
