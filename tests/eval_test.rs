//! Тесты классификации пятикарточных рук (crate::eval).

use poker_showdown::domain::{Card, Hand, Rank, Suit};
use poker_showdown::eval::{classify, classify_cards, HandCategory, RankCounts};
use poker_showdown::DomainError;

use Rank::*;
use Suit::*;

/// Удобный конструктор карты.
fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand(cards: [Card; 5]) -> Hand {
    Hand::new(&cards).expect("valid 5-card hand")
}

/// Рука из строки вида "Ts Js Qs Ks As".
fn parse(s: &str) -> Hand {
    let cards: Vec<Card> = s.split_whitespace().map(|t| t.parse().unwrap()).collect();
    Hand::new(&cards).expect("valid 5-card hand")
}

/// Все перестановки 5 карт (120 штук).
fn permutations(cards: &[Card]) -> Vec<Vec<Card>> {
    if cards.len() <= 1 {
        return vec![cards.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..cards.len() {
        let mut rest = cards.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

//
// ---- Примеры по каждой категории ----
//

#[test]
fn royal_flush() {
    let h = hand([
        c(Ten, Spades),
        c(Jack, Spades),
        c(Queen, Spades),
        c(King, Spades),
        c(Ace, Spades),
    ]);
    assert_eq!(classify(&h), HandCategory::RoyalFlush);
}

#[test]
fn straight_flush_not_royal() {
    let h = hand([
        c(Five, Hearts),
        c(Six, Hearts),
        c(Seven, Hearts),
        c(Eight, Hearts),
        c(Nine, Hearts),
    ]);
    assert_eq!(classify(&h), HandCategory::StraightFlush);
}

#[test]
fn king_high_straight_flush_is_not_royal() {
    assert_eq!(classify(&parse("9d Td Jd Qd Kd")), HandCategory::StraightFlush);
}

/// Wheel A2345 – стрит, несмотря на туза = 14.
#[test]
fn ace_low_straight() {
    let h = hand([
        c(Ace, Diamonds),
        c(Two, Diamonds),
        c(Three, Clubs),
        c(Four, Spades),
        c(Five, Hearts),
    ]);
    assert_eq!(classify(&h), HandCategory::Straight);
}

/// Одномастный wheel – стрит-флеш, но не роял (младшая карта 2).
#[test]
fn ace_low_straight_flush() {
    assert_eq!(classify(&parse("Ac 2c 3c 4c 5c")), HandCategory::StraightFlush);
}

#[test]
fn broadway_straight_mixed_suits() {
    assert_eq!(classify(&parse("Tc Jd Qh Ks Ac")), HandCategory::Straight);
}

/// "Переход через туза" QKA23 стритом не считается.
#[test]
fn wrap_around_is_not_straight() {
    assert_eq!(classify(&parse("Qc Kd Ah 2s 3c")), HandCategory::HighCard);
    assert_eq!(classify(&parse("Jc Qd Kh As 2c")), HandCategory::HighCard);
}

#[test]
fn four_of_a_kind() {
    let h = hand([
        c(Seven, Spades),
        c(Seven, Hearts),
        c(Seven, Diamonds),
        c(Seven, Clubs),
        c(Two, Spades),
    ]);
    assert_eq!(classify(&h), HandCategory::FourOfAKind);
}

#[test]
fn full_house() {
    let h = hand([
        c(Nine, Spades),
        c(Nine, Hearts),
        c(Nine, Diamonds),
        c(Three, Clubs),
        c(Three, Spades),
    ]);
    assert_eq!(classify(&h), HandCategory::FullHouse);
}

#[test]
fn flush() {
    assert_eq!(classify(&parse("2h 7h 9h Jh Kh")), HandCategory::Flush);
}

#[test]
fn straight() {
    assert_eq!(classify(&parse("5c 6d 7h 8s 9c")), HandCategory::Straight);
}

#[test]
fn three_of_a_kind() {
    assert_eq!(classify(&parse("Qc Qd Qh 4s 9c")), HandCategory::ThreeOfAKind);
}

#[test]
fn two_pair() {
    assert_eq!(classify(&parse("Jc Jd 4h 4s Ac")), HandCategory::TwoPair);
}

#[test]
fn one_pair() {
    assert_eq!(classify(&parse("8c 8d 2h 5s Kc")), HandCategory::OnePair);
}

#[test]
fn high_card() {
    let h = hand([
        c(Two, Spades),
        c(Five, Hearts),
        c(Nine, Diamonds),
        c(Jack, Clubs),
        c(King, Spades),
    ]);
    assert_eq!(classify(&h), HandCategory::HighCard);
}

//
// ---- Свойства ----
//

/// Категория не зависит от порядка карт.
#[test]
fn classification_is_order_independent() {
    let samples = [
        "Ts Js Qs Ks As",
        "5h 6h 7h 8h 9h",
        "Ad 2d 3c 4s 5h",
        "7s 7h 7d 7c 2s",
        "9s 9h 9d 3c 3s",
        "2h 7h 9h Jh Kh",
        "Qc Qd Qh 4s 9c",
        "Jc Jd 4h 4s Ac",
        "8c 8d 2h 5s Kc",
        "2s 5h 9d Jc Ks",
    ];

    for s in samples {
        let base = parse(s);
        let expected = classify(&base);
        for perm in permutations(base.cards()) {
            let h = Hand::new(&perm).unwrap();
            assert_eq!(classify(&h), expected, "permutation of {s} changed category");
        }
    }
}

#[test]
fn categories_are_ordered_by_strength() {
    let all = HandCategory::ALL;
    for pair in all.windows(2) {
        assert!(pair[0] > pair[1], "{:?} must beat {:?}", pair[0], pair[1]);
    }
    assert_eq!(all.first(), Some(&HandCategory::RoyalFlush));
    assert_eq!(all.last(), Some(&HandCategory::HighCard));
}

#[test]
fn describe_gives_human_labels() {
    assert_eq!(HandCategory::FullHouse.describe(), "Full house");
    assert_eq!(HandCategory::RoyalFlush.to_string(), "Royal flush");
}

#[test]
fn rank_counts_groups() {
    let h = parse("9s 9h 9d 3c 3s");
    let counts = RankCounts::from_cards(h.cards());

    assert_eq!(counts.of(Nine), 3);
    assert_eq!(counts.of(Three), 2);
    assert_eq!(counts.of(Ace), 0);
    assert_eq!(counts.groups_of(3), 1);
    assert_eq!(counts.groups_of(2), 1);
    assert!(!counts.has_group_of(4));
    // 13 рангов, два из них заняты.
    assert_eq!(counts.groups_of(0), 11);
}

#[test]
fn classify_cards_validates_input() {
    let four: Vec<Card> = vec![c(Two, Spades), c(Three, Spades), c(Four, Spades), c(Five, Spades)];
    assert_eq!(classify_cards(&four), Err(DomainError::InvalidHandSize(4)));

    let dup = [c(Two, Spades), c(Two, Spades), c(Four, Spades), c(Five, Spades), c(Six, Spades)];
    assert_eq!(
        classify_cards(&dup),
        Err(DomainError::DuplicateCard(c(Two, Spades)))
    );

    let ok = [c(Two, Spades), c(Three, Spades), c(Four, Spades), c(Five, Spades), c(Six, Spades)];
    assert_eq!(classify_cards(&ok), Ok(HandCategory::StraightFlush));
}
