use crate::domain::card::Card;
use crate::domain::errors::DomainError;
use crate::domain::hand::{Hand, HAND_SIZE};

use super::hand_category::HandCategory;
use super::rank_counts::RankCounts;

/// Младший стрит (wheel): A2345, отсортированные значения с тузом = 14.
const WHEEL: [u8; HAND_SIZE] = [2, 3, 4, 5, 14];

/// Главная функция: категория пятикарточной руки.
///
/// Проверки идут от старшей категории к младшей, первое совпадение
/// и есть ответ. Порядок важен: стрит-флеш одновременно и стрит, и флеш.
pub fn classify(hand: &Hand) -> HandCategory {
    let cards = hand.cards();
    let counts = RankCounts::from_cards(cards);
    let flush = is_flush(cards);
    let straight = is_straight(cards);

    let category = if flush && straight && min_value(cards) == 10 {
        HandCategory::RoyalFlush
    } else if flush && straight {
        HandCategory::StraightFlush
    } else if counts.has_group_of(4) {
        HandCategory::FourOfAKind
    } else if counts.groups_of(3) == 1 && counts.groups_of(2) == 1 {
        HandCategory::FullHouse
    } else if flush {
        HandCategory::Flush
    } else if straight {
        HandCategory::Straight
    } else if counts.has_group_of(3) {
        HandCategory::ThreeOfAKind
    } else if counts.groups_of(2) == 2 {
        HandCategory::TwoPair
    } else if counts.groups_of(2) == 1 {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    };

    log::debug!("classified {hand} as {category}");
    category
}

/// То же самое для произвольного среза: сначала собираем `Hand`
/// (проверка размера и дубликатов), потом классифицируем.
pub fn classify_cards(cards: &[Card]) -> Result<HandCategory, DomainError> {
    Hand::new(cards).map(|hand| classify(&hand))
}

fn is_flush(cards: &[Card; HAND_SIZE]) -> bool {
    let suit = cards[0].suit;
    cards.iter().all(|c| c.suit == suit)
}

/// Стрит: 5 значений подряд, либо ровно {2,3,4,5,14}.
///
/// Другие "переходы через туза" (QKA23 и т.п.) стритом не считаются.
fn is_straight(cards: &[Card; HAND_SIZE]) -> bool {
    let values = sorted_values(cards);
    let sequential = values.windows(2).all(|w| w[1] == w[0] + 1);
    sequential || values == WHEEL
}

fn sorted_values(cards: &[Card; HAND_SIZE]) -> [u8; HAND_SIZE] {
    let mut values = cards.map(|c| c.rank.value());
    values.sort_unstable();
    values
}

fn min_value(cards: &[Card; HAND_SIZE]) -> u8 {
    sorted_values(cards)[0]
}
