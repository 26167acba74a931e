use core::fmt;

use serde::{Deserialize, Serialize};

/// Категория покерной руки по силе.
///
/// Порядок вариантов задаёт порядок сравнения: чем ниже в списке,
/// тем сильнее рука.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// Все категории, от старшей к младшей.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::OnePair,
        HandCategory::HighCard,
    ];

    /// Человеческое описание категории.
    pub fn describe(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
