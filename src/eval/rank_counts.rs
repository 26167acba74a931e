use crate::domain::card::{Card, Rank};
use crate::domain::hand::HAND_SIZE;

/// Сколько раз встречается каждый ранг в наборе карт.
///
/// Индекс = `Rank::value()`, используются ячейки 2..=14.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RankCounts {
    counts: [u8; 15],
}

impl RankCounts {
    pub fn from_cards(cards: &[Card; HAND_SIZE]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank.value() as usize] += 1;
        }
        Self { counts }
    }

    /// Сколько раз встречается ранг `rank`.
    pub fn of(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Сколько разных рангов встречается ровно `k` раз.
    pub fn groups_of(&self, k: u8) -> usize {
        Rank::ALL.iter().filter(|&&r| self.of(r) == k).count()
    }

    /// Есть ли ранг, встречающийся ровно `k` раз.
    pub fn has_group_of(&self, k: u8) -> bool {
        self.groups_of(k) > 0
    }
}
