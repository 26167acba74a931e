use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::errors::DomainError;

/// Размер руки в пятикарточном покере.
pub const HAND_SIZE: usize = 5;

/// Рука из ровно 5 различных карт.
///
/// Проверка размера и дубликатов делается один раз в `Hand::new`,
/// поэтому оценщик дальше работает без ошибок. Десериализация идёт
/// через тот же `Hand::new`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Self, DomainError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| DomainError::InvalidHandSize(cards.len()))?;

        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(DomainError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = DomainError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(&cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}

impl fmt::Display for Hand {
    /// Формат вида `Ah Kh Qh Jh Th`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
