use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::errors::DomainError;
use crate::domain::hand::{Hand, HAND_SIZE};
use crate::engine::RandomSource;

/// Колода карт. Верх колоды — конец вектора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Полная колода, сразу перемешанная.
    pub fn new_shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        deck.shuffle(rng);
        deck
    }

    /// Перемешать оставшиеся карты на месте.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Снять `n` карт сверху.
    ///
    /// Если карт не хватает, колода не меняется и возвращается
    /// `DomainError::ExhaustedDeck`.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DomainError::ExhaustedDeck {
                requested: n,
                remaining,
            });
        }

        let mut taken = self.cards.split_off(remaining - n);
        taken.reverse();
        log::debug!("dealt {n} cards, {} left in deck", self.cards.len());
        Ok(taken)
    }

    /// Снять пятикарточную руку.
    pub fn deal_hand(&mut self) -> Result<Hand, DomainError> {
        let cards = self.deal(HAND_SIZE)?;
        Hand::new(&cards)
    }
}
