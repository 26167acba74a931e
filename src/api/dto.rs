use serde::{Deserialize, Serialize};

use crate::engine::{winner_index, EvaluatedHand, PokerGame};
use crate::eval::HandCategory;

/// DTO руки одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatHandDto {
    /// Номер места, начиная с 1.
    pub seat: usize,
    /// Карты в формате `Ah`, `Td`, `7c`.
    pub cards: Vec<String>,
    pub category: HandCategory,
    /// Человеческое описание категории.
    pub label: String,
}

impl SeatHandDto {
    fn from_hand(seat_index: usize, hand: &EvaluatedHand) -> Self {
        Self {
            seat: seat_index + 1,
            cards: hand.hand().iter().map(|c| c.to_string()).collect(),
            category: hand.category(),
            label: hand.category().describe().to_string(),
        }
    }
}

/// Итог раздачи: все руки, победитель и места с той же лучшей категорией.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownReport {
    pub hands: Vec<SeatHandDto>,
    pub winner: Option<SeatHandDto>,
    /// Места (с 1), разделяющие лучшую категорию. Больше одного = ничья
    /// по категории, победителем считается первое место из списка.
    pub tied_seats: Vec<usize>,
}

impl ShowdownReport {
    pub fn from_game(game: &PokerGame) -> Self {
        let hands = game
            .hands()
            .iter()
            .enumerate()
            .map(|(i, h)| SeatHandDto::from_hand(i, h))
            .collect();

        let winner = winner_index(game.hands())
            .map(|i| SeatHandDto::from_hand(i, &game.hands()[i]));

        let tied_seats = game.leaders().into_iter().map(|i| i + 1).collect();

        Self {
            hands,
            winner,
            tied_seats,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
