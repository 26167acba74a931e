//! Игровой слой над оценщиком: оценённые руки, выбор победителя, раздача.
//!
//! Основные операции:
//!   - `winner` – лучшая рука по категории
//!   - `PokerGame::deal` – раздать руки из свежей колоды
//!   - `PokerGame::determine_winner` – победитель раздачи

pub mod config;
pub mod errors;
pub mod evaluated_hand;
pub mod game;
pub mod showdown;

pub use config::{GameConfig, DECK_SIZE};
pub use errors::GameError;
pub use evaluated_hand::EvaluatedHand;
pub use game::PokerGame;
pub use showdown::{leaders, winner, winner_index};

/// RNG интерфейс для колоды и раздачи.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
