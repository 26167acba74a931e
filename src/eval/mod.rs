//! Модуль оценки пятикарточных покерных рук.
//!
//! Основная функция:
//!   `classify(hand) -> HandCategory`

pub mod evaluator;
pub mod hand_category;
pub mod rank_counts;

pub use evaluator::{classify, classify_cards};
pub use hand_category::HandCategory;
pub use rank_counts::RankCounts;
