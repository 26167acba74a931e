//! Оценка пятикарточных покерных рук и выбор победителя.
//!
//! Слои:
//! - `domain` – карты, рука, колода;
//! - `eval` – классификация руки по категории;
//! - `engine` – оценённые руки, шоудаун, раздача;
//! - `infra` – реализации RNG;
//! - `api` – сериализуемый отчёт о раздаче.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Card, Deck, DomainError, Hand, Rank, Suit};
pub use engine::{winner, EvaluatedHand, GameConfig, GameError, PokerGame};
pub use eval::{classify, HandCategory};
