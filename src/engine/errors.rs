use thiserror::Error;

use crate::domain::DomainError;

/// Ошибки уровня игры (раздача рук игрокам).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Слишком много игроков: {players}, колода рассчитана максимум на {capacity}")]
    TooManyPlayers { players: usize, capacity: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
