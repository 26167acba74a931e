use serde::{Deserialize, Serialize};

use crate::domain::hand::HAND_SIZE;

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

/// Параметры одной раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Сколько рук по `HAND_SIZE` карт раздать.
    pub players: usize,
}

impl GameConfig {
    pub fn new(players: usize) -> Self {
        Self { players }
    }

    /// Максимум игроков, которых выдержит одна колода.
    pub fn max_players(&self) -> usize {
        DECK_SIZE / HAND_SIZE
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(5)
    }
}
