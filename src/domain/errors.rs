use thiserror::Error;

use crate::domain::card::Card;

/// Ошибки доменной модели: колода и рука.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("В колоде осталось {remaining} карт, а запрошено {requested}")]
    ExhaustedDeck { requested: usize, remaining: usize },

    #[error("Рука должна состоять из 5 карт, получено {0}")]
    InvalidHandSize(usize),

    #[error("Карта {0} встречается в руке дважды")]
    DuplicateCard(Card),
}
