use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;
use crate::eval::{classify, HandCategory};

/// Рука вместе с её категорией.
///
/// Категория считается сразу в конструкторе и дальше не меняется.
/// При десериализации берётся только рука, категория пересчитывается.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "EvaluatedHandRepr")]
pub struct EvaluatedHand {
    hand: Hand,
    category: HandCategory,
}

impl EvaluatedHand {
    pub fn new(hand: Hand) -> Self {
        let category = classify(&hand);
        Self { hand, category }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }
}

impl From<Hand> for EvaluatedHand {
    fn from(hand: Hand) -> Self {
        Self::new(hand)
    }
}

/// Входной формат: поле `category`, если оно есть, игнорируется.
#[derive(Deserialize)]
struct EvaluatedHandRepr {
    hand: Hand,
}

impl From<EvaluatedHandRepr> for EvaluatedHand {
    fn from(repr: EvaluatedHandRepr) -> Self {
        repr.hand.into()
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hand, self.category)
    }
}
