//! Доменная модель: карты, рука, колода и ошибки домена.

pub mod card;
pub mod deck;
pub mod errors;
pub mod hand;

pub use card::*;
pub use deck::*;
pub use errors::*;
pub use hand::*;
