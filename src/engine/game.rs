use crate::domain::deck::Deck;
use crate::engine::config::GameConfig;
use crate::engine::errors::GameError;
use crate::engine::evaluated_hand::EvaluatedHand;
use crate::engine::showdown;
use crate::engine::RandomSource;

/// Одна раздача: руки игроков в порядке мест.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PokerGame {
    hands: Vec<EvaluatedHand>,
}

impl PokerGame {
    /// Перемешать свежую колоду и раздать `config.players` рук по 5 карт.
    pub fn deal<R: RandomSource>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let capacity = config.max_players();
        if config.players > capacity {
            return Err(GameError::TooManyPlayers {
                players: config.players,
                capacity,
            });
        }

        let mut deck = Deck::new_shuffled(rng);
        let mut hands = Vec::with_capacity(config.players);
        for seat in 0..config.players {
            let hand = EvaluatedHand::new(deck.deal_hand()?);
            log::debug!("seat {} dealt {}", seat + 1, hand);
            hands.push(hand);
        }

        Ok(Self { hands })
    }

    /// Обернуть уже готовые руки (тесты, реплей).
    pub fn from_hands(hands: Vec<EvaluatedHand>) -> Self {
        Self { hands }
    }

    pub fn hands(&self) -> &[EvaluatedHand] {
        &self.hands
    }

    /// Победитель: номер места (с нуля) и его рука.
    pub fn determine_winner(&self) -> Option<(usize, &EvaluatedHand)> {
        let idx = showdown::winner_index(&self.hands)?;
        let hand = &self.hands[idx];
        log::info!("winner is seat {} with {}", idx + 1, hand.category());
        Some((idx, hand))
    }

    /// Все места, разделяющие лучшую категорию.
    pub fn leaders(&self) -> Vec<usize> {
        showdown::leaders(&self.hands)
    }
}
