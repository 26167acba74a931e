use crate::engine::evaluated_hand::EvaluatedHand;

/// Лучшая рука по категории.
///
/// Пустой набор → `None`. Кикеры не сравниваются: при равных категориях
/// побеждает первая встреченная рука.
pub fn winner(hands: &[EvaluatedHand]) -> Option<&EvaluatedHand> {
    winner_index(hands).map(|i| &hands[i])
}

/// Индекс победителя, по тем же правилам, что и `winner`.
pub fn winner_index(hands: &[EvaluatedHand]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, hand) in hands.iter().enumerate() {
        if best.map_or(true, |b| hand.category() > hands[b].category()) {
            best = Some(i);
        }
    }
    best
}

/// Индексы всех рук, у которых категория совпадает с лучшей.
///
/// Больше одного индекса означает ничью по категории, которую `winner`
/// разрешает в пользу первой руки.
pub fn leaders(hands: &[EvaluatedHand]) -> Vec<usize> {
    let Some(top) = hands.iter().map(|h| h.category()).max() else {
        return Vec::new();
    };
    hands
        .iter()
        .enumerate()
        .filter(|(_, h)| h.category() == top)
        .map(|(i, _)| i)
        .collect()
}
