//! Move ordering heuristics.

use super::super::{Move, ScoredMoveList};
use super::SearchParams;

/// Ordering score: likely-good moves first.
///
/// Captures score the captured value minus the capturing piece's value.
/// Promotions, checks and castles get flat bonuses; quiet pawn pushes a
/// small penalty.
#[must_use]
pub fn move_order_score(mv: &Move, params: &SearchParams) -> i32 {
    let mut score = 0;
    if let Some((_, captured)) = mv.piece_captured() {
        score += captured.value() - mv.piece_moved().1.value();
    }
    if mv.is_promotion() {
        score += params.promotion_bonus;
    }
    if mv.gives_check() {
        score += params.check_bonus;
    }
    if mv.is_castle() {
        score += params.castle_bonus;
    }
    if mv.is_quiet_pawn_push() {
        score -= params.pawn_push_penalty;
    }
    score
}

/// Score every move for `ScoredMoveList::pick_best`. Equal scores keep
/// their input order.
pub(crate) fn score_moves<'a>(
    moves: impl IntoIterator<Item = &'a Move>,
    params: &SearchParams,
) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for mv in moves {
        scored.push(*mv, move_order_score(mv, params));
    }
    scored
}
