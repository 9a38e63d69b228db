use super::super::grid::KNIGHT_OFFSETS;
use super::super::{MoveList, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        self.generate_step_moves(from, &KNIGHT_OFFSETS, moves);
    }
}
