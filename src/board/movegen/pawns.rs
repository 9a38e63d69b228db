use super::super::{MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();

        let Some(forward) = from.offset(dir, 0) else {
            return;
        };

        if self.board.is_empty(forward) {
            self.push_move(from, forward, moves);
            if from.row() == color.pawn_start_row() {
                if let Some(double) = forward.offset(dir, 0) {
                    if self.board.is_empty(double) {
                        self.push_move(from, double, moves);
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.board.piece_at(target) {
                Some((occupant, _)) if occupant != color => self.push_move(from, target, moves),
                Some(_) => {}
                None if self.en_passant_capturable(from, target) => {
                    self.push_move(from, target, moves);
                }
                None => {}
            }
        }
    }

    /// En passant onto `target` requires it to be the square just skipped by
    /// an enemy pawn, and that pawn to stand beside `from`.
    fn en_passant_capturable(&self, from: Square, target: Square) -> bool {
        if self.en_passant_target != Some(target) {
            return false;
        }
        let passed = Square(from.row(), target.col());
        self.board.piece_at(passed) == Some((self.side_to_move.opponent(), Piece::Pawn))
    }
}
