use super::super::grid::{DIAGONAL, ORTHOGONAL};
use super::super::{MoveList, Piece, Position, Square};

impl Position {
    /// Rook, bishop and queen moves: walk each ray until the first occupied
    /// square, which is included only when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let color = self.side_to_move;
        let straight: &[(isize, isize)] = if piece.attacks_straight() {
            &ORTHOGONAL
        } else {
            &[]
        };
        let diagonal: &[(isize, isize)] = if piece.attacks_diagonally() {
            &DIAGONAL
        } else {
            &[]
        };

        for &(dr, dc) in straight.iter().chain(diagonal) {
            let mut sq = from;
            while let Some(next) = sq.offset(dr, dc) {
                match self.board.piece_at(next) {
                    None => self.push_move(from, next, moves),
                    Some((occupant, _)) => {
                        if occupant != color {
                            self.push_move(from, next, moves);
                        }
                        break;
                    }
                }
                sq = next;
            }
        }
    }
}
