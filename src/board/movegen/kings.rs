use super::super::grid::KING_OFFSETS;
use super::super::{CastleOptions, CastleSide, Color, MoveList, Piece, Position, Square};

/// Column the king starts on
const KING_HOME_COL: usize = 4;

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        self.generate_step_moves(from, &KING_OFFSETS, moves);

        let options = self.can_castle(self.side_to_move);
        for side in CastleSide::BOTH {
            if options.allows(side) {
                self.push_move(from, Square(from.row(), side.king_to_col()), moves);
            }
        }
    }

    /// Which castles `color` could play right now.
    ///
    /// A side is allowed when its castling right is still held, the king is
    /// not in check, the rook stands on its corner, every square between king
    /// and rook is empty, and no square the king crosses (destination
    /// included) is attacked.
    #[must_use]
    pub fn can_castle(&self, color: Color) -> CastleOptions {
        let mut options = CastleOptions::default();
        let row = color.back_row();
        if self.king_square(color) != Square(row, KING_HOME_COL) || self.in_check(color) {
            return options;
        }

        for side in CastleSide::BOTH {
            if !self.castling_rights.has(color, side) {
                continue;
            }
            let (rook_col, _) = side.rook_cols();
            if self.board.piece_at(Square(row, rook_col)) != Some((color, Piece::Rook)) {
                continue;
            }

            let between = rook_col.min(KING_HOME_COL) + 1..rook_col.max(KING_HOME_COL);
            if !between.into_iter().all(|col| self.board.is_empty(Square(row, col))) {
                continue;
            }

            let king_to = side.king_to_col();
            let crossed = king_to.min(KING_HOME_COL)..=king_to.max(KING_HOME_COL);
            if crossed
                .filter(|&col| col != KING_HOME_COL)
                .any(|col| self.square_attacked_by_enemy(color, Square(row, col)))
            {
                continue;
            }

            match side {
                CastleSide::Kingside => options.kingside = true,
                CastleSide::Queenside => options.queenside = true,
            }
        }
        options
    }
}
