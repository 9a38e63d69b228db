use crate::zobrist::ZOBRIST;

use super::grid::castle_rook_squares;
use super::state::{LoggedMove, TerminalFlags, UnmakeInfo};
use super::{CastleSide, CastlingRights, Color, Move, Piece, Position, Square};

/// XOR of the castling keys for every right held in `rights`
fn castling_hash(rights: CastlingRights) -> u64 {
    let mut hash = 0;
    for color in Color::BOTH {
        for side in CastleSide::BOTH {
            if rights.has(color, side) {
                hash ^= ZOBRIST.castling(color, side);
            }
        }
    }
    hash
}

/// Castle side whose rook starts on `sq`, if `sq` is one of `color`'s corners
fn rook_corner_side(color: Color, sq: Square) -> Option<CastleSide> {
    if sq.row() != color.back_row() {
        return None;
    }
    CastleSide::BOTH
        .into_iter()
        .find(|side| side.rook_cols().0 == sq.col())
}

impl Position {
    /// Apply `mv` for the side to move.
    ///
    /// Does nothing when the origin square is empty. Otherwise the move is
    /// trusted to have come from `get_legal_moves`: no legality check is made.
    pub fn make_move(&mut self, mv: &Move) {
        let Some((color, piece)) = self.board.piece_at(mv.from()) else {
            return;
        };

        let info = UnmakeInfo {
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_hash: self.hash,
            previous_layout_hash: self.layout_hash,
        };

        let mut layout = self.layout_hash;

        if let Some((cap_color, cap_piece)) = mv.piece_captured() {
            let cap_sq = if mv.is_en_passant() {
                Square(mv.from().row(), mv.to().col())
            } else {
                mv.to()
            };
            layout ^= ZOBRIST.piece(cap_color, cap_piece, cap_sq);
        }

        let placed = if mv.is_promotion() { Piece::Queen } else { piece };
        layout ^= ZOBRIST.piece(color, piece, mv.from());
        layout ^= ZOBRIST.piece(color, placed, mv.to());

        if let Some(side) = mv.castle_side() {
            let (rook_from, rook_to) = castle_rook_squares(mv.from().row(), side);
            layout ^= ZOBRIST.piece(color, Piece::Rook, rook_from);
            layout ^= ZOBRIST.piece(color, Piece::Rook, rook_to);
        }

        let mut hash = self.hash ^ self.layout_hash ^ layout ^ ZOBRIST.side_to_move();
        if let Some(old_ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(old_ep);
        }

        self.board.apply(mv);

        if piece == Piece::King {
            self.king_squares[color.index()] = mv.to();
        }

        self.en_passant_target = None;
        if mv.is_double_pawn_push() {
            let ep = Square((mv.from().row() + mv.to().row()) / 2, mv.from().col());
            self.en_passant_target = Some(ep);
            hash ^= ZOBRIST.en_passant(ep);
        }

        let mut rights = self.castling_rights;
        match piece {
            Piece::King => rights.remove_color(color),
            Piece::Rook => {
                if let Some(side) = rook_corner_side(color, mv.from()) {
                    rights.remove(color, side);
                }
            }
            _ => {}
        }
        if let Some((cap_color, Piece::Rook)) = mv.piece_captured() {
            if let Some(side) = rook_corner_side(cap_color, mv.to()) {
                rights.remove(cap_color, side);
            }
        }
        hash ^= castling_hash(self.castling_rights) ^ castling_hash(rights);
        self.castling_rights = rights;

        self.hash = hash;
        self.layout_hash = layout;
        self.side_to_move = color.opponent();
        self.repetition_counts.increment(layout);
        self.move_log.push(LoggedMove { mv: *mv, info });

        self.flags = TerminalFlags {
            insufficient_material: self.is_insufficient_material(),
            threefold_repetition: self.is_threefold_repetition(),
            ..TerminalFlags::default()
        };
    }

    /// Take back the last move. Returns it, or `None` when nothing has been
    /// played.
    pub fn undo_move(&mut self) -> Option<Move> {
        let LoggedMove { mv, info } = self.move_log.pop()?;

        self.repetition_counts.decrement(self.layout_hash);
        self.board.revert(&mv);

        let (color, piece) = mv.piece_moved();
        if piece == Piece::King {
            self.king_squares[color.index()] = mv.from();
        }

        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.hash = info.previous_hash;
        self.layout_hash = info.previous_layout_hash;
        self.side_to_move = color;
        self.flags = TerminalFlags::default();
        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_corner_side_matches_home_corners() {
        assert_eq!(
            rook_corner_side(Color::White, Square(7, 7)),
            Some(CastleSide::Kingside)
        );
        assert_eq!(
            rook_corner_side(Color::Black, Square(0, 0)),
            Some(CastleSide::Queenside)
        );
        assert_eq!(rook_corner_side(Color::White, Square(0, 0)), None);
        assert_eq!(rook_corner_side(Color::White, Square(7, 3)), None);
    }
}
