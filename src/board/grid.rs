//! The 8x8 piece grid and attack queries over it.
//!
//! `Board` knows nothing about whose turn it is or how the game got here;
//! that lives in `Position`. Everything here is a pure function of piece
//! placement, which lets `gives_check` run on a scratch copy.

use std::fmt;

use super::{CastleSide, Color, Move, Piece, Square};

/// Rook directions as (d_row, d_col)
pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Bishop directions as (d_row, d_col)
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, 1),
    (-2, -1),
    (2, 1),
    (2, -1),
    (-1, 2),
    (1, 2),
    (-1, -2),
    (1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// 8x8 mapping from square to piece-or-empty.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial arrangement
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_ROW.iter().enumerate() {
            board.set_piece(Square(0, col), Color::Black, *piece);
            board.set_piece(Square(1, col), Color::Black, Piece::Pawn);
            board.set_piece(Square(6, col), Color::White, Piece::Pawn);
            board.set_piece(Square(7, col), Color::White, *piece);
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, content: Option<(Color, Piece)>) {
        self.squares[sq.0][sq.1] = content;
    }

    #[inline]
    pub(crate) fn clear(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1].take()
    }

    /// Every occupied square, a8 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Number of pieces of one color (kings included)
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|&(_, c, _)| c == color).count()
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// First occupied square stepping from `from` in direction `dir`, and the
    /// number of steps taken to reach it.
    fn first_on_ray(&self, from: Square, dir: (isize, isize)) -> Option<(usize, Color, Piece)> {
        let mut sq = from;
        let mut distance = 0;
        while let Some(next) = sq.offset(dir.0, dir.1) {
            distance += 1;
            if let Some((color, piece)) = self.piece_at(next) {
                return Some((distance, color, piece));
            }
            sq = next;
        }
        None
    }

    /// Whether any piece of `attacker` could move to (or capture on) `square`.
    ///
    /// An adjacent enemy king counts as an attack, which keeps the two kings
    /// from ever standing next to each other.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let is_enemy = |sq: Square, piece: Piece| self.piece_at(sq) == Some((attacker, piece));

        if KING_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| square.offset(dr, dc))
            .any(|sq| is_enemy(sq, Piece::King))
        {
            return true;
        }

        for dir in ORTHOGONAL {
            if let Some((_, color, piece)) = self.first_on_ray(square, dir) {
                if color == attacker && piece.attacks_straight() {
                    return true;
                }
            }
        }

        // A pawn attacks diagonally forward, so it must sit one row behind
        // the target relative to its own direction of travel.
        let pawn_row_step = -attacker.pawn_direction();
        for dir in DIAGONAL {
            if let Some((distance, color, piece)) = self.first_on_ray(square, dir) {
                if color != attacker {
                    continue;
                }
                if piece.attacks_diagonally()
                    || (piece == Piece::Pawn && distance == 1 && dir.0 == pawn_row_step)
                {
                    return true;
                }
            }
        }

        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| square.offset(dr, dc))
            .any(|sq| is_enemy(sq, Piece::Knight))
    }

    /// Move the pieces for `mv`. Special cases resolve in the order
    /// castle, promotion, en passant, plain move.
    pub(crate) fn apply(&mut self, mv: &Move) {
        let (color, piece) = mv.piece_moved();
        let from = mv.from();
        let to = mv.to();

        if let Some(side) = mv.castle_side() {
            let (rook_from, rook_to) = castle_rook_squares(from.row(), side);
            let rook = self.clear(rook_from);
            self.put(rook_to, rook);
            self.clear(from);
            self.set_piece(to, color, Piece::King);
        } else if mv.is_promotion() {
            self.clear(from);
            self.set_piece(to, color, Piece::Queen);
        } else if mv.is_en_passant() {
            self.clear(Square(from.row(), to.col()));
            self.clear(from);
            self.set_piece(to, color, piece);
        } else {
            self.clear(from);
            self.set_piece(to, color, piece);
        }
    }

    /// Exact inverse of `apply` for the same move.
    pub(crate) fn revert(&mut self, mv: &Move) {
        let (color, piece) = mv.piece_moved();
        let from = mv.from();
        let to = mv.to();

        if let Some(side) = mv.castle_side() {
            let (rook_from, rook_to) = castle_rook_squares(from.row(), side);
            let rook = self.clear(rook_to);
            self.put(rook_from, rook);
            self.clear(to);
            self.set_piece(from, color, Piece::King);
        } else if mv.is_en_passant() {
            self.clear(to);
            self.set_piece(from, color, piece);
            self.put(Square(from.row(), to.col()), mv.piece_captured());
        } else {
            // Promotions land here too: the piece moved is still the pawn.
            self.put(to, mv.piece_captured());
            self.set_piece(from, color, piece);
        }
    }

    /// Whether playing `mv` would leave the opposing king (standing on
    /// `enemy_king`) attacked. Works on a scratch copy; `self` is untouched.
    #[must_use]
    pub fn gives_check(&self, mv: &Move, enemy_king: Square) -> bool {
        let mut scratch = *self;
        scratch.apply(mv);
        scratch.is_square_attacked(enemy_king, mv.color())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

/// Rook origin and destination for a castle on `row`
pub(crate) fn castle_rook_squares(row: usize, side: CastleSide) -> (Square, Square) {
    let (from_col, to_col) = side.rook_cols();
    (Square(row, from_col), Square(row, to_col))
}

/// Diagram with rank 8 at the top, `.` for empty squares
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let c = match self.piece_at(Square(row, col)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, "{c}")?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
