//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::grid::Board;

/// A single ply, classified once when it is built.
///
/// Flags are derived from the board the move was built against; none of
/// them are supplied by the caller. `gives_check` starts out false and is
/// filled in by move generation after legality filtering.
///
/// Two moves compare equal when they share origin and destination, whatever
/// their pieces or flags.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: (Color, Piece),
    piece_captured: Option<(Color, Piece)>,
    is_promotion: bool,
    is_en_passant: bool,
    castle: Option<CastleSide>,
    gives_check: bool,
}

impl Move {
    /// Placeholder used to fill fixed-size move arrays
    pub(crate) const fn null() -> Self {
        Move {
            from: Square(0, 0),
            to: Square(0, 0),
            piece_moved: (Color::White, Piece::Pawn),
            piece_captured: None,
            is_promotion: false,
            is_en_passant: false,
            castle: None,
            gives_check: false,
        }
    }

    /// Classify the move `from -> to` against `board`.
    ///
    /// Returns `None` when `from` is empty. The move is not checked for
    /// legality; generation is responsible for only building legal ones.
    #[must_use]
    pub fn new(board: &Board, from: Square, to: Square) -> Option<Self> {
        let piece_moved = board.piece_at(from)?;
        let (color, piece) = piece_moved;
        let mut piece_captured = board.piece_at(to);

        let is_promotion = piece == Piece::Pawn && to.row() == color.promotion_row();
        let is_en_passant = piece == Piece::Pawn
            && from.col().abs_diff(to.col()) == 1
            && piece_captured.is_none();
        if is_en_passant {
            piece_captured = Some((color.opponent(), Piece::Pawn));
        }
        let castle = (piece == Piece::King && from.col().abs_diff(to.col()) == 2)
            .then(|| CastleSide::from_king_to_col(to.col()));

        Some(Move {
            from,
            to,
            piece_moved,
            piece_captured,
            is_promotion,
            is_en_passant,
            castle,
            gives_check: false,
        })
    }

    /// Copy of this move with the check flag set
    #[inline]
    #[must_use]
    pub(crate) fn with_check(mut self, gives_check: bool) -> Self {
        self.gives_check = gives_check;
        self
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Color and kind of the piece that moves
    #[inline]
    #[must_use]
    pub const fn piece_moved(self) -> (Color, Piece) {
        self.piece_moved
    }

    /// The piece removed by this move (the passed pawn for en passant)
    #[inline]
    #[must_use]
    pub const fn piece_captured(self) -> Option<(Color, Piece)> {
        self.piece_captured
    }

    /// Color of the side making the move
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.piece_moved.0
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.piece_captured.is_some()
    }

    /// Pawn reaching its last row; it always becomes a queen
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.is_promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.is_en_passant
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        self.castle.is_some()
    }

    /// Castle side, if this is a castle
    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        self.castle
    }

    #[inline]
    #[must_use]
    pub const fn gives_check(self) -> bool {
        self.gives_check
    }

    /// Pawn move that neither captures nor promotes
    #[inline]
    #[must_use]
    pub const fn is_quiet_pawn_push(self) -> bool {
        matches!(self.piece_moved.1, Piece::Pawn) && !self.is_capture() && !self.is_promotion
    }

    /// Two-row pawn advance
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.piece_moved.1, Piece::Pawn) && self.from.0.abs_diff(self.to.0) == 2
    }

    /// Human-readable notation: `e4`, `Nf3`, `exd5`, `Qxg4+`, `e8=Q`, `O-O-O`.
    ///
    /// Checks are marked with `+` (mates too). No disambiguation is added.
    #[must_use]
    pub fn notation(&self) -> String {
        let mut out = String::with_capacity(8);
        match self.castle {
            Some(CastleSide::Kingside) => out.push_str("O-O"),
            Some(CastleSide::Queenside) => out.push_str("O-O-O"),
            None => {
                let (_, piece) = self.piece_moved;
                if self.is_capture() {
                    match piece.notation_letter() {
                        Some(letter) => out.push(letter),
                        None => out.push(self.from.file_char()),
                    }
                    out.push('x');
                } else if let Some(letter) = piece.notation_letter() {
                    out.push(letter);
                }
                out.push_str(&self.to.to_string());
                if self.is_promotion {
                    out.push_str("=Q");
                }
            }
        }
        if self.gives_check {
            out.push('+');
        }
        out
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if self.is_promotion {
            write!(f, "=Q")?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.castle.is_some() {
            write!(f, " castle")?;
        }
        if self.is_en_passant {
            write!(f, " ep")?;
        }
        if self.gives_check {
            write!(f, " check")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::null();

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// Keep only the moves matching `keep`, preserving order
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            let mv = self.moves[read];
            if keep(&mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// The move between two squares, if the list holds one
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.iter().copied().find(|m| m.from == from && m.to == to)
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

/// A scored move for move ordering.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Fixed-size list of scored moves to avoid heap allocation.
#[derive(Clone)]
pub(crate) struct ScoredMoveList {
    moves: [ScoredMove; MAX_MOVES],
    len: usize,
}

impl ScoredMoveList {
    pub fn new() -> Self {
        ScoredMoveList {
            moves: [ScoredMove {
                mv: EMPTY_MOVE,
                score: 0,
            }; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move, score: i32) {
        self.moves[self.len] = ScoredMove { mv, score };
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Partial sort: find the best move from index `start` onwards and swap it
    /// to position `start`. Ties keep their original relative order.
    #[inline]
    pub fn pick_best(&mut self, start: usize) -> Option<ScoredMove> {
        if start >= self.len {
            return None;
        }

        let mut best_idx = start;
        let mut best_score = self.moves[start].score;
        for i in (start + 1)..self.len {
            if self.moves[i].score > best_score {
                best_score = self.moves[i].score;
                best_idx = i;
            }
        }

        // Rotate instead of swap so equal scores stay in generation order.
        if best_idx != start {
            self.moves[start..=best_idx].rotate_right(1);
        }

        Some(self.moves[start])
    }
}
