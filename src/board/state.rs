use super::grid::Board;
use super::history::RepetitionTable;
use super::{CastleSide, CastlingRights, Color, Move, Piece, Square};
use crate::zobrist::ZOBRIST;

/// End-of-game signals, refreshed by `Position::get_legal_moves`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminalFlags {
    pub checkmate: bool,
    pub stalemate: bool,
    pub insufficient_material: bool,
    pub threefold_repetition: bool,
}

impl TerminalFlags {
    /// Any flag set
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.checkmate || self.is_draw()
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        self.stalemate || self.insufficient_material || self.threefold_repetition
    }
}

/// State `make_move` cannot recover from the move itself.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UnmakeInfo {
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_hash: u64,
    pub(crate) previous_layout_hash: u64,
}

/// One entry of the move log: the move plus what undo needs.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LoggedMove {
    pub(crate) mv: Move,
    pub(crate) info: UnmakeInfo,
}

/// A game in progress: the board plus everything needed to continue and
/// rewind it.
///
/// `make_move` and `undo_move` are exact inverses. After any sequence of N
/// moves followed by N undos the position compares equal to where it
/// started.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) move_log: Vec<LoggedMove>,
    pub(crate) king_squares: [Square; 2],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) hash: u64,
    /// Piece keys only. Repetitions are counted on this.
    pub(crate) layout_hash: u64,
    pub(crate) repetition_counts: RepetitionTable,
    pub(crate) flags: TerminalFlags,
}

impl Position {
    /// The standard starting position, white to move.
    #[must_use]
    pub fn new() -> Self {
        Position::from_parts(
            Board::starting(),
            Color::White,
            CastlingRights::all(),
            None,
        )
    }

    /// Assemble a position from already-validated parts. Both kings must be
    /// on the board.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> Self {
        let king_squares = [
            board.find_king(Color::White).unwrap_or(Square(7, 4)),
            board.find_king(Color::Black).unwrap_or(Square(0, 4)),
        ];
        let mut position = Position {
            board,
            side_to_move,
            move_log: Vec::new(),
            king_squares,
            castling_rights: CastlingRights::none(),
            en_passant_target,
            hash: 0,
            layout_hash: 0,
            repetition_counts: RepetitionTable::new(),
            flags: TerminalFlags::default(),
        };
        position.castling_rights = position.sanitize_castling(castling_rights);
        position.hash = position.calculate_hash();
        position.layout_hash = position.calculate_layout_hash();
        position.repetition_counts.increment(position.layout_hash);
        position
    }

    /// Drop rights whose king or rook is not on its home square.
    fn sanitize_castling(&self, mut rights: CastlingRights) -> CastlingRights {
        for color in Color::BOTH {
            let row = color.back_row();
            if self.board.piece_at(Square(row, 4)) != Some((color, Piece::King)) {
                rights.remove_color(color);
                continue;
            }
            for side in CastleSide::BOTH {
                let (rook_col, _) = side.rook_cols();
                if self.board.piece_at(Square(row, rook_col)) != Some((color, Piece::Rook)) {
                    rights.remove(color, side);
                }
            }
        }
        rights
    }

    /// Hash of the piece placement alone computed from scratch.
    pub(crate) fn calculate_layout_hash(&self) -> u64 {
        self.board
            .pieces()
            .fold(0, |h, (sq, color, piece)| h ^ ZOBRIST.piece(color, piece, sq))
    }

    /// Hash of the full position computed from scratch.
    pub(crate) fn calculate_hash(&self) -> u64 {
        let mut hash = self.calculate_layout_hash();

        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.side_to_move();
        }
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if self.castling_rights.has(color, side) {
                    hash ^= ZOBRIST.castling(color, side);
                }
            }
        }
        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(ep);
        }
        hash
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    /// Cached square of a color's king
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square behind a pawn that just advanced two rows, if any
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Running Zobrist hash of the position
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Running hash of the piece placement, ignoring side to move, castling
    /// rights and en passant
    #[must_use]
    pub fn layout_hash(&self) -> u64 {
        self.layout_hash
    }

    /// Moves played so far, oldest first
    pub fn move_log(&self) -> impl ExactSizeIterator<Item = Move> + '_ {
        self.move_log.iter().map(|entry| entry.mv)
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.move_log.last().map(|entry| entry.mv)
    }

    /// Number of moves in the log
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.move_log.len()
    }

    /// How many times the current board layout has occurred
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetition_counts.get(self.layout_hash)
    }

    #[must_use]
    pub fn flags(&self) -> TerminalFlags {
        self.flags
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.flags.checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.flags.stalemate
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.flags.is_terminal()
    }

    /// Whether `color`'s king is attacked
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.square_attacked_by_enemy(color, self.king_square(color))
    }

    /// Whether a `color` king standing on `square` would be attacked
    #[must_use]
    pub fn square_attacked_by_enemy(&self, color: Color, square: Square) -> bool {
        self.board.is_square_attacked(square, color.opponent())
    }

    /// Whether `mv` (built for the side to move) attacks the enemy king.
    /// Does not modify the position.
    #[must_use]
    pub fn gives_check(&self, mv: &Move) -> bool {
        let enemy = mv.color().opponent();
        self.board.gives_check(mv, self.king_square(enemy))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Positions are equal when everything that affects play or undo matches.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.king_squares == other.king_squares
            && self.castling_rights == other.castling_rights
            && self.en_passant_target == other.en_passant_target
            && self.hash == other.hash
            && self.layout_hash == other.layout_hash
            && self.repetition_counts == other.repetition_counts
            && self.flags == other.flags
            && self.move_log.len() == other.move_log.len()
            && self.move_log().eq(other.move_log())
    }
}

impl Eq for Position {}
