use super::error::{FenError, MoveError, SquareError};
use super::grid::Board;
use super::{CastleSide, CastlingRights, Color, Move, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Only the first four fields are read; move counters are ignored.
    /// Castling rights whose king or rook is off its home square are
    /// dropped.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;
        check_kings(&board)?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castling.set(Color::White, CastleSide::Kingside),
                'Q' => castling.set(Color::White, CastleSide::Queenside),
                'k' => castling.set(Color::Black, CastleSide::Kingside),
                'q' => castling.set(Color::Black, CastleSide::Queenside),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            text => Some(text.parse::<Square>().map_err(|_| {
                FenError::InvalidEnPassant {
                    found: text.to_string(),
                }
            })?),
        };

        Ok(Position::from_parts(board, side_to_move, castling, en_passant))
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation. Move counters are written as
    /// `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some((color, piece)) = self.board.piece_at(Square(row, col)) {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = if self.white_to_move() { "w" } else { "b" };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} 0 1",
            rows.join("/"),
            active,
            self.castling_rights,
            ep
        )
    }

    /// Find the legal move written in coordinate form (`e2e4`).
    ///
    /// A trailing promotion letter is accepted and ignored, since every
    /// promotion is to a queen.
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveError> {
        let (Some(from_text), Some(to_text), 4..=5) = (text.get(..2), text.get(2..4), text.len())
        else {
            return Err(invalid_move_text(text));
        };
        let from: Square = from_text.parse()?;
        let to: Square = to_text.parse()?;
        if self.board.is_empty(from) {
            return Err(MoveError::EmptySquare { square: from });
        }
        self.get_legal_moves()
            .find(from, to)
            .ok_or(MoveError::IllegalMove { from, to })
    }
}

fn invalid_move_text(text: &str) -> MoveError {
    MoveError::InvalidSquare(SquareError::InvalidNotation {
        notation: text.to_string(),
    })
}

/// Each colour must have exactly one king.
pub(crate) fn check_kings(board: &Board) -> Result<(), FenError> {
    for color in Color::BOTH {
        let found = board
            .pieces()
            .filter(|&(_, c, p)| c == color && p == Piece::King)
            .count();
        if found != 1 {
            return Err(FenError::KingCount { color, found });
        }
    }
    Ok(())
}

fn parse_placement(field: &str) -> Result<Board, FenError> {
    let mut board = Board::empty();
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::InvalidRowCount { rows: rows.len() });
    }

    for (row, text) in rows.iter().enumerate() {
        let mut col = 0;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if col >= 8 {
                return Err(FenError::InvalidRowLength {
                    row,
                    files: col + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            board.set_piece(Square(row, col), color, piece);
            col += 1;
        }
        if col != 8 {
            return Err(FenError::InvalidRowLength { row, files: col });
        }
    }
    Ok(board)
}
