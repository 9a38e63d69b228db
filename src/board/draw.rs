use super::{Color, Piece, Position, Square};

impl Position {
    /// Neither side has enough material to deliver mate.
    ///
    /// True for bare kings, a single minor piece against a bare king, knight
    /// against knight, and bishop against bishop when both bishops stand on
    /// the same square colour. Any pawn, rook or queen, or two or more
    /// non-king pieces on one side, rules it out.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        // Per colour: the single non-king piece and its square, if any.
        let mut minors: [Option<(Piece, Square)>; 2] = [None, None];

        for (sq, color, piece) in self.board.pieces() {
            match piece {
                Piece::King => {}
                Piece::Knight | Piece::Bishop => {
                    let slot = &mut minors[color.index()];
                    if slot.is_some() {
                        return false;
                    }
                    *slot = Some((piece, sq));
                }
                Piece::Pawn | Piece::Rook | Piece::Queen => return false,
            }
        }

        match (
            minors[Color::White.index()],
            minors[Color::Black.index()],
        ) {
            (None, _) | (_, None) => true,
            (Some((Piece::Knight, _)), Some((Piece::Knight, _))) => true,
            (Some((Piece::Bishop, a)), Some((Piece::Bishop, b))) => a.parity() == b.parity(),
            _ => false,
        }
    }

    /// Some position in the current line of play has occurred three times.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_counts.any_at_least(3)
    }
}
