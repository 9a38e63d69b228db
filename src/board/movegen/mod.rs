mod kings;
mod knights;
mod pawns;
mod sliders;

use log::trace;

use super::state::TerminalFlags;
use super::{Move, MoveList, Piece, Position, Square};

impl Position {
    /// Build the move `from -> to` against the current board and append it.
    fn push_move(&self, from: Square, to: Square, moves: &mut MoveList) {
        if let Some(mv) = Move::new(&self.board, from, to) {
            moves.push(mv);
        }
    }

    /// Single-step moves for knights and kings: any on-board destination not
    /// holding a friendly piece.
    fn generate_step_moves(&self, from: Square, offsets: &[(isize, isize)], moves: &mut MoveList) {
        let color = self.side_to_move;
        for &(dr, dc) in offsets {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            if !matches!(self.board.piece_at(to), Some((occupant, _)) if occupant == color) {
                self.push_move(from, to, moves);
            }
        }
    }

    fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;

        for (from, owner, piece) in self.board.pieces() {
            if owner != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, &mut moves),
                Piece::Bishop | Piece::Rook | Piece::Queen => {
                    self.generate_slider_moves(from, piece, &mut moves);
                }
                Piece::King => self.generate_king_moves(from, &mut moves),
            }
        }
        moves
    }

    /// Whether playing `mv` keeps the mover's own king out of check
    fn is_legal(&mut self, mv: &Move) -> bool {
        let mover = self.side_to_move;
        self.make_move(mv);
        let legal = !self.in_check(mover);
        self.undo_move();
        legal
    }

    /// Every legal move for the side to move, each annotated with whether it
    /// gives check. Also refreshes the terminal flags.
    pub fn get_legal_moves(&mut self) -> MoveList {
        let mut moves = self.generate_pseudo_moves();
        moves.retain(|mv| self.is_legal(mv));

        let enemy_king = self.king_square(self.side_to_move.opponent());
        for mv in moves.as_mut_slice() {
            *mv = mv.with_check(self.board.gives_check(mv, enemy_king));
        }

        self.refresh_flags(moves.is_empty());
        trace!("{} legal moves for {}: {:?}", moves.len(), self.side_to_move, moves);
        moves
    }

    fn refresh_flags(&mut self, no_moves: bool) {
        let in_check = self.in_check(self.side_to_move);
        self.flags = TerminalFlags {
            checkmate: no_moves && in_check,
            stalemate: no_moves && !in_check,
            insufficient_material: self.is_insufficient_material(),
            threefold_repetition: self.is_threefold_repetition(),
        };
        if self.flags.is_terminal() {
            trace!("terminal position reached: {:?}", self.flags);
        }
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.get_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in &moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }
}
