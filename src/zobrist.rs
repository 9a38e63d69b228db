//! Zobrist hashing for chess positions.
//!
//! Provides incrementally-updatable 64-bit position hashes used for
//! repetition counting and evaluation memoization.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastleSide, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece][color][square_index]
    piece_keys: [[[u64; 64]; 2]; 6],
    black_to_move_key: u64,
    // castling_keys[color][side]
    castling_keys: [[u64; 2]; 2],
    // en_passant_keys[col] (only the column matters for the target)
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.as_index()]
    }

    #[inline]
    pub(crate) fn side_to_move(&self) -> u64 {
        self.black_to_move_key
    }

    #[inline]
    pub(crate) fn castling(&self, color: Color, side: CastleSide) -> u64 {
        self.castling_keys[color.index()][side.index()]
    }

    #[inline]
    pub(crate) fn en_passant(&self, sq: Square) -> u64 {
        self.en_passant_keys[sq.col()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
