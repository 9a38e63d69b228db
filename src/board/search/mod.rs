//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! Root moves are shuffled with a fixed seed, then every node tries its
//! moves in heuristic order. Only the root records a best move. When no
//! best move is recorded (the root is already terminal, or the search was
//! stopped before finishing a move) a random legal move is played instead.

mod constants;
mod log;
mod move_order;
mod params;

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::sync::StopFlag;

use super::eval::{EvalCache, Evaluator};
use super::{Move, MoveList, Position};

pub use constants::{INFINITY, MATE_THRESHOLD};
pub use self::log::{LogSearchLogger, SearchInfo, SearchLogger, SilentLogger};
pub use move_order::move_order_score;
pub use params::SearchParams;

/// Counters for one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub evaluations: u64,
    pub cache_hits: u64,
    pub cutoffs: u64,
}

/// Outcome of one search
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    /// Best root move, `None` when none was recorded
    pub best_move: Option<Move>,
    /// Score of the root from the side to move's point of view
    pub score: i32,
    pub stats: SearchStats,
    /// The stop flag was raised before the search finished
    pub aborted: bool,
}

/// State of a single search invocation, threaded through the recursion.
struct SearchSession<'a> {
    evaluator: &'a mut Evaluator,
    params: &'a SearchParams,
    stop: &'a StopFlag,
    prune: bool,
    stats: SearchStats,
    best_move: Option<Move>,
}

impl SearchSession<'_> {
    /// Leaf score from the side to move's point of view. Mates found nearer
    /// the root score higher.
    fn evaluate(&mut self, position: &Position, color: i32, ply: i32) -> i32 {
        let score = self.evaluator.score(position);
        let score = if position.is_checkmate() {
            score - score.signum() * ply
        } else {
            score
        };
        color * score
    }

    #[allow(clippy::too_many_arguments)]
    fn negamax(
        &mut self,
        position: &mut Position,
        moves: &[Move],
        depth: u32,
        mut alpha: i32,
        beta: i32,
        color: i32,
        ply: i32,
    ) -> i32 {
        self.stats.nodes += 1;
        if self.stop.is_stopped() {
            return 0;
        }
        if depth == 0 || position.flags().is_terminal() {
            return self.evaluate(position, color, ply);
        }

        let mut ordered = move_order::score_moves(moves, self.params);
        let mut best = -INFINITY;

        for idx in 0..ordered.len() {
            let Some(scored) = ordered.pick_best(idx) else {
                break;
            };
            let mv = scored.mv;

            position.make_move(&mv);
            let replies = position.get_legal_moves();
            let score = -self.negamax(
                position,
                replies.as_slice(),
                depth - 1,
                -beta,
                -alpha,
                -color,
                ply + 1,
            );
            position.undo_move();

            if self.stop.is_stopped() {
                return best;
            }

            if score > best {
                best = score;
                if ply == 0 {
                    self.best_move = Some(mv);
                }
            }
            if self.prune {
                alpha = alpha.max(best);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }
        best
    }
}

/// Move chooser holding its settings and evaluation memo between searches.
pub struct Search {
    params: SearchParams,
    evaluator: Evaluator,
    logger: Box<dyn SearchLogger>,
    stop: StopFlag,
}

impl Search {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        Search::with_evaluator(params, Evaluator::new())
    }

    #[must_use]
    pub fn with_evaluator(params: SearchParams, evaluator: Evaluator) -> Self {
        Search {
            params,
            evaluator,
            logger: Box::new(LogSearchLogger),
            stop: StopFlag::new(),
        }
    }

    /// Search reusing a memo from earlier searches
    #[must_use]
    pub fn with_cache(params: SearchParams, cache: EvalCache) -> Self {
        Search::with_evaluator(params, Evaluator::with_cache(cache))
    }

    #[must_use]
    pub fn with_logger(mut self, logger: impl SearchLogger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    /// Share `stop` so another thread can abort the search
    #[must_use]
    pub fn with_stop_flag(mut self, stop: StopFlag) -> Self {
        self.stop = stop;
        self
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn set_params(&mut self, params: SearchParams) {
        self.params = params;
    }

    #[must_use]
    pub fn stop_flag(&self) -> &StopFlag {
        &self.stop
    }

    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    #[must_use]
    pub fn into_cache(self) -> EvalCache {
        self.evaluator.into_cache()
    }

    /// Pick a move for the side to move from `legal_moves`.
    ///
    /// Returns `None` only when `legal_moves` is empty.
    pub fn choose_move(&mut self, position: &mut Position, legal_moves: &MoveList) -> Option<Move> {
        let result = self.search(position, legal_moves);
        result
            .best_move
            .or_else(|| random_move(legal_moves, &mut rand::thread_rng()))
    }

    /// Alpha-beta search over `legal_moves`.
    pub fn search(&mut self, position: &mut Position, legal_moves: &MoveList) -> SearchResult {
        self.run(position, legal_moves, true)
    }

    /// The same search without pruning. Visits every node of the tree, so
    /// it is only practical at small depths; its result matches `search`.
    pub fn search_exhaustive(
        &mut self,
        position: &mut Position,
        legal_moves: &MoveList,
    ) -> SearchResult {
        self.run(position, legal_moves, false)
    }

    fn run(&mut self, position: &mut Position, legal_moves: &MoveList, prune: bool) -> SearchResult {
        let start = Instant::now();
        self.evaluator.reset_counters();

        let root_moves = shuffled(legal_moves, self.params.shuffle_seed);
        let root_flags = position.flags;
        let color = position.side_to_move().sign();

        let mut session = SearchSession {
            evaluator: &mut self.evaluator,
            params: &self.params,
            stop: &self.stop,
            prune,
            stats: SearchStats::default(),
            best_move: None,
        };
        let score = if root_moves.is_empty() {
            0
        } else {
            session.negamax(
                position,
                &root_moves,
                self.params.depth,
                -INFINITY,
                INFINITY,
                color,
                0,
            )
        };
        // undo clears the flags; put back the ones the caller had
        position.flags = root_flags;

        let mut stats = session.stats;
        let best_move = session.best_move;
        stats.evaluations = self.evaluator.evaluations();
        stats.cache_hits = self.evaluator.cache_hits();
        let aborted = self.stop.is_stopped();

        self.logger.info(&SearchInfo {
            depth: self.params.depth,
            score,
            nodes: stats.nodes,
            evaluations: stats.evaluations,
            cache_hits: stats.cache_hits,
            cutoffs: stats.cutoffs,
            time_ms: start.elapsed().as_millis(),
            best_move,
        });

        SearchResult {
            best_move,
            score,
            stats,
            aborted,
        }
    }
}

impl Default for Search {
    fn default() -> Self {
        Search::new(SearchParams::default())
    }
}

/// Root moves in search order: shuffled by `seed` when one is given.
fn shuffled(moves: &MoveList, seed: Option<u64>) -> Vec<Move> {
    let mut root: Vec<Move> = moves.iter().copied().collect();
    if let Some(seed) = seed {
        root.shuffle(&mut StdRng::seed_from_u64(seed));
    }
    root
}

/// Uniformly random move from `moves`, `None` when empty.
pub fn random_move<R: Rng + ?Sized>(moves: &MoveList, rng: &mut R) -> Option<Move> {
    moves.as_slice().choose(rng).copied()
}

/// Choose a move with default settings and a fresh evaluator.
pub fn choose_move(position: &mut Position, legal_moves: &MoveList) -> Option<Move> {
    Search::default().choose_move(position, legal_moves)
}
