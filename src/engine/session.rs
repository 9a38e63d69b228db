//! A game between a user interface and the engine.

use std::io;
use std::sync::Arc;

use log::{debug, info};
use parking_lot::Mutex;

use super::worker::{EngineReply, SearchWorker, WorkerConfig};
use crate::board::{
    Color, EvalCache, Move, MoveError, MoveList, Position, Square, TerminalFlags,
};

/// Owns the game position, keeps its legal moves current, and runs engine
/// replies in the background.
///
/// Undo and reset cancel an engine search in progress; its result is
/// never applied.
pub struct GameSession {
    position: Position,
    legal_moves: MoveList,
    config: WorkerConfig,
    cache: Arc<Mutex<EvalCache>>,
    worker: Option<SearchWorker>,
}

impl GameSession {
    #[must_use]
    pub fn new(config: WorkerConfig) -> Self {
        GameSession::from_position(Position::new(), config)
    }

    #[must_use]
    pub fn from_position(mut position: Position, config: WorkerConfig) -> Self {
        let legal_moves = position.get_legal_moves();
        GameSession {
            position,
            legal_moves,
            config,
            cache: Arc::new(Mutex::new(EvalCache::new())),
            worker: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Legal moves of the side to move
    #[must_use]
    pub fn legal_moves(&self) -> &MoveList {
        &self.legal_moves
    }

    /// Legal moves of the piece on `from`
    pub fn moves_from(&self, from: Square) -> impl Iterator<Item = Move> + '_ {
        self.legal_moves.iter().copied().filter(move |mv| mv.from() == from)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[must_use]
    pub fn flags(&self) -> TerminalFlags {
        self.position.flags()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    /// Notation of every move played, oldest first
    #[must_use]
    pub fn move_history(&self) -> Vec<String> {
        self.position.move_log().map(|mv| mv.notation()).collect()
    }

    /// Shared evaluation memo
    #[must_use]
    pub fn eval_cache(&self) -> &Arc<Mutex<EvalCache>> {
        &self.cache
    }

    /// Play the legal move `from -> to` for the side to move.
    ///
    /// Rejected requests leave the game unchanged. A pending engine search
    /// is cancelled when the move is accepted.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if self.position.piece_at(from).is_none() {
            return Err(MoveError::EmptySquare { square: from });
        }
        let mv = self
            .legal_moves
            .find(from, to)
            .ok_or(MoveError::IllegalMove { from, to })?;

        self.cancel_engine();
        self.apply(&mv);
        Ok(mv)
    }

    /// `play` with squares written as text, e.g. `("e2", "e4")`
    pub fn play_squares(&mut self, from: &str, to: &str) -> Result<Move, MoveError> {
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        self.play(from, to)
    }

    /// Take back the last move. Cancels a pending engine search.
    pub fn undo(&mut self) -> Option<Move> {
        self.cancel_engine();
        let undone = self.position.undo_move();
        if let Some(mv) = &undone {
            debug!("{} takes back {mv}", mv.color());
        }
        self.legal_moves = self.position.get_legal_moves();
        undone
    }

    /// Back to the starting position. Cancels a pending engine search.
    pub fn reset(&mut self) {
        self.cancel_engine();
        self.position = Position::new();
        self.legal_moves = self.position.get_legal_moves();
        debug!("game reset");
    }

    /// Start searching for the side to move. Does nothing when the game is
    /// over or a search is already running.
    pub fn start_engine_move(&mut self) -> io::Result<()> {
        if self.worker.is_some() || self.is_game_over() {
            return Ok(());
        }
        let worker = SearchWorker::spawn(
            self.position.clone(),
            &self.config,
            Arc::clone(&self.cache),
        )?;
        self.worker = Some(worker);
        Ok(())
    }

    #[must_use]
    pub fn is_engine_thinking(&self) -> bool {
        self.worker.is_some()
    }

    /// Apply the engine's move if its search has finished. Never blocks.
    pub fn poll_engine_move(&mut self) -> Option<Move> {
        let worker = self.worker.as_mut()?;
        // Checked before polling so a reply sent just before exit is seen.
        let finished = worker.is_finished();
        match worker.try_result() {
            Some(reply) => {
                self.worker = None;
                self.apply_reply(reply)
            }
            None => {
                if finished {
                    self.worker = None;
                }
                None
            }
        }
    }

    /// Block until the engine's move is ready, then apply it.
    pub fn wait_engine_move(&mut self) -> Option<Move> {
        let reply = self.worker.take()?.wait()?;
        self.apply_reply(reply)
    }

    /// Stop a running engine search without applying its result
    pub fn cancel_engine(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.cancel();
            debug!("engine search cancelled");
        }
    }

    fn apply_reply(&mut self, reply: EngineReply) -> Option<Move> {
        let chosen = reply.best_move?;
        let mv = self.legal_moves.find(chosen.from(), chosen.to())?;
        info!(
            "engine plays {} (score {}, {} nodes)",
            mv, reply.score, reply.stats.nodes
        );
        self.apply(&mv);
        Some(mv)
    }

    fn apply(&mut self, mv: &Move) {
        debug!("{} plays {mv}", mv.color());
        self.position.make_move(mv);
        self.legal_moves = self.position.get_legal_moves();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new(WorkerConfig::default())
    }
}
