use log::info;

use super::super::eval::MATE_SCORE;
use super::super::Move;
use super::constants::MATE_THRESHOLD;

/// Summary of one finished search.
#[derive(Clone, Debug)]
pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub evaluations: u64,
    pub cache_hits: u64,
    pub cutoffs: u64,
    pub time_ms: u128,
    pub best_move: Option<Move>,
}

pub trait SearchLogger: Send {
    fn info(&self, info: &SearchInfo);
}

/// Forwards search summaries to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSearchLogger;

impl SearchLogger for LogSearchLogger {
    fn info(&self, info: &SearchInfo) {
        let best = info
            .best_move
            .map_or_else(|| "none".to_string(), |mv| mv.notation());
        info!(
            "depth {} score {} nodes {} evals {} cache_hits {} cutoffs {} time {} best {}",
            info.depth,
            score_text(info.score),
            info.nodes,
            info.evaluations,
            info.cache_hits,
            info.cutoffs,
            info.time_ms,
            best
        );
    }
}

/// `cp 35`, or `mate 3` (plies, negative when being mated)
fn score_text(score: i32) -> String {
    if score.abs() >= MATE_THRESHOLD {
        let plies = MATE_SCORE - score.abs();
        format!("mate {}", score.signum() * plies)
    } else {
        format!("cp {score}")
    }
}

/// Discards every summary.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentLogger;

impl SearchLogger for SilentLogger {
    fn info(&self, _info: &SearchInfo) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mate_scores_print_as_plies() {
        assert_eq!(score_text(MATE_SCORE - 1), "mate 1");
        assert_eq!(score_text(-(MATE_SCORE - 3)), "mate -3");
        assert_eq!(score_text(-40), "cp -40");
    }
}
