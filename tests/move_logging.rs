//! Only moves actually played in a game are logged, not the ones tried
//! during legality checks or search.

use log::{Level, LevelFilter, Log, Metadata, Record};
use parking_lot::{const_mutex, Mutex};

use chess_core::board::{Position, Search, SearchParams, SilentLogger};
use chess_core::engine::{GameSession, WorkerConfig};

struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("chess_core") {
            self.lines.lock().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: const_mutex(Vec::new()),
};

fn played_lines() -> Vec<String> {
    LOGGER
        .lines
        .lock()
        .iter()
        .filter(|line| line.contains(" plays ") || line.contains(" takes back "))
        .cloned()
        .collect()
}

#[test]
fn only_game_moves_are_logged() {
    log::set_logger(&LOGGER).expect("no other logger in this binary");
    log::set_max_level(LevelFilter::Debug);

    let mut session = GameSession::new(WorkerConfig::default());
    session.play_squares("e2", "e4").expect("legal");
    session.play_squares("e7", "e5").expect("legal");
    assert_eq!(played_lines(), ["White plays e4", "Black plays e5"]);

    let mut position = Position::new();
    let moves = position.get_legal_moves();
    let mut search = Search::new(SearchParams::with_depth(2)).with_logger(SilentLogger);
    let result = search.search(&mut position, &moves);
    assert!(result.best_move.is_some());
    assert_eq!(played_lines().len(), 2);

    session.undo();
    assert_eq!(
        played_lines(),
        ["White plays e4", "Black plays e5", "Black takes back e5"]
    );
}
