use super::*;
use oxo_core::Cell;

/// The 8 uniform triples that decide a game: rows top-to-bottom, columns
/// left-to-right, then the two diagonals. Scan order is fixed so detection
/// is deterministic.
pub const LINES: [[Cell; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Terminal result of a concluded game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Mark),
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winner(mark) => write!(f, "{} wins", mark),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// Returns the mark holding a complete line, if any. Pure.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        board
            .get(a)
            .filter(|&mark| board.get(b) == Some(mark) && board.get(c) == Some(mark))
    })
}

/// Win, draw on a full board, or None while the game is still live.
pub fn outcome(board: &Board) -> Option<Outcome> {
    winner(board)
        .map(Outcome::Winner)
        .or_else(|| board.is_full().then_some(Outcome::Draw))
}
