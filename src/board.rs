//! Stateless move validation and per-cell presentation state.
//!
//! The board layer owns no state of its own. Every function here is a pure
//! view over one grid snapshot, so the engine and the tests drive it
//! directly without a rendering harness.

use core::fmt;

use crate::common::{Mark, Verdict};
use crate::config::NUM_CELLS;
use crate::grid::Grid;

/// Successor grid for placing `mark` at `index`, or `None` when the move
/// must be ignored: out-of-range index, game already decided, or occupied
/// cell.
///
/// Rejected moves are not errors; callers keep the old grid and carry on.
pub fn try_move(grid: &Grid, index: usize, mark: Mark) -> Option<Grid> {
    if index >= NUM_CELLS {
        return None;
    }
    if grid.verdict().is_over() {
        return None;
    }
    if grid.get(index).is_some() {
        return None;
    }
    Some(grid.with(index, mark))
}

/// Highlight flags per cell: `true` exactly on the winning triple.
pub fn highlights(verdict: &Verdict) -> [bool; NUM_CELLS] {
    let mut flags = [false; NUM_CELLS];
    if let Verdict::Winner { line, .. } = verdict {
        for &index in line {
            flags[index] = true;
        }
    }
    flags
}

/// Status line content shown above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Game still open; this mark moves next.
    Next(Mark),
    /// This mark completed a triple.
    Winner(Mark),
    /// Grid exhausted with no winner.
    Draw,
}

/// Derive the status from the verdict and the mark to move.
pub fn status(verdict: &Verdict, to_move: Mark) -> Status {
    match verdict {
        Verdict::Winner { mark, .. } => Status::Winner(*mark),
        Verdict::Draw => Status::Draw,
        Verdict::InProgress => Status::Next(to_move),
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Next(mark) => write!(f, "Next player: {}", mark),
            Status::Winner(mark) => write!(f, "Winner: {}", mark),
            Status::Draw => write!(f, "Draw"),
        }
    }
}
