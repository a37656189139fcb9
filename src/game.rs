//! Game engine holding the move history, the current-move cursor, and the
//! move-list sort flag.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::board;
use crate::common::{Mark, Verdict};
use crate::config::GRID_SIZE;
use crate::grid::Grid;

/// 1-indexed (row, column) of a played move, shown in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCoord {
    pub row: u8,
    pub col: u8,
}

impl MoveCoord {
    /// Coordinate of the cell at row-major `index`.
    pub fn from_index(index: usize) -> Self {
        let size = GRID_SIZE as usize;
        Self {
            row: (index / size + 1) as u8,
            col: (index % size + 1) as u8,
        }
    }
}

/// One point in a game's history: the position after a move, and where that
/// move was played. `coord` is `None` only for the starting entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub grid: Grid,
    pub coord: Option<MoveCoord>,
}

/// Owns the full history of one session and the cursor selecting the
/// position on display.
///
/// Invariants: entry 0 is the empty grid with no coordinate, the cursor is
/// always in bounds, and consecutive entries differ by exactly one newly
/// set cell. Playing from a past position discards everything beyond the
/// cursor before appending, so abandoned futures are unreachable.
pub struct GameEngine {
    history: Vec<HistoryEntry>,
    cursor: usize,
    ascending: bool,
}

impl GameEngine {
    /// Fresh session: empty grid, cursor at the start, move list oldest
    /// first.
    pub fn new() -> Self {
        let mut history = Vec::new();
        history.push(HistoryEntry {
            grid: Grid::new(),
            coord: None,
        });
        Self {
            history,
            cursor: 0,
            ascending: true,
        }
    }

    /// The position currently on display.
    pub fn current(&self) -> &Grid {
        &self.history[self.cursor].grid
    }

    /// Mark that moves next from the current position. X opens, so X is to
    /// move exactly at even cursors.
    pub fn to_move(&self) -> Mark {
        if self.cursor % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Verdict for the position on display.
    pub fn verdict(&self) -> Verdict {
        self.current().verdict()
    }

    /// Full history, oldest first regardless of the sort flag.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the entry on display.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// `true` when the move list renders oldest first.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Play the next mark at `index`.
    ///
    /// Returns `false` and leaves the session untouched when the move is
    /// rejected (occupied cell, decided game, or out-of-range index). On
    /// success the history beyond the cursor is discarded, the new position
    /// appended, and the cursor advanced to it.
    pub fn play(&mut self, index: usize) -> bool {
        let mark = self.to_move();
        let next = match board::try_move(self.current(), index, mark) {
            Some(grid) => grid,
            None => {
                log::debug!("move at index {} ignored", index);
                return false;
            }
        };
        let coord = MoveCoord::from_index(index);
        let discarded = self.history.len() - self.cursor - 1;
        if discarded > 0 {
            log::debug!("discarding {} future move(s)", discarded);
        }
        self.history.truncate(self.cursor + 1);
        self.history.push(HistoryEntry {
            grid: next,
            coord: Some(coord),
        });
        self.cursor = self.history.len() - 1;
        log::debug!(
            "move #{}: {} at row {} col {}",
            self.cursor,
            mark,
            coord.row,
            coord.col
        );
        true
    }

    /// Move the cursor to `target` and drop every entry beyond it.
    ///
    /// Out-of-range targets are ignored and return `false`.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target >= self.history.len() {
            log::debug!(
                "jump to move {} ignored, history holds {}",
                target,
                self.history.len()
            );
            return false;
        }
        self.cursor = target;
        self.history.truncate(target + 1);
        log::debug!("jumped to move #{}", target);
        true
    }

    /// Flip the move-list order. Presentation only; history and cursor are
    /// untouched.
    pub fn toggle_sort(&mut self) {
        self.ascending = !self.ascending;
        log::debug!(
            "move list now {}",
            if self.ascending {
                "oldest first"
            } else {
                "newest first"
            }
        );
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
