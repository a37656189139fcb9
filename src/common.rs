//! Common types: player marks and game verdicts.

use core::fmt;

/// A player's mark on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves after this one.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character form used by the renderer.
    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One cell of the grid: empty or marked.
pub type Cell = Option<Mark>;

/// Outcome of scanning a grid for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No winner yet and the game can continue.
    InProgress,
    /// `mark` completed the triple at `line` (cell indices, row-major).
    Winner { mark: Mark, line: [usize; 3] },
    /// The grid is exhausted with no winner.
    Draw,
}

impl Verdict {
    /// `true` once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }
}
