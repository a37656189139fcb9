#![cfg(feature = "std")]

//! Line-oriented rendering of the grid, the status, and the move list.
//!
//! Functions build the printed lines instead of writing them, so the
//! integration tests can assert on exact output; the console module does
//! the actual printing.

use crate::board;
use crate::config::{GRID_SIZE, NUM_CELLS};
use crate::game::{GameEngine, HistoryEntry};
use crate::grid::Grid;

/// Status line for the position on display.
pub fn status_line(engine: &GameEngine) -> String {
    board::status(&engine.verdict(), engine.to_move()).to_string()
}

/// Grid with column letters, row numbers, and the winning triple bracketed.
pub fn grid_lines(grid: &Grid, highlight: &[bool; NUM_CELLS]) -> Vec<String> {
    let size = GRID_SIZE as usize;
    let mut lines = Vec::with_capacity(2 * size);

    let mut header = String::from("    ");
    for c in 0..size {
        if c > 0 {
            header.push(' ');
        }
        header.push(' ');
        header.push((b'A' + c as u8) as char);
        header.push(' ');
    }
    lines.push(header.trim_end().to_string());

    let mut rule = String::from("    ");
    for c in 0..size {
        if c > 0 {
            rule.push('+');
        }
        rule.push_str("---");
    }

    for r in 0..size {
        let mut row = format!("{:2}  ", r + 1);
        for c in 0..size {
            if c > 0 {
                row.push('|');
            }
            let index = r * size + c;
            let glyph = match grid.get(index) {
                Some(mark) => mark.as_char(),
                None => '.',
            };
            if highlight[index] {
                row.push('[');
                row.push(glyph);
                row.push(']');
            } else {
                row.push(' ');
                row.push(glyph);
                row.push(' ');
            }
        }
        lines.push(row.trim_end().to_string());
        if r + 1 < size {
            lines.push(rule.clone());
        }
    }
    lines
}

/// Header naming the current move-list order.
pub fn move_list_header(engine: &GameEngine) -> String {
    let order = if engine.ascending() {
        "oldest first"
    } else {
        "newest first"
    };
    format!("Moves ({}):", order)
}

/// Move-list lines in the configured order. The entry at the cursor renders
/// as status text; everything else is a target for `goto`.
pub fn move_list_lines(engine: &GameEngine) -> Vec<String> {
    let mut lines: Vec<String> = engine
        .history()
        .iter()
        .enumerate()
        .map(|(m, entry)| move_label(m, entry, engine.cursor()))
        .collect();
    if !engine.ascending() {
        lines.reverse();
    }
    lines
}

fn move_label(m: usize, entry: &HistoryEntry, cursor: usize) -> String {
    if m == 0 {
        // The start entry stays selectable even while on display.
        return String::from("  [0] Go to game start");
    }
    let coord = match entry.coord {
        Some(coord) => format!(" (Row: {} - Col: {})", coord.row, coord.col),
        None => String::new(),
    };
    if m == cursor {
        format!("  [{}] You're at move #{}{}", m, m, coord)
    } else {
        format!("  [{}] Go to move #{}{}", m, m, coord)
    }
}
