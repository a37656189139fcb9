use tictactoe::{Grid, Mark, Verdict, NUM_CELLS, WIN_LINES};

fn grid_of(marks: &[(usize, Mark)]) -> Grid {
    let mut grid = Grid::new();
    for &(index, mark) in marks {
        grid = grid.with(index, mark);
    }
    grid
}

#[test]
fn empty_grid_is_in_progress() {
    assert_eq!(Grid::new().verdict(), Verdict::InProgress);
}

#[test]
fn every_line_wins_for_either_mark() {
    for mark in [Mark::X, Mark::O] {
        for line in WIN_LINES {
            let grid = grid_of(&[(line[0], mark), (line[1], mark), (line[2], mark)]);
            assert_eq!(
                grid.verdict(),
                Verdict::Winner { mark, line },
                "line {:?} for {}",
                line,
                mark
            );
        }
    }
}

#[test]
fn column_win_from_alternating_moves() {
    let grid = grid_of(&[
        (0, Mark::X),
        (1, Mark::O),
        (3, Mark::X),
        (4, Mark::O),
        (6, Mark::X),
    ]);
    assert_eq!(
        grid.verdict(),
        Verdict::Winner {
            mark: Mark::X,
            line: [0, 3, 6]
        }
    );
}

#[test]
fn blocked_full_grid_is_draw() {
    // X O X / X O O / O X X
    let grid = grid_of(&[
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (3, Mark::X),
        (4, Mark::O),
        (5, Mark::O),
        (6, Mark::O),
        (7, Mark::X),
        (8, Mark::X),
    ]);
    assert_eq!(grid.verdict(), Verdict::Draw);
}

#[test]
fn one_gap_keeps_the_game_open() {
    // The drawn grid above minus its last cell.
    let grid = grid_of(&[
        (0, Mark::X),
        (1, Mark::O),
        (2, Mark::X),
        (3, Mark::X),
        (4, Mark::O),
        (5, Mark::O),
        (6, Mark::O),
        (7, Mark::X),
    ]);
    assert_eq!(grid.verdict(), Verdict::InProgress);
}

#[test]
fn win_on_a_full_grid_beats_draw() {
    // X X X / O O X / O X O, X owns the top row
    let grid = grid_of(&[
        (0, Mark::X),
        (1, Mark::X),
        (2, Mark::X),
        (3, Mark::O),
        (4, Mark::O),
        (5, Mark::X),
        (6, Mark::O),
        (7, Mark::X),
        (8, Mark::O),
    ]);
    assert_eq!(
        grid.verdict(),
        Verdict::Winner {
            mark: Mark::X,
            line: [0, 1, 2]
        }
    );
}

#[test]
fn first_matching_line_in_scan_order_is_reported() {
    // X owns the top row and the left column; the row is scanned first.
    let grid = grid_of(&[
        (0, Mark::X),
        (1, Mark::X),
        (2, Mark::X),
        (3, Mark::X),
        (6, Mark::X),
        (4, Mark::O),
        (5, Mark::O),
        (7, Mark::O),
    ]);
    assert_eq!(
        grid.verdict(),
        Verdict::Winner {
            mark: Mark::X,
            line: [0, 1, 2]
        }
    );
}

#[test]
fn cells_exposes_row_major_order() {
    let grid = grid_of(&[(3, Mark::O)]);
    assert_eq!(grid.cells()[3], Some(Mark::O));
    assert_eq!(grid.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn out_of_range_reads_as_empty() {
    let grid = grid_of(&[(0, Mark::X)]);
    assert_eq!(grid.get(NUM_CELLS), None);
    assert_eq!(grid.with(NUM_CELLS, Mark::O), grid);
}
