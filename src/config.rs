pub const GRID_SIZE: u8 = 3;
pub const NUM_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// The eight cell triples that decide a game: three rows, three columns,
/// two diagonals, in scan order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
