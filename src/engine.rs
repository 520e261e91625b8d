use crate::grid::Grid;
use crate::neighbors::count_unchecked;

pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match neighbors {
        0 | 1 => false,
        2 => alive,
        3 => true,
        _ => false,
    }
}

// reads only the untouched input; the successor is a new grid
pub fn advance(grid: &Grid) -> Grid {
    let cells = grid
        .snapshot()
        .map(|(alive, at)| next_state(alive, count_unchecked(grid, at)))
        .collect();
    Grid::from_cells(grid.width(), grid.height(), cells)
}
