use crate::error::Result;
use crate::grid::{Coordinate, Grid};

// clamped 3x3 window, center excluded, no wraparound
pub fn count_live_neighbors(grid: &Grid, at: Coordinate) -> Result<u8> {
    // validates `at`
    grid.index_of(at.x, at.y)?;
    Ok(count_unchecked(grid, at))
}

// `at` must lie inside `grid`
pub(crate) fn count_unchecked(grid: &Grid, at: Coordinate) -> u8 {
    let w = grid.width();
    let cells = grid.cells();

    let x0 = at.x.saturating_sub(1);
    let y0 = at.y.saturating_sub(1);
    let x1 = (at.x + 1).min(w - 1);
    let y1 = (at.y + 1).min(grid.height() - 1);

    let mut n = 0u8;
    for y in y0..=y1 {
        let row = &cells[y * w..(y + 1) * w];
        for (x, &alive) in row.iter().enumerate().take(x1 + 1).skip(x0) {
            if alive && (x, y) != (at.x, at.y) {
                n += 1;
            }
        }
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;

    fn count(grid: &Grid, x: usize, y: usize) -> u8 {
        count_live_neighbors(grid, Coordinate::new(x, y)).unwrap()
    }

    #[test]
    fn center_cell_is_not_its_own_neighbor() {
        let grid = Grid::from_pattern(
            "...\n\
             .#.\n\
             ...",
        )
        .unwrap();
        assert_eq!(count(&grid, 1, 1), 0);
        assert_eq!(count(&grid, 0, 0), 1);
    }

    #[test]
    fn full_interior_window_counts_eight() {
        let grid = Grid::from_pattern("###\n###\n###").unwrap();
        assert_eq!(count(&grid, 1, 1), 8);
        assert_eq!(count(&grid, 0, 0), 3);
        assert_eq!(count(&grid, 1, 0), 5);
    }

    #[test]
    fn lone_live_corner_reads_zero() {
        let grid = Grid::from_pattern("#..\n...\n...").unwrap();
        assert_eq!(count(&grid, 0, 0), 0);
    }

    #[test]
    fn opposite_corner_is_not_a_neighbor() {
        let mut grid = Grid::new(6, 4).unwrap();
        grid.set(0, 0, true).unwrap();
        assert_eq!(count(&grid, 5, 3), 0);
        assert_eq!(count(&grid, 5, 0), 0);
        assert_eq!(count(&grid, 0, 3), 0);
    }

    #[test]
    fn single_row_and_column_grids() {
        let row = Grid::from_pattern("###").unwrap();
        assert_eq!(count(&row, 1, 0), 2);
        assert_eq!(count(&row, 0, 0), 1);

        let col = Grid::from_pattern("#\n#\n.").unwrap();
        assert_eq!(count(&col, 0, 2), 1);
    }

    #[test]
    fn matches_count_then_subtract_self() {
        let grid = Grid::from_pattern(
            "#.##.\n\
             .###.\n\
             #...#\n\
             ##.#.",
        )
        .unwrap();
        for (alive, at) in grid.snapshot() {
            let x0 = at.x.saturating_sub(1);
            let y0 = at.y.saturating_sub(1);
            let x1 = (at.x + 1).min(grid.width() - 1);
            let y1 = (at.y + 1).min(grid.height() - 1);
            let mut inclusive = 0i32;
            for y in y0..=y1 {
                for x in x0..=x1 {
                    if grid.cell_at(x, y).unwrap() {
                        inclusive += 1;
                    }
                }
            }
            let literal = inclusive - i32::from(alive);
            assert_eq!(i32::from(count(&grid, at.x, at.y)), literal, "at {at}");
        }
    }

    #[test]
    fn out_of_bounds_coordinate_fails() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(matches!(
            count_live_neighbors(&grid, Coordinate::new(3, 1)),
            Err(LifeError::OutOfBounds { .. })
        ));
    }
}
