use crate::error::{LifeError, Result};
use rand::Rng;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// row-major, cells.len() == width * height, both dimensions non-zero
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidArgument(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        let len = width.checked_mul(height).ok_or_else(|| {
            LifeError::InvalidArgument(format!("grid {width}x{height} is too large"))
        })?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        grid.fill_random(density, rng)?;
        Ok(grid)
    }

    // `#`/`O`/`*` alive, `.`/space dead; short rows padded, blank lines skipped
    pub fn from_pattern(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.trim().is_empty())
            .collect();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, rows.len())?;

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let alive = match ch {
                    '#' | 'O' | 'o' | '*' => true,
                    '.' | ' ' | '-' => false,
                    other => {
                        return Err(LifeError::InvalidArgument(format!(
                            "unexpected character {other:?} in pattern row {y}"
                        )))
                    }
                };
                grid.set(x, y, alive)?;
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn index_of(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(LifeError::coord(x, y, self.width, self.height));
        }
        Ok(y * self.width + x)
    }

    pub fn coordinate_of(&self, index: usize) -> Result<Coordinate> {
        if index >= self.cells.len() {
            return Err(LifeError::index(index, self.width, self.height));
        }
        Ok(Coordinate {
            x: index % self.width,
            y: index / self.width,
        })
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<bool> {
        let i = self.index_of(x, y)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let i = self.index_of(x, y)?;
        self.cells[i] = alive;
        Ok(())
    }

    pub fn fill_random<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) -> Result<()> {
        let p = check_density(density)?;
        for cell in &mut self.cells {
            *cell = rng.gen_bool(p);
        }
        Ok(())
    }

    pub fn snapshot(&self) -> impl Iterator<Item = (bool, Coordinate)> + '_ {
        let w = self.width;
        self.cells.iter().enumerate().map(move |(i, &alive)| {
            (
                alive,
                Coordinate {
                    x: i % w,
                    y: i / w,
                },
            )
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }
}

// finite values clamp into [0, 1]; NaN and infinities are rejected
pub fn check_density(density: f64) -> Result<f64> {
    if !density.is_finite() {
        return Err(LifeError::InvalidArgument(format!(
            "density must be a finite number, got {density}"
        )));
    }
    Ok(density.clamp(0.0, 1.0))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Grid::new(0, 4),
            Err(LifeError::InvalidArgument(_))
        ));
        assert!(matches!(
            Grid::new(4, 0),
            Err(LifeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn index_and_coordinate_round_trip() {
        let grid = Grid::new(7, 5).unwrap();
        for i in 0..grid.len() {
            let c = grid.coordinate_of(i).unwrap();
            assert_eq!(grid.index_of(c.x, c.y).unwrap(), i);
        }
        for y in 0..5 {
            for x in 0..7 {
                let i = grid.index_of(x, y).unwrap();
                assert_eq!(grid.coordinate_of(i).unwrap(), Coordinate::new(x, y));
            }
        }
    }

    #[test]
    fn lookups_outside_the_grid_fail() {
        let grid = Grid::new(3, 2).unwrap();
        assert!(matches!(
            grid.cell_at(3, 0),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.cell_at(0, 2),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.coordinate_of(6),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert!(grid.coordinate_of(5).is_ok());
    }

    #[test]
    fn snapshot_is_row_major_and_restartable() {
        let grid = Grid::from_pattern("#..\n.#.\n").unwrap();
        let first: Vec<_> = grid.snapshot().collect();
        assert_eq!(first.len(), 6);
        assert_eq!(first[0], (true, Coordinate::new(0, 0)));
        assert_eq!(first[2], (false, Coordinate::new(2, 0)));
        assert_eq!(first[4], (true, Coordinate::new(1, 1)));

        let second: Vec<_> = grid.snapshot().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn pattern_rows_are_padded() {
        let grid = Grid::from_pattern("##\n\n#...\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 2));
        assert_eq!(grid.population(), 3);
        assert!(!grid.cell_at(3, 0).unwrap());
        assert_eq!(grid.to_string(), "##..\n#...\n");
    }

    #[test]
    fn pattern_rejects_unknown_characters() {
        assert!(matches!(
            Grid::from_pattern("#x#"),
            Err(LifeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn seeded_fill_is_deterministic() {
        let a = Grid::random(16, 9, 0.5, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::random(16, 9, 0.5, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);

        let full = Grid::random(4, 4, 1.0, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(full.population(), 16);
        let empty = Grid::random(4, 4, 0.0, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(empty.population(), 0);
    }

    #[test]
    fn non_finite_density_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Grid::random(4, 4, bad, &mut rng),
                Err(LifeError::InvalidArgument(_))
            ));
        }
        let mut grid = Grid::from_pattern("##\n##").unwrap();
        assert!(grid.fill_random(f64::NAN, &mut rng).is_err());
        assert_eq!(grid.population(), 4);
        assert_eq!(check_density(7.5).unwrap(), 1.0);
        assert_eq!(check_density(-2.0).unwrap(), 0.0);
    }
}
