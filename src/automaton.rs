use crate::engine::advance;
use crate::error::Result;
use crate::grid::{check_density, Coordinate, Grid};
use crate::neighbors::count_live_neighbors;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub const DEFAULT_DENSITY: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    // ticking suspended; cursor is a linear index
    Inspecting {
        cursor: usize,
    },
    Terminated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Reseed,
    Resize(usize, usize),
    Quit,
    EnterInspect,
    ExitInspect,
    CursorLeft,
    CursorRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inspection {
    pub index: usize,
    pub at: Coordinate,
    pub alive: bool,
    pub neighbors: u8,
}

pub struct Automaton {
    grid: Option<Grid>,
    generation: u64,
    seed: u64,
    density: f64,
    mode: Mode,
}

impl Automaton {
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::with_density(width, height, seed, DEFAULT_DENSITY)
    }

    pub fn with_density(width: usize, height: usize, seed: u64, density: f64) -> Result<Self> {
        let density = check_density(density)?;
        let grid = Grid::random(width, height, density, &mut StdRng::seed_from_u64(seed))?;
        info!(
            "seeded {}x{} grid with seed {} ({} alive)",
            width,
            height,
            seed,
            grid.population()
        );
        Ok(Self {
            grid: Some(grid),
            generation: 0,
            seed,
            density,
            mode: Mode::Running,
        })
    }

    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        Self {
            grid: Some(grid),
            generation: 0,
            seed,
            density: DEFAULT_DENSITY,
            mode: Mode::Running,
        }
    }

    // used by later reseeds and resizes
    pub fn set_density(&mut self, density: f64) -> Result<()> {
        self.density = check_density(density)?;
        Ok(())
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_terminated(&self) -> bool {
        self.mode == Mode::Terminated
    }

    // anything not matched below is a no-op
    pub fn apply(&mut self, cmd: Command) -> Result<()> {
        match (self.mode, cmd) {
            (Mode::Terminated, _) => {}
            (_, Command::Quit) => self.terminate(),
            (_, Command::Resize(w, h)) => self.resize(w, h)?,
            (Mode::Running, Command::Reseed) => self.reseed()?,
            (Mode::Running, Command::EnterInspect) => self.enter_inspection(),
            (Mode::Inspecting { .. }, Command::ExitInspect) => self.exit_inspection(),
            (Mode::Inspecting { .. }, Command::CursorLeft) => self.cursor_left(),
            (Mode::Inspecting { .. }, Command::CursorRight) => self.cursor_right(),
            (mode, cmd) => debug!("ignoring {cmd:?} while {mode:?}"),
        }
        Ok(())
    }

    pub fn tick(&mut self) {
        if self.mode != Mode::Running {
            return;
        }
        if let Some(grid) = self.grid.as_ref() {
            self.grid = Some(advance(grid));
            self.generation += 1;
        }
    }

    pub fn reseed(&mut self) -> Result<()> {
        self.reseed_with(time_seed())
    }

    pub fn reseed_with(&mut self, seed: u64) -> Result<()> {
        if self.mode != Mode::Running {
            return Ok(());
        }
        if let Some(grid) = self.grid.as_mut() {
            grid.fill_random(self.density, &mut StdRng::seed_from_u64(seed))?;
            self.seed = seed;
            self.generation = 0;
            info!("reseeded with {seed}");
        }
        Ok(())
    }

    // on invalid dimensions the current grid is kept
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        self.resize_with(width, height, time_seed())
    }

    pub fn resize_with(&mut self, width: usize, height: usize, seed: u64) -> Result<()> {
        if self.is_terminated() {
            return Ok(());
        }
        let grid = Grid::random(width, height, self.density, &mut StdRng::seed_from_u64(seed))?;
        if let Mode::Inspecting { cursor } = self.mode {
            self.mode = Mode::Inspecting {
                cursor: cursor.min(grid.len() - 1),
            };
        }
        self.grid = Some(grid);
        self.seed = seed;
        self.generation = 0;
        info!("resized to {width}x{height}, reseeded with {seed}");
        Ok(())
    }

    pub fn enter_inspection(&mut self) {
        if self.mode == Mode::Running {
            self.mode = Mode::Inspecting { cursor: 0 };
        }
    }

    pub fn exit_inspection(&mut self) {
        if let Mode::Inspecting { .. } = self.mode {
            self.mode = Mode::Running;
        }
    }

    pub fn cursor_left(&mut self) {
        if let Mode::Inspecting { cursor } = self.mode {
            self.mode = Mode::Inspecting {
                cursor: cursor.saturating_sub(1),
            };
        }
    }

    pub fn cursor_right(&mut self) {
        if let (Mode::Inspecting { cursor }, Some(grid)) = (self.mode, self.grid.as_ref()) {
            self.mode = Mode::Inspecting {
                cursor: (cursor + 1).min(grid.len() - 1),
            };
        }
    }

    pub fn inspection(&self) -> Option<Inspection> {
        let Mode::Inspecting { cursor } = self.mode else {
            return None;
        };
        let grid = self.grid.as_ref()?;
        let at = grid.coordinate_of(cursor).ok()?;
        Some(Inspection {
            index: cursor,
            at,
            alive: grid.cell_at(at.x, at.y).ok()?,
            neighbors: count_live_neighbors(grid, at).ok()?,
        })
    }

    pub fn terminate(&mut self) {
        if let Some(grid) = self.grid.take() {
            info!(
                "terminating at generation {} ({}x{})",
                self.generation,
                grid.width(),
                grid.height()
            );
        }
        self.mode = Mode::Terminated;
    }
}

fn time_seed() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0));
    now.as_secs() ^ u64::from(now.subsec_nanos())
}
