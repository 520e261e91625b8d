pub mod app;
pub mod automaton;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod input;
pub mod neighbors;
pub mod render;

pub use automaton::{Automaton, Command, Inspection, Mode};
pub use engine::advance;
pub use error::LifeError;
pub use grid::{Coordinate, Grid};
pub use neighbors::count_live_neighbors;
