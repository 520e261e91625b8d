use crate::automaton::DEFAULT_DENSITY;
use crate::error::LifeError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "termlife", about = "Conway's Game of Life in the terminal")]
pub struct Args {
    /// integer seed for the initial fill
    #[arg(value_parser = parse_seed, allow_negative_numbers = true)]
    pub seed: u64,

    /// ms per generation (lower = faster)
    #[arg(long, default_value_t = 50)]
    pub ms: u64,

    /// chance that a seeded cell starts alive
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// start from a pattern file instead of a random fill
    #[arg(long)]
    pub pattern: Option<PathBuf>,

    /// hide the status line
    #[arg(long)]
    pub no_hud: bool,

    /// append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.ms.clamp(10, 1000))
    }

    pub fn density(&self) -> f64 {
        if self.density.is_nan() {
            DEFAULT_DENSITY
        } else {
            self.density.clamp(0.0, 1.0)
        }
    }

    pub fn hud_rows(&self) -> u16 {
        if self.no_hud {
            0
        } else {
            1
        }
    }
}

// negative values wrap to their two's-complement u64
pub fn parse_seed(s: &str) -> Result<u64, LifeError> {
    let s = s.trim();
    if let Ok(v) = s.parse::<u64>() {
        return Ok(v);
    }
    s.parse::<i64>()
        .map(|v| v as u64)
        .map_err(|_| LifeError::InvalidArgument(format!("seed must be an integer, got {s:?}")))
}
