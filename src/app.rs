use crate::automaton::{Automaton, Command, Mode};
use crate::config::Args;
use crate::grid::Grid;
use crate::input::{map_event, next_event};
use crate::render::{draw_frame, TermGuard};
use anyhow::{Context, Result};
use crossterm::{execute, terminal};
use log::{debug, info};
use std::{fs, thread};

// hud rows come off the bottom; never smaller than 1x1
pub fn grid_dims(cols: usize, rows: usize, hud_rows: u16) -> (usize, usize) {
    (cols.max(1), rows.saturating_sub(usize::from(hud_rows)).max(1))
}

pub fn centered(pattern: &Grid, width: usize, height: usize) -> Result<Grid> {
    let mut grid = Grid::new(width, height)?;
    let ox = width.saturating_sub(pattern.width()) / 2;
    let oy = height.saturating_sub(pattern.height()) / 2;
    for (alive, at) in pattern.snapshot() {
        let (x, y) = (ox + at.x, oy + at.y);
        if alive && x < width && y < height {
            grid.set(x, y, true)?;
        }
    }
    Ok(grid)
}

fn terminal_size() -> Result<(usize, usize)> {
    let (cols, rows) = terminal::size().context("could not read terminal size")?;
    Ok((usize::from(cols), usize::from(rows)))
}

fn initial_automaton(args: &Args, width: usize, height: usize) -> Result<Automaton> {
    match &args.pattern {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read pattern {}", path.display()))?;
            let pattern = Grid::from_pattern(&text)
                .with_context(|| format!("bad pattern {}", path.display()))?;
            info!(
                "loaded {}x{} pattern from {}",
                pattern.width(),
                pattern.height(),
                path.display()
            );
            let mut a = Automaton::from_grid(centered(&pattern, width, height)?, args.seed);
            a.set_density(args.density())?;
            Ok(a)
        }
        None => Ok(Automaton::with_density(
            width,
            height,
            args.seed,
            args.density(),
        )?),
    }
}

// a reseed or resize is not advanced, so the fresh fill is the next frame drawn
pub fn step(automaton: &mut Automaton, cmd: Option<Command>) -> Result<()> {
    match cmd {
        Some(cmd @ (Command::Reseed | Command::Resize(..))) => automaton.apply(cmd)?,
        Some(cmd) => {
            automaton.apply(cmd)?;
            automaton.tick();
        }
        None => automaton.tick(),
    }
    Ok(())
}

pub fn run(args: Args) -> Result<()> {
    let hud_rows = args.hud_rows();
    let frame = args.frame_interval();

    let mut size = terminal_size()?;
    let (w, h) = grid_dims(size.0, size.1, hud_rows);
    let mut automaton = initial_automaton(&args, w, h)?;

    let mut term = TermGuard::new().context("could not set up terminal")?;
    info!("running {w}x{h} at {}ms per generation", frame.as_millis());

    while !automaton.is_terminated() {
        // viewport changes that arrived without an event
        let now = terminal_size()?;
        if now != size {
            size = now;
            let (w, h) = grid_dims(size.0, size.1, hud_rows);
            step(&mut automaton, Some(Command::Resize(w, h)))?;
            execute!(term.out(), terminal::Clear(terminal::ClearType::All))?;
            continue;
        }

        draw_frame(term.out(), &automaton, hud_rows > 0)?;

        let inspecting = matches!(automaton.mode(), Mode::Inspecting { .. });
        if !inspecting {
            thread::sleep(frame);
        }

        let mut cmd = None;
        if let Some(ev) = next_event(inspecting)? {
            cmd = match map_event(automaton.mode(), &ev) {
                // already picked up by the size check above
                Some(Command::Resize(cols, rows)) if (cols, rows) == size => None,
                Some(Command::Resize(cols, rows)) => {
                    size = (cols, rows);
                    execute!(term.out(), terminal::Clear(terminal::ClearType::All))?;
                    let (w, h) = grid_dims(cols, rows, hud_rows);
                    Some(Command::Resize(w, h))
                }
                other => other,
            };
            if let Some(cmd) = cmd {
                debug!("{cmd:?}");
            }
        }

        step(&mut automaton, cmd)?;
    }

    drop(term);
    Ok(())
}
