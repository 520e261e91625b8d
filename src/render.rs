use crate::automaton::{Automaton, Inspection};
use crate::grid::Grid;
use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Stdout, Write};

pub struct TermGuard {
    out: Stdout,
}

impl TermGuard {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            EnterAlternateScreen,
            DisableLineWrap,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(Self { out })
    }

    pub fn out(&mut self) -> &mut Stdout {
        &mut self.out
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            EndSynchronizedUpdate,
            SetAttribute(Attribute::Reset),
            ResetColor,
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

// (alive, length) runs so attributes only switch at state boundaries
pub fn row_runs(row: &[bool]) -> Vec<(bool, usize)> {
    let mut runs: Vec<(bool, usize)> = Vec::new();
    for &alive in row {
        match runs.last_mut() {
            Some((state, n)) if *state == alive => *n += 1,
            _ => runs.push((alive, 1)),
        }
    }
    runs
}

pub fn status_line(automaton: &Automaton) -> String {
    let Some(grid) = automaton.grid() else {
        return String::new();
    };
    match automaton.inspection() {
        Some(info) => inspect_line(&info),
        None => format!(
            "gen {}  alive {}  {}x{}  seed {}  | r reseed  i inspect  q quit",
            automaton.generation(),
            grid.population(),
            grid.width(),
            grid.height(),
            automaton.seed()
        ),
    }
}

fn inspect_line(info: &Inspection) -> String {
    format!(
        "INSPECT cell {} #{}  {}  neighbors {}  | h/l move  i/esc resume  q quit",
        info.at,
        info.index,
        if info.alive { "alive" } else { "dead" },
        info.neighbors
    )
}

pub fn draw_frame(out: &mut Stdout, automaton: &Automaton, hud: bool) -> io::Result<()> {
    let Some(grid) = automaton.grid() else {
        return Ok(());
    };
    let cursor_at = automaton.inspection().map(|i| i.at);

    queue!(out, BeginSynchronizedUpdate, cursor::MoveTo(0, 0))?;
    draw_grid(out, grid)?;

    if let Some(at) = cursor_at {
        let alive = grid.cell_at(at.x, at.y).unwrap_or(false);
        queue!(
            out,
            cursor::MoveTo(to_u16(at.x), to_u16(at.y)),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(if alive { Color::Green } else { Color::Red }),
            SetAttribute(Attribute::Bold),
            Print(if alive { '@' } else { '+' }),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
    }

    if hud {
        let line = status_line(automaton);
        let clipped: String = line.chars().take(grid.width()).collect();
        queue!(
            out,
            cursor::MoveTo(0, to_u16(grid.height())),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::DarkGrey),
            Print(clipped),
            ResetColor
        )?;
    }

    queue!(out, EndSynchronizedUpdate)?;
    out.flush()
}

fn draw_grid(out: &mut Stdout, grid: &Grid) -> io::Result<()> {
    for (y, row) in grid.rows().enumerate() {
        queue!(out, cursor::MoveTo(0, to_u16(y)))?;
        for (alive, n) in row_runs(row) {
            let attr = if alive {
                Attribute::Reverse
            } else {
                Attribute::NoReverse
            };
            queue!(out, SetAttribute(attr), Print(" ".repeat(n)))?;
        }
        queue!(out, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
