use crate::automaton::{Command, Mode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

// at most one event; waits indefinitely only when `block` is set
pub fn next_event(block: bool) -> io::Result<Option<Event>> {
    if block || event::poll(Duration::from_millis(0))? {
        return event::read().map(Some);
    }
    Ok(None)
}

pub fn map_event(mode: Mode, ev: &Event) -> Option<Command> {
    match ev {
        Event::Key(k) if k.kind != KeyEventKind::Release => map_key(mode, k),
        Event::Resize(cols, rows) => Some(Command::Resize(
            usize::from(*cols),
            usize::from(*rows),
        )),
        _ => None,
    }
}

fn map_key(mode: Mode, k: &KeyEvent) -> Option<Command> {
    if k.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(k.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(Command::Quit);
    }

    match (mode, k.code) {
        (_, KeyCode::Char('q') | KeyCode::Char('Q')) => Some(Command::Quit),
        (Mode::Running, KeyCode::Esc) => Some(Command::Quit),
        (Mode::Running, KeyCode::Char('r') | KeyCode::Char('R')) => Some(Command::Reseed),
        (Mode::Running, KeyCode::Char('i') | KeyCode::Char('I')) => Some(Command::EnterInspect),

        (Mode::Inspecting { .. }, KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Esc) => {
            Some(Command::ExitInspect)
        }
        (Mode::Inspecting { .. }, KeyCode::Left | KeyCode::Char('h')) => Some(Command::CursorLeft),
        (Mode::Inspecting { .. }, KeyCode::Right | KeyCode::Char('l')) => {
            Some(Command::CursorRight)
        }
        _ => None,
    }
}
