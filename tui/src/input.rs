//! Input handling for the PIPO TUI.
//!
//! Terminal events are turned into [`Command`]s and dispatched straight to
//! the [`App`] on the calling thread.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tracing::debug;

use pipo_engine::{App, BitPosition, Command};

use crate::ScreenLayout;

const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Map a terminal event to a command, if it means anything to the panel.
#[must_use]
pub fn command_for_event(event: &Event, layout: &ScreenLayout) -> Option<Command> {
    match event {
        Event::Key(key) => command_for_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => layout.hit(*column, *row),
        _ => None,
    }
}

fn command_for_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }
    match key.code {
        KeyCode::Char('3' | 'a') => Some(Command::Toggle(BitPosition::B3)),
        KeyCode::Char('2' | 's') => Some(Command::Toggle(BitPosition::B2)),
        KeyCode::Char('1' | 'd') => Some(Command::Toggle(BitPosition::B1)),
        KeyCode::Char('0' | 'f') => Some(Command::Toggle(BitPosition::B0)),
        KeyCode::Enter | KeyCode::Char('l' | ' ') => Some(Command::Latch),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Apply one event. Returns true when a command was dispatched.
pub fn apply_event(app: &mut App, event: &Event, layout: &ScreenLayout) -> bool {
    match command_for_event(event, layout) {
        Some(command) => {
            app.dispatch(command);
            true
        }
        None => false,
    }
}

/// Wait up to `timeout` for input, then drain whatever is queued.
///
/// Returns true when the app asked to quit.
pub fn handle_events(app: &mut App, layout: &ScreenLayout, timeout: Duration) -> Result<bool> {
    if !event::poll(timeout)? {
        return Ok(app.should_quit());
    }

    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = event::read()?;
        if !apply_event(app, &ev, layout) {
            debug!(?ev, "Ignored input event");
        }
        processed += 1;

        if app.should_quit() || !event::poll(Duration::ZERO)? {
            break;
        }
    }

    Ok(app.should_quit())
}
