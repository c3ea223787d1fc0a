use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use crate::core::action::{Action, Key};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Key(Key),
    Paste(String), // Bracketed paste
    Resize(u16, u16),
    ForceQuit, // Ctrl+C, honoured on every screen
}

impl TuiEvent {
    pub fn into_action(self) -> Action {
        match self {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Paste(text) => Action::Paste(text),
            TuiEvent::Resize(width, height) => Action::Resize { width, height },
            TuiEvent::ForceQuit => Action::Quit,
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Windows reports releases too
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::Key(Key::Char(c))),
                (_, KeyCode::Up) => Some(TuiEvent::Key(Key::Up)),
                (_, KeyCode::Down) => Some(TuiEvent::Key(Key::Down)),
                (_, KeyCode::Left) => Some(TuiEvent::Key(Key::Left)),
                (_, KeyCode::Right) => Some(TuiEvent::Key(Key::Right)),
                (_, KeyCode::Home) => Some(TuiEvent::Key(Key::Home)),
                (_, KeyCode::End) => Some(TuiEvent::Key(Key::End)),
                (_, KeyCode::Enter) => Some(TuiEvent::Key(Key::Enter)),
                (_, KeyCode::Esc) => Some(TuiEvent::Key(Key::Esc)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Key(Key::Backspace)),
                (_, KeyCode::Delete) => Some(TuiEvent::Key(Key::Delete)),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}
