//! Terminal event polling and translation

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use cstairs_app::{InputKey, Message};
use cstairs_core::prelude::*;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a crossterm mouse event to a pointer message
///
/// Movement (with or without a held button) tracks hover; a left press is
/// the touch-start analog. Scroll and release events are ignored.
pub fn mouse_event_to_message(mouse: crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Message::PointerMoved {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PointerPressed {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;

        match event {
            Event::Key(key) => {
                if key.kind == event::KeyEventKind::Press {
                    Ok(key_event_to_input(key).map(Message::Key))
                } else {
                    Ok(None)
                }
            }
            Event::Mouse(mouse) => Ok(mouse_event_to_message(mouse)),
            Event::Resize(columns, rows) => Ok(Some(Message::Resized { columns, rows })),
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout so the loop keeps drawing
        Ok(Some(Message::Tick))
    }
}
