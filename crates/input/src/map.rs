//! Event mapping from terminal events to board input.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// Input the frame loop acts on, still in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    /// Left button pressed over terminal cell `(column, row)`.
    PointerDown { column: u16, row: u16 },
    /// Terminal resized to `width x height` cells.
    Resize { width: u16, height: u16 },
    Quit,
}

/// Map one terminal event. Everything irrelevant maps to `None`.
pub fn map_event(event: &Event) -> Option<RawInput> {
    match event {
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(RawInput::PointerDown {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
            Some(RawInput::Quit)
        }
        Event::Resize(width, height) => Some(RawInput::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Check if key should close the board.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
