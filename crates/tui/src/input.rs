//! Translation of crossterm events into platform-neutral input events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use picpuzzle_core::{InputEvent, Key, PointerButton};

use crate::canvas::Viewport;

/// Map a terminal event; events the screens never look at yield `None`.
pub fn translate(event: Event, viewport: &Viewport) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, viewport),
        Event::Resize(_, _) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(InputEvent::Quit),
            _ => None,
        };
    }
    let key = match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(ch) => Key::Char(ch),
        _ => return None,
    };
    Some(InputEvent::Key(key))
}

fn translate_mouse(mouse: MouseEvent, viewport: &Viewport) -> Option<InputEvent> {
    let MouseEventKind::Down(button) = mouse.kind else {
        return None;
    };
    let button = match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
    };
    Some(InputEvent::PointerPressed {
        button,
        position: viewport.cell_to_logical(mouse.column, mouse.row),
    })
}
