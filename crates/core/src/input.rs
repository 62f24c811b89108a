//! Platform-neutral input events consumed by screens.

use crate::surface::Point;

/// Pointer button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button.
    Left,
    /// Middle button or wheel click.
    Middle,
    /// Secondary button.
    Right,
}

/// Keys the screens react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Space bar.
    Space,
    /// Enter / return.
    Enter,
    /// Backspace.
    Backspace,
    /// Escape.
    Escape,
    /// Any other printable character.
    Char(char),
}

/// One input event, already translated into logical surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the application.
    Quit,
    /// A pointer button went down at `position`.
    PointerPressed {
        /// Which button was pressed.
        button: PointerButton,
        /// Location in logical pixels.
        position: Point,
    },
    /// A key was pressed.
    Key(Key),
}

impl InputEvent {
    /// Shorthand for a left click.
    pub fn left_click(x: i32, y: i32) -> Self {
        Self::PointerPressed {
            button: PointerButton::Left,
            position: Point::new(x, y),
        }
    }
}
