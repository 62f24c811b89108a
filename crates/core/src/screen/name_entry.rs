use tracing::info;

use crate::{
    input::{InputEvent, Key},
    screen::{Context, MenuScreen, Screen, Transition},
    surface::{Point, Rgb, Surface, TextSize, TextStyle},
};

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 10;

/// Collects a new player name.
#[derive(Debug, Default)]
pub struct NameEntryScreen {
    buffer: String,
}

impl NameEntryScreen {
    /// Start with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name typed so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    fn push(&mut self, ch: char) {
        if ch.is_alphanumeric() && self.buffer.chars().count() < MAX_NAME_LEN {
            self.buffer.push(ch);
        }
    }

    pub(crate) fn handle_event(&mut self, event: &InputEvent, ctx: &mut Context<'_>) -> Transition {
        match event {
            InputEvent::Quit => Transition::Terminate,
            InputEvent::Key(Key::Backspace) => {
                self.buffer.pop();
                Transition::Stay
            }
            InputEvent::Key(Key::Enter) => {
                info!(name = %self.buffer, "Player name set");
                ctx.session.set_player_name(self.buffer.clone());
                Transition::Switch(Screen::Menu(MenuScreen::new()))
            }
            InputEvent::Key(Key::Escape) => Transition::Switch(Screen::Menu(MenuScreen::new())),
            InputEvent::Key(Key::Char(ch)) => {
                self.push(*ch);
                Transition::Stay
            }
            _ => Transition::Stay,
        }
    }

    pub(crate) fn draw(&self, surface: &mut dyn Surface) {
        let size = surface.size();
        surface.clear();
        surface.draw_text(
            "Player Name",
            Point::new(size.center_x(), 130),
            TextStyle::plain(Rgb::WHITE).sized(TextSize::Large),
        );
        if !self.buffer.is_empty() {
            surface.draw_text(
                &self.buffer,
                Point::new(size.center_x(), 230),
                TextStyle::plain(Rgb::WHITE),
            );
        }
        surface.draw_text(
            &format!(
                "Letters and digits, up to {MAX_NAME_LEN}. Enter to confirm, Esc to cancel"
            ),
            Point::new(size.center_x(), size.height as i32 - 40),
            TextStyle::plain(Rgb::GRAY),
        );
    }
}
