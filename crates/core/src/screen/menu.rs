use tracing::{info, warn};

use crate::{
    input::{InputEvent, Key},
    screen::{Context, NameEntryScreen, PuzzleScreen, Screen, Transition},
    session::Session,
    surface::{Point, Rgb, Surface, TextStyle},
};

/// Entries in display order.
pub const MENU_ITEMS: [&str; 3] = ["Play", "Choose player name", "Quit"];

const PLAY: usize = 0;
const CHOOSE_NAME: usize = 1;

/// Hub screen linking the puzzle, name entry and quitting.
#[derive(Debug, Default)]
pub struct MenuScreen {
    selected: usize,
    notice: Option<String>,
}

impl MenuScreen {
    /// Fresh menu with the first entry highlighted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted entry.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Message from the last failed action, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn move_cursor(&mut self, delta: isize) {
        let options = MENU_ITEMS.len() as isize;
        let mut idx = self.selected as isize + delta;
        if idx < 0 {
            idx = 0;
        } else if idx >= options {
            idx = options - 1;
        }
        self.selected = idx as usize;
    }

    pub(crate) fn handle_event(&mut self, event: &InputEvent, ctx: &mut Context<'_>) -> Transition {
        match event {
            InputEvent::Quit => Transition::Terminate,
            InputEvent::Key(Key::Up) => {
                self.move_cursor(-1);
                Transition::Stay
            }
            InputEvent::Key(Key::Down) => {
                self.move_cursor(1);
                Transition::Stay
            }
            InputEvent::Key(Key::Space | Key::Enter) => self.activate(ctx),
            _ => Transition::Stay,
        }
    }

    fn activate(&mut self, ctx: &mut Context<'_>) -> Transition {
        match self.selected {
            PLAY => match PuzzleScreen::new(ctx) {
                Ok(puzzle) => Transition::Switch(Screen::Puzzle(puzzle)),
                Err(err) => {
                    warn!(%err, "Could not start puzzle");
                    self.notice = Some(err.to_string());
                    Transition::Stay
                }
            },
            CHOOSE_NAME => Transition::Switch(Screen::NameEntry(NameEntryScreen::new())),
            _ => {
                info!("Quit selected from menu");
                Transition::Terminate
            }
        }
    }

    pub(crate) fn draw(&self, surface: &mut dyn Surface, session: &Session) {
        let size = surface.size();
        surface.clear();

        for (idx, item) in MENU_ITEMS.iter().enumerate() {
            let color = if idx == self.selected {
                Rgb::RED
            } else {
                Rgb::WHITE
            };
            surface.draw_text(
                item,
                Point::new(size.center_x(), 100 * (idx as i32 + 1) + 30),
                TextStyle::plain(color),
            );
        }

        surface.draw_text(
            &format!("Player: {}", session.player_name()),
            Point::new(size.center_x(), 450),
            TextStyle::plain(Rgb::GRAY),
        );

        if let Some(notice) = &self.notice {
            surface.draw_text(
                notice,
                Point::new(size.center_x(), 540),
                TextStyle::plain(Rgb::YELLOW),
            );
        }

        surface.draw_text(
            "Up/Down to move, Enter or Space to choose",
            Point::new(size.center_x(), size.height as i32 - 40),
            TextStyle::plain(Rgb::GRAY),
        );
    }
}
