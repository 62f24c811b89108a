//! The four application screens and the transitions between them.

mod menu;
mod name_entry;
mod puzzle;
mod splash;

use std::time::Instant;

use rand::rngs::StdRng;

use crate::{
    assets::AssetLibrary, config::PuzzleSettings, input::InputEvent, session::Session,
    surface::{Size, Surface},
};

pub use menu::{MenuScreen, MENU_ITEMS};
pub use name_entry::{NameEntryScreen, MAX_NAME_LEN};
pub use puzzle::PuzzleScreen;
pub use splash::{SplashScreen, HINT_BLINK};

/// Everything a screen may read or change besides its own state.
pub struct Context<'a> {
    /// Session shared across screens.
    pub session: &'a mut Session,
    /// Source of puzzle images.
    pub assets: &'a AssetLibrary,
    /// Grid configuration for new puzzles.
    pub settings: &'a PuzzleSettings,
    /// Logical surface size, used to fit pictures.
    pub surface: Size,
    /// Randomness for picture choice and shuffling.
    pub rng: &'a mut StdRng,
}

/// What the main loop should do after a screen handled input.
#[derive(Debug)]
pub enum Transition {
    /// Keep the current screen.
    Stay,
    /// Replace the current screen.
    Switch(Screen),
    /// Stop the application.
    Terminate,
}

/// The active application mode.
#[derive(Debug)]
pub enum Screen {
    /// Title card waiting for a click.
    Splash(SplashScreen),
    /// Main menu hub.
    Menu(MenuScreen),
    /// Player name input.
    NameEntry(NameEntryScreen),
    /// A running puzzle.
    Puzzle(PuzzleScreen),
}

impl Screen {
    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Splash(_) => "splash",
            Screen::Menu(_) => "menu",
            Screen::NameEntry(_) => "name-entry",
            Screen::Puzzle(_) => "puzzle",
        }
    }

    /// Feed one frame's events in order. The first event that leaves the
    /// screen ends the batch; later events are dropped.
    pub fn handle_events(&mut self, events: &[InputEvent], ctx: &mut Context<'_>) -> Transition {
        for event in events {
            let transition = match self {
                Screen::Splash(screen) => screen.handle_event(event),
                Screen::Menu(screen) => screen.handle_event(event, ctx),
                Screen::NameEntry(screen) => screen.handle_event(event, ctx),
                Screen::Puzzle(screen) => screen.handle_event(event),
            };
            if !matches!(transition, Transition::Stay) {
                return transition;
            }
        }
        Transition::Stay
    }

    /// Advance time-driven state.
    pub fn update(&mut self, now: Instant) {
        match self {
            Screen::Splash(screen) => screen.update(now),
            Screen::Menu(_) | Screen::NameEntry(_) | Screen::Puzzle(_) => {}
        }
    }

    /// Render onto `surface`.
    pub fn draw(&self, surface: &mut dyn Surface, session: &Session) {
        match self {
            Screen::Splash(screen) => screen.draw(surface),
            Screen::Menu(screen) => screen.draw(surface, session),
            Screen::NameEntry(screen) => screen.draw(surface),
            Screen::Puzzle(screen) => screen.draw(surface, session),
        }
    }
}
