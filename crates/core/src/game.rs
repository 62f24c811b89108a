//! Owner of the active screen and everything that outlives it.

use std::time::Instant;

use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::{
    assets::AssetLibrary,
    config::{AppConfig, PuzzleSettings},
    input::InputEvent,
    screen::{Context, Screen, SplashScreen, Transition},
    session::Session,
    surface::{Size, Surface},
};

/// Whether the main loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep going.
    Continue,
    /// Shut down.
    Exit,
}

/// Screen state machine plus the session it threads through screens.
pub struct Game {
    session: Session,
    assets: AssetLibrary,
    settings: PuzzleSettings,
    surface: Size,
    rng: StdRng,
    screen: Screen,
    finished: bool,
}

impl Game {
    /// Build a game from configuration, starting on the splash screen.
    pub fn new(config: &AppConfig, now: Instant) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            session: Session::new(config.player_name.clone()),
            assets: AssetLibrary::new(config.asset_dir.clone()),
            settings: config.puzzle.clone(),
            surface: config.surface.size(),
            rng,
            screen: Screen::Splash(SplashScreen::new(now)),
            finished: false,
        }
    }

    /// Active screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Session shared by all screens.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Asset directory in use.
    pub fn assets(&self) -> &AssetLibrary {
        &self.assets
    }

    /// Let the active screen consume one frame of input.
    ///
    /// Once [`Step::Exit`] has been returned, later calls ignore their input.
    pub fn handle_events(&mut self, events: &[InputEvent]) -> Step {
        if self.finished {
            return Step::Exit;
        }

        let mut ctx = Context {
            session: &mut self.session,
            assets: &self.assets,
            settings: &self.settings,
            surface: self.surface,
            rng: &mut self.rng,
        };
        match self.screen.handle_events(events, &mut ctx) {
            Transition::Stay => Step::Continue,
            Transition::Switch(next) => {
                info!(from = self.screen.name(), to = next.name(), "Screen transition");
                self.screen = next;
                Step::Continue
            }
            Transition::Terminate => {
                info!(screen = self.screen.name(), "Terminating");
                self.finished = true;
                Step::Exit
            }
        }
    }

    /// Advance the active screen's clock-driven state.
    pub fn update(&mut self, now: Instant) {
        self.screen.update(now);
    }

    /// Render the active screen.
    pub fn draw(&self, surface: &mut dyn Surface) {
        self.screen.draw(surface, &self.session);
    }
}
