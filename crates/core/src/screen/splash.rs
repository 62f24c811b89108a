use std::time::{Duration, Instant};

use crate::{
    input::InputEvent,
    screen::{MenuScreen, Screen, Transition},
    surface::{Point, Rgb, Surface, TextSize, TextStyle},
};

/// Interval between hint blinks.
pub const HINT_BLINK: Duration = Duration::from_millis(800);

const TITLE: &str = "Picture Puzzle";
const HINT: &str = "Click anywhere to continue";

/// Title card shown at startup.
#[derive(Debug)]
pub struct SplashScreen {
    hint_visible: bool,
    hint_toggle_deadline: Instant,
}

impl SplashScreen {
    /// Start with the hint visible.
    pub fn new(now: Instant) -> Self {
        Self {
            hint_visible: true,
            hint_toggle_deadline: now + HINT_BLINK,
        }
    }

    /// Whether the blinking hint is currently drawn.
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub(crate) fn handle_event(&mut self, event: &InputEvent) -> Transition {
        match event {
            InputEvent::Quit => Transition::Terminate,
            InputEvent::PointerPressed { .. } => {
                Transition::Switch(Screen::Menu(MenuScreen::new()))
            }
            InputEvent::Key(_) => Transition::Stay,
        }
    }

    pub(crate) fn update(&mut self, now: Instant) {
        if now > self.hint_toggle_deadline {
            self.hint_visible = !self.hint_visible;
            self.hint_toggle_deadline = now + HINT_BLINK;
        }
    }

    pub(crate) fn draw(&self, surface: &mut dyn Surface) {
        let size = surface.size();
        surface.clear();
        surface.draw_text(
            TITLE,
            Point::new(size.center_x(), size.center_y() - 100),
            TextStyle::plain(Rgb::WHITE).sized(TextSize::Title),
        );
        if self.hint_visible {
            surface.draw_text(
                HINT,
                Point::new(size.center_x(), size.center_y() + 100),
                TextStyle::plain(Rgb::WHITE),
            );
        }
    }
}
