use std::path::{Path, PathBuf};

use image::{imageops, imageops::FilterType, RgbaImage};
use tracing::{debug, info};

use crate::{
    assets::AssetLibrary,
    board::{Board, SelectOutcome},
    error::PuzzleError,
    input::{InputEvent, Key, PointerButton},
    screen::{Context, MenuScreen, Screen, Transition},
    session::Session,
    surface::{Point, Rgb, Size, Surface, TextSize, TextStyle},
};

/// Vertical space kept free below the board for the counter and player line.
const FOOTER_HEIGHT: u32 = 120;
const COMPLETION_MESSAGE: &str = "Picture assembled!";

/// A shuffled picture waiting to be put back together.
#[derive(Debug)]
pub struct PuzzleScreen {
    picture: RgbaImage,
    source: PathBuf,
    board: Board,
    margin: u32,
}

impl PuzzleScreen {
    /// Pick a random picture, cut it up and shuffle the pieces.
    pub fn new(ctx: &mut Context<'_>) -> Result<Self, PuzzleError> {
        let settings = ctx.settings;
        let source = ctx.assets.choose(&mut *ctx.rng)?;
        let mut picture = AssetLibrary::load(&source)?;
        if settings.fit_to_surface {
            picture = fit_to_board(
                picture,
                ctx.surface,
                settings.rows,
                settings.cols,
                settings.margin,
            );
        }

        let (width, height) = picture.dimensions();
        if width < settings.cols as u32 || height < settings.rows as u32 {
            return Err(PuzzleError::TooSmall {
                path: source,
                width,
                height,
                rows: settings.rows,
                cols: settings.cols,
            });
        }

        let mut board = Board::partition(width, height, settings.rows, settings.cols);
        board.shuffle(&mut *ctx.rng);
        info!(
            source = %source.display(),
            width,
            height,
            rows = settings.rows,
            cols = settings.cols,
            "Puzzle started"
        );

        Ok(Self::from_parts(picture, source, board, settings.margin))
    }

    /// Assemble a puzzle from an already prepared picture and board.
    pub fn from_parts(picture: RgbaImage, source: PathBuf, board: Board, margin: u32) -> Self {
        Self {
            picture,
            source,
            board,
            margin,
        }
    }

    /// Current tile arrangement.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// File the picture was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Decoded (and possibly downscaled) picture.
    pub fn picture(&self) -> &RgbaImage {
        &self.picture
    }

    pub(crate) fn handle_event(&mut self, event: &InputEvent) -> Transition {
        match event {
            InputEvent::Quit => Transition::Terminate,
            InputEvent::Key(Key::Escape) => {
                info!(swaps = self.board.swap_count(), "Puzzle abandoned");
                Transition::Switch(Screen::Menu(MenuScreen::new()))
            }
            InputEvent::PointerPressed {
                button: PointerButton::Left,
                position,
            } => {
                if let Some(index) = self.board.cell_at(*position, self.margin) {
                    if let SelectOutcome::Swapped { from, to } = self.board.select(index) {
                        debug!(from, to, swaps = self.board.swap_count(), "Tiles swapped");
                        if self.board.is_solved() {
                            info!(swaps = self.board.swap_count(), "Puzzle solved");
                        }
                    }
                }
                Transition::Stay
            }
            _ => Transition::Stay,
        }
    }

    pub(crate) fn draw(&self, surface: &mut dyn Surface, session: &Session) {
        let size = surface.size();
        surface.clear();

        for (index, tile) in self.board.tiles().iter().enumerate() {
            let cell = self.board.cell_rect(index, self.margin);
            if self.board.selected() == Some(index) {
                surface.fill_rect(cell.inflate(self.margin), Rgb::GREEN);
            }
            surface.draw_image(&self.picture, self.board.region(*tile), cell.origin());
        }

        surface.draw_text(
            &format!("Swaps: {}", self.board.swap_count()),
            Point::new(size.center_x(), size.center_y() + 300),
            TextStyle::plain(Rgb::WHITE).boxed(Rgb::BLACK),
        );
        surface.draw_text(
            &format!("Player: {}   Esc returns to the menu", session.player_name()),
            Point::new(size.center_x(), size.height as i32 - 20),
            TextStyle::plain(Rgb::GRAY),
        );

        if self.board.is_solved() {
            surface.draw_text(
                COMPLETION_MESSAGE,
                Point::new(size.center_x(), size.center_y()),
                TextStyle::plain(Rgb::WHITE)
                    .sized(TextSize::Large)
                    .boxed(Rgb::BLACK),
            );
        }
    }
}

/// Downscale `picture` so the whole grid, margins included, fits above the footer.
fn fit_to_board(
    picture: RgbaImage,
    surface: Size,
    rows: usize,
    cols: usize,
    margin: u32,
) -> RgbaImage {
    let gutters = |count: usize| {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        margin.saturating_mul(count.saturating_add(1))
    };
    let max_width = surface.width.saturating_sub(gutters(cols));
    let max_height = surface
        .height
        .saturating_sub(FOOTER_HEIGHT.saturating_add(gutters(rows)));
    let (width, height) = picture.dimensions();
    if width <= max_width && height <= max_height {
        return picture;
    }

    let scale = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    let target_width = ((f64::from(width) * scale) as u32).max(1);
    let target_height = ((f64::from(height) * scale) as u32).max(1);
    debug!(width, height, target_width, target_height, "Downscaling picture");
    imageops::resize(&picture, target_width, target_height, FilterType::Triangle)
}
