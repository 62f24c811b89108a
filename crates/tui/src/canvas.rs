//! Terminal implementation of the logical drawing surface.
//!
//! Every terminal cell shows two vertically stacked pixels through the upper
//! half block glyph (foreground = top pixel, background = bottom pixel).
//! Logical coordinates are scaled independently on each axis.

use image::RgbaImage;
use picpuzzle_core::{PixelRect, Point, Rgb, Size, Surface, TextSize, TextStyle};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::banner;

const HALF_BLOCK: &str = "▀";

/// Mapping between terminal cells and logical surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    cols: u16,
    rows: u16,
    logical: Size,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, logical: Size) -> Self {
        Self {
            cols,
            rows,
            logical,
        }
    }

    fn pixel_width(&self) -> i64 {
        i64::from(self.cols)
    }

    fn pixel_height(&self) -> i64 {
        i64::from(self.rows) * 2
    }

    fn to_pixel_x(&self, x: i32) -> i64 {
        (i64::from(x) * self.pixel_width()).div_euclid(i64::from(self.logical.width.max(1)))
    }

    fn to_pixel_y(&self, y: i32) -> i64 {
        (i64::from(y) * self.pixel_height()).div_euclid(i64::from(self.logical.height.max(1)))
    }

    /// Logical point at the centre of a terminal cell.
    pub fn cell_to_logical(&self, column: u16, row: u16) -> Point {
        let width = i64::from(self.logical.width);
        let height = i64::from(self.logical.height);
        let x = ((2 * i64::from(column) + 1) * width) / (2 * i64::from(self.cols.max(1)));
        let y = ((2 * i64::from(row) + 1) * height) / (2 * i64::from(self.rows.max(1)));
        Point::new(x as i32, y as i32)
    }

    /// Terminal cell covering a logical point (may lie outside the screen).
    pub fn logical_to_cell(&self, point: Point) -> (i64, i64) {
        (self.to_pixel_x(point.x), self.to_pixel_y(point.y).div_euclid(2))
    }
}

#[derive(Debug, Clone)]
struct Label {
    lines: Vec<String>,
    column: i64,
    row: i64,
    style: Style,
    boxed: Option<Color>,
}

/// Per-frame pixel buffer plus text overlay, rendered as a ratatui widget.
pub struct TerminalCanvas {
    viewport: Viewport,
    background: Rgb,
    pixels: Vec<Rgb>,
    labels: Vec<Label>,
}

impl TerminalCanvas {
    pub fn new(viewport: Viewport, background: Rgb) -> Self {
        let len = (viewport.pixel_width() * viewport.pixel_height()) as usize;
        Self {
            viewport,
            background,
            pixels: vec![background; len],
            labels: Vec::new(),
        }
    }

    fn pixel(&self, x: i64, y: i64) -> Rgb {
        self.pixels[(y * self.viewport.pixel_width() + x) as usize]
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.viewport.pixel_width() || y >= self.viewport.pixel_height() {
            return;
        }
        let idx = (y * self.viewport.pixel_width() + x) as usize;
        self.pixels[idx] = color;
    }

    /// Pixel-space span covered by a logical rectangle, clipped to the canvas.
    fn span(&self, rect: PixelRect) -> (i64, i64, i64, i64) {
        let x0 = self.viewport.to_pixel_x(rect.x);
        let y0 = self.viewport.to_pixel_y(rect.y);
        let x1 = self.viewport.to_pixel_x(rect.x + rect.width as i32);
        let y1 = self.viewport.to_pixel_y(rect.y + rect.height as i32);
        (x0, y0, x1, y1)
    }
}

impl Surface for TerminalCanvas {
    fn size(&self) -> Size {
        self.viewport.logical
    }

    fn clear(&mut self) {
        let background = self.background;
        self.pixels.fill(background);
        self.labels.clear();
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        let (x0, y0, x1, y1) = self.span(rect);
        for y in y0.max(0)..y1.min(self.viewport.pixel_height()) {
            for x in x0.max(0)..x1.min(self.viewport.pixel_width()) {
                self.put(x, y, color);
            }
        }
    }

    fn draw_image(&mut self, image: &RgbaImage, region: PixelRect, at: Point) {
        let (x0, y0, x1, y1) = self.span(PixelRect::new(at.x, at.y, region.width, region.height));
        let (dest_w, dest_h) = (x1 - x0, y1 - y0);
        let (image_w, image_h) = image.dimensions();
        if dest_w <= 0 || dest_h <= 0 || image_w == 0 || image_h == 0 {
            return;
        }

        for y in y0.max(0)..y1.min(self.viewport.pixel_height()) {
            let sy = i64::from(region.y) + sample(y - y0, dest_h, region.height);
            let sy = sy.clamp(0, i64::from(image_h) - 1) as u32;
            for x in x0.max(0)..x1.min(self.viewport.pixel_width()) {
                let sx = i64::from(region.x) + sample(x - x0, dest_w, region.width);
                let sx = sx.clamp(0, i64::from(image_w) - 1) as u32;
                let [r, g, b, a] = image.get_pixel(sx, sy).0;
                if a == 0 {
                    continue;
                }
                let under = self.pixel(x, y);
                self.put(x, y, blend(Rgb(r, g, b), under, a));
            }
        }
    }

    fn draw_text(&mut self, text: &str, center: Point, style: TextStyle) {
        let (column, row) = self.viewport.logical_to_cell(center);
        let mut ratatui_style = Style::default().fg(to_color(style.color));
        let lines = match style.size {
            TextSize::Title if banner::width(text) <= usize::from(self.viewport.cols) => {
                banner::render(text)
            }
            TextSize::Title | TextSize::Large => {
                ratatui_style = ratatui_style.add_modifier(Modifier::BOLD);
                vec![text.to_string()]
            }
            TextSize::Normal => vec![text.to_string()],
        };
        self.labels.push(Label {
            lines,
            column,
            row,
            style: ratatui_style,
            boxed: style.background.map(to_color),
        });
    }
}

impl Widget for &TerminalCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = i64::from(area.width).min(self.viewport.pixel_width());
        let rows = i64::from(area.height).min(self.viewport.pixel_height() / 2);
        for row in 0..rows {
            for col in 0..cols {
                let top = self.pixel(col, row * 2);
                let bottom = self.pixel(col, row * 2 + 1);
                buf.get_mut(area.x + col as u16, area.y + row as u16)
                    .set_symbol(HALF_BLOCK)
                    .set_fg(to_color(top))
                    .set_bg(to_color(bottom));
            }
        }

        for label in &self.labels {
            render_label(label, area, buf);
        }
    }
}

fn render_label(label: &Label, area: Rect, buf: &mut Buffer) {
    let height = label.lines.len() as i64;
    let width = label
        .lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as i64;
    let top = label.row - height / 2;
    let left = label.column - width / 2;

    if let Some(color) = label.boxed {
        let fill = Style::default().bg(color);
        for row in top..top + height {
            for col in left - 1..=left + width {
                if let Some((x, y)) = cell_in(area, col, row) {
                    buf.get_mut(x, y).set_symbol(" ").set_style(fill);
                }
            }
        }
    }

    for (offset, line) in label.lines.iter().enumerate() {
        let row = top + offset as i64;
        let skip = (-left).max(0) as usize;
        let Some((x, y)) = cell_in(area, left.max(0), row) else {
            continue;
        };
        let visible: String = line.chars().skip(skip).collect();
        let max_width = usize::from(area.right().saturating_sub(x));
        buf.set_stringn(x, y, visible, max_width, label.style);
    }
}

fn cell_in(area: Rect, col: i64, row: i64) -> Option<(u16, u16)> {
    if col < 0 || row < 0 || col >= i64::from(area.width) || row >= i64::from(area.height) {
        return None;
    }
    Some((area.x + col as u16, area.y + row as u16))
}

/// Source offset for destination pixel `offset` out of `dest`, sampling pixel centres.
fn sample(offset: i64, dest: i64, source: u32) -> i64 {
    (offset * 2 + 1) * i64::from(source) / (dest * 2)
}

fn blend(top: Rgb, under: Rgb, alpha: u8) -> Rgb {
    if alpha == u8::MAX {
        return top;
    }
    let mix = |a: u8, b: u8| {
        ((u16::from(a) * u16::from(alpha) + u16::from(b) * (255 - u16::from(alpha))) / 255) as u8
    };
    Rgb(mix(top.0, under.0), mix(top.1, under.1), mix(top.2, under.2))
}

fn to_color(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}
