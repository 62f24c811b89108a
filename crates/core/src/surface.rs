//! Drawing vocabulary shared by screens and frontends.
//!
//! Screens draw in logical pixel coordinates; a frontend decides how those
//! map onto its actual output.

use image::RgbaImage;

/// Logical surface dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Horizontal centre.
    pub fn center_x(&self) -> i32 {
        (self.width / 2) as i32
    }

    /// Vertical centre.
    pub fn center_y(&self) -> i32 {
        (self.height / 2) as i32
    }
}

/// A position in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelRect {
    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Point test with every edge inclusive, so `x + width` still hits.
    pub fn contains_inclusive(&self, point: Point) -> bool {
        let right = self.x + self.width as i32;
        let bottom = self.y + self.height as i32;
        self.x <= point.x && point.x <= right && self.y <= point.y && point.y <= bottom
    }

    /// Grow the rectangle by `amount` on every side.
    pub fn inflate(&self, amount: u32) -> Self {
        let shift = i32::try_from(amount).unwrap_or(i32::MAX);
        Self {
            x: self.x.saturating_sub(shift),
            y: self.y.saturating_sub(shift),
            width: self.width.saturating_add(amount.saturating_mul(2)),
            height: self.height.saturating_add(amount.saturating_mul(2)),
        }
    }
}

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    /// Highlight for the active menu entry.
    pub const RED: Rgb = Rgb(255, 0, 0);
    /// Border around the selected tile.
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    /// Secondary hints.
    pub const GRAY: Rgb = Rgb(128, 128, 128);
    /// Warnings shown on the menu.
    pub const YELLOW: Rgb = Rgb(255, 200, 0);
}

/// Relative size of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Body text.
    Normal,
    /// Emphasised text such as banners.
    Large,
    /// Oversized headline lettering.
    Title,
}

/// How a piece of text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Glyph colour.
    pub color: Rgb,
    /// Optional box painted behind the text.
    pub background: Option<Rgb>,
    /// Glyph size.
    pub size: TextSize,
}

impl TextStyle {
    /// Normal-sized text without a background box.
    pub const fn plain(color: Rgb) -> Self {
        Self {
            color,
            background: None,
            size: TextSize::Normal,
        }
    }

    /// Replace the size.
    pub const fn sized(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// Paint a box of `color` behind the text.
    pub const fn boxed(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }
}

/// Output target provided by a rendering platform.
pub trait Surface {
    /// Logical dimensions screens lay themselves out against.
    fn size(&self) -> Size;

    /// Fill the whole surface with the configured background colour.
    fn clear(&mut self);

    /// Fill a rectangle with a solid colour.
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);

    /// Copy `region` of `image` so that its top-left corner lands on `at`.
    fn draw_image(&mut self, image: &RgbaImage, region: PixelRect, at: Point);

    /// Draw a single line of text centred on `center`.
    fn draw_text(&mut self, text: &str, center: Point, style: TextStyle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_contains_hits_far_edges() {
        let rect = PixelRect::new(2, 2, 10, 5);
        assert!(rect.contains_inclusive(Point::new(2, 2)));
        assert!(rect.contains_inclusive(Point::new(12, 7)));
        assert!(!rect.contains_inclusive(Point::new(13, 7)));
        assert!(!rect.contains_inclusive(Point::new(1, 4)));
    }

    #[test]
    fn inflate_grows_every_side() {
        let rect = PixelRect::new(4, 4, 10, 10).inflate(2);
        assert_eq!(rect, PixelRect::new(2, 2, 14, 14));

        let huge = PixelRect::new(0, 0, 10, 10).inflate(u32::MAX);
        assert_eq!(huge, PixelRect::new(i32::MIN + 1, i32::MIN + 1, u32::MAX, u32::MAX));
    }
}
