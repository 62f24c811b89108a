//! Tile board: partition, shuffle, swap-on-select and completion.

use rand::{seq::SliceRandom, Rng};

use crate::surface::{PixelRect, Point};

/// Identity of a tile: its slot index in the solved picture (row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

/// Result of clicking a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The slot became the current selection.
    Selected(usize),
    /// Clicking the selected slot again cleared the selection.
    Deselected(usize),
    /// Two slots exchanged tiles.
    Swapped {
        /// Previously selected slot.
        from: usize,
        /// Slot that was clicked.
        to: usize,
    },
}

/// An R×C arrangement of tiles cut from one picture.
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    tile_width: u32,
    tile_height: u32,
    tiles: Vec<TileId>,
    origin: Vec<TileId>,
    selected: Option<usize>,
    swap_count: u32,
}

impl Board {
    /// Cut a `width`×`height` picture into `rows`×`cols` tiles, in solved order.
    ///
    /// Tile dimensions use integer division, so the right and bottom remainder
    /// of the picture is never shown.
    pub fn partition(width: u32, height: u32, rows: usize, cols: usize) -> Self {
        let tile_width = width / cols.max(1) as u32;
        let tile_height = height / rows.max(1) as u32;
        Self::solved(rows, cols, tile_width, tile_height)
    }

    /// A solved board with explicit tile dimensions.
    pub fn solved(rows: usize, cols: usize, tile_width: u32, tile_height: u32) -> Self {
        let origin: Vec<TileId> = (0..rows * cols).map(TileId).collect();
        Self {
            rows,
            cols,
            tile_width,
            tile_height,
            tiles: origin.clone(),
            origin,
            selected: None,
            swap_count: 0,
        }
    }

    /// Replace the current order. Returns `None` unless `tiles` is a
    /// permutation of the solved order.
    pub fn with_arrangement(mut self, tiles: Vec<TileId>) -> Option<Self> {
        let mut sorted = tiles.clone();
        sorted.sort_unstable();
        if sorted != self.origin {
            return None;
        }
        self.tiles = tiles;
        Some(self)
    }

    /// Fisher–Yates shuffle of every slot. Clears any selection.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tiles.shuffle(rng);
        self.selected = None;
    }

    /// Grid rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// `true` for a 0-slot board.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile width and height in source pixels.
    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Tiles in slot order.
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    /// Solved order snapshot.
    pub fn origin(&self) -> &[TileId] {
        &self.origin
    }

    /// Slot waiting for a swap partner.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Swaps performed since the board was built.
    pub fn swap_count(&self) -> u32 {
        self.swap_count
    }

    /// Every tile sits in its home slot.
    pub fn is_solved(&self) -> bool {
        self.tiles == self.origin
    }

    /// Area of the source picture a tile was cut from.
    pub fn region(&self, tile: TileId) -> PixelRect {
        let col = (tile.0 % self.cols) as u32;
        let row = (tile.0 / self.cols) as u32;
        PixelRect::new(
            (col * self.tile_width) as i32,
            (row * self.tile_height) as i32,
            self.tile_width,
            self.tile_height,
        )
    }

    /// Where slot `index` is drawn, with `margin` pixels around every tile.
    pub fn cell_rect(&self, index: usize, margin: u32) -> PixelRect {
        let col = (index % self.cols) as u32;
        let row = (index / self.cols) as u32;
        PixelRect::new(
            (col * (self.tile_width + margin) + margin) as i32,
            (row * (self.tile_height + margin) + margin) as i32,
            self.tile_width,
            self.tile_height,
        )
    }

    /// Width and height covered by the grid including outer margins.
    pub fn extent(&self, margin: u32) -> (u32, u32) {
        (
            self.cols as u32 * (self.tile_width + margin) + margin,
            self.rows as u32 * (self.tile_height + margin) + margin,
        )
    }

    /// First slot whose rectangle contains `point`; gutters hit nothing.
    pub fn cell_at(&self, point: Point, margin: u32) -> Option<usize> {
        (0..self.tiles.len()).find(|&index| self.cell_rect(index, margin).contains_inclusive(point))
    }

    /// Apply a click on slot `index`.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        match self.selected {
            Some(current) if current == index => {
                self.selected = None;
                SelectOutcome::Deselected(index)
            }
            Some(current) => {
                self.swap(current, index);
                self.selected = None;
                SelectOutcome::Swapped {
                    from: current,
                    to: index,
                }
            }
            None => {
                self.selected = Some(index);
                SelectOutcome::Selected(index)
            }
        }
    }

    /// Exchange the tiles in slots `a` and `b` and count the swap.
    ///
    /// Returns `false` without counting when either index is out of range or
    /// both name the same slot.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.tiles.len() || b >= self.tiles.len() {
            return false;
        }
        self.tiles.swap(a, b);
        self.swap_count += 1;
        true
    }
}
