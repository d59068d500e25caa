//! Framebuffer of colored terminal cells.
//!
//! Each terminal cell shows one glyph with a foreground and background color.
//! The pixel view stacks two maze pixels per cell using the upper-half block,
//! so a cell's `fg` is its top pixel and `bg` its bottom pixel.

use crate::types::Rgba;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgba> for Rgb {
    /// Terminals have no alpha; the channel is dropped.
    fn from(c: Rgba) -> Self {
        Self::new(c.r, c.g, c.b)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Cell {
    pub const fn new(ch: char, fg: Rgb, bg: Rgb) -> Self {
        Self { ch, fg, bg }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
        }
    }
}

/// 2D framebuffer of colored character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are unspecified
    /// afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `s` left to right from (x, y), truncating at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, fg: Rgb, bg: Rgb) {
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.set(cx, y, Cell::new(ch, fg, bg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_access_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(2, 0, Cell::new('x', Rgb::default(), Rgb::default()));
        assert_eq!(fb.get(2, 0), None);
        assert!(fb.cells().iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn test_put_str_truncates_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        let c = Rgb::new(1, 2, 3);
        fb.put_str(2, 0, "maze", c, c);
        assert_eq!(fb.get(2, 0).map(|c| c.ch), Some('m'));
        assert_eq!(fb.get(3, 0).map(|c| c.ch), Some('a'));
        assert_eq!(fb.get(1, 0), Some(Cell::default()));
    }

    #[test]
    fn test_alpha_is_dropped() {
        assert_eq!(Rgb::from(Rgba::new(30, 40, 50, 0)), Rgb::new(30, 40, 50));
    }

    #[test]
    fn test_resize_changes_cell_count() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.resize(5, 2);
        assert_eq!(fb.cells().len(), 10);
        assert_eq!((fb.width(), fb.height()), (5, 2));
    }
}
