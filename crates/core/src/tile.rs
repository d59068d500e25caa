//! Tile module - converts one cell's open sides into a pixel block
//!
//! A tile is a `TILE_SIZE x TILE_SIZE` matrix of [`TileElement`]s. Every closed
//! cardinal side paints the `WALL_THICKNESS` rows/columns nearest to it as
//! wall; everything else is floor. Overlapping wall regions (corners) take the
//! union, so a fully enclosed tile has a solid two-pixel frame.
//!
//! Coordinates: (x, y) with x growing east and y growing south. North walls are
//! rows 0..2, south walls rows 8..10, west walls columns 0..2, east walls
//! columns 8..10.
//!
//! The tile knows nothing about the grid; [`paint`] offsets it by
//! `position * TILE_SIZE` when writing into a sink.

use crate::maze::{Cell, Maze};
use crate::sink::{pixel_offset, PixelSink, CHANNELS};
use crate::types::{
    GridPos, Rgba, Sides, TileElement, WallSide, FLOOR_COLOR, TILE_SIZE, UNKNOWN_COLOR,
    WALL_COLOR, WALL_THICKNESS,
};

/// Pixel classification matrix for one tile, indexed `[y][x]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileLayout {
    rows: [[TileElement; TILE_SIZE]; TILE_SIZE],
}

impl TileLayout {
    /// Tile with every pixel `Empty`
    pub fn empty() -> Self {
        Self {
            rows: [[TileElement::Empty; TILE_SIZE]; TILE_SIZE],
        }
    }

    fn filled(element: TileElement) -> Self {
        Self {
            rows: [[element; TILE_SIZE]; TILE_SIZE],
        }
    }

    /// Element at local pixel (x, y); `None` outside the tile
    pub fn get(&self, x: usize, y: usize) -> Option<TileElement> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn rows(&self) -> &[[TileElement; TILE_SIZE]; TILE_SIZE] {
        &self.rows
    }

    /// Count pixels with the given classification
    pub fn count(&self, element: TileElement) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|e| **e == element)
            .count()
    }

    fn paint_wall(&mut self, side: WallSide) {
        let far = TILE_SIZE - WALL_THICKNESS;
        match side {
            WallSide::None => {}
            WallSide::North => {
                for row in &mut self.rows[..WALL_THICKNESS] {
                    row.fill(TileElement::Wall);
                }
            }
            WallSide::South => {
                for row in &mut self.rows[far..] {
                    row.fill(TileElement::Wall);
                }
            }
            WallSide::West => {
                for row in &mut self.rows {
                    row[..WALL_THICKNESS].fill(TileElement::Wall);
                }
            }
            WallSide::East => {
                for row in &mut self.rows {
                    row[far..].fill(TileElement::Wall);
                }
            }
        }
    }
}

impl Default for TileLayout {
    fn default() -> Self {
        Self::empty()
    }
}

/// Derive the tile for a cell whose open (passable) sides are `open_sides`.
///
/// Pure: the same input always yields the same matrix.
pub fn layout_for(open_sides: Sides) -> TileLayout {
    let mut layout = TileLayout::filled(TileElement::Floor);
    for side in open_sides.complement().iter() {
        layout.paint_wall(side);
    }
    layout
}

/// Palette lookup for a pixel classification
pub fn color_for(element: TileElement) -> Rgba {
    match element {
        TileElement::Wall | TileElement::Empty => WALL_COLOR,
        TileElement::Floor => FLOOR_COLOR,
    }
}

/// Palette lookup for a raw classification code; unknown codes map to black
pub fn color_for_code(code: u8) -> Rgba {
    TileElement::from_code(code)
        .map(color_for)
        .unwrap_or(UNKNOWN_COLOR)
}

/// Write a tile into `sink` at grid cell `position`.
///
/// Does not flush; the caller decides when pixels become visible.
pub fn paint<S: PixelSink>(layout: &TileLayout, position: GridPos, sink: &mut S) {
    let ox = position.column * TILE_SIZE;
    let oy = position.row * TILE_SIZE;
    for (y, row) in layout.rows.iter().enumerate() {
        for (x, element) in row.iter().enumerate() {
            sink.write_pixel(ox + x, oy + y, color_for(*element));
        }
    }
}

/// Write a tile straight into a raw RGBA byte buffer `buffer_width` pixels wide.
///
/// Pixels at or past `buffer_width`, or whose byte range falls outside
/// `pixels`, are skipped, so a tile never spills into the next pixel row.
pub fn paint_rgba(layout: &TileLayout, position: GridPos, pixels: &mut [u8], buffer_width: usize) {
    let ox = position.column * TILE_SIZE;
    let oy = position.row * TILE_SIZE;
    for (y, row) in layout.rows.iter().enumerate() {
        for (x, element) in row.iter().enumerate() {
            if ox + x >= buffer_width {
                break;
            }
            let i = pixel_offset(ox + x, oy + y, buffer_width);
            if let Some(px) = pixels.get_mut(i..i + CHANNELS) {
                px.copy_from_slice(&color_for(*element).to_array());
            }
        }
    }
}

/// Paint one decided cell at its own grid position
pub fn paint_cell<S: PixelSink>(cell: &Cell, sink: &mut S) {
    paint(&cell.layout(), cell.position(), sink);
}

/// Pixel dimensions (width, height) needed to hold every tile of `maze`
pub fn surface_size(maze: &Maze) -> (usize, usize) {
    (maze.width() * TILE_SIZE, maze.height() * TILE_SIZE)
}

/// Paint every tile of `maze`, then flush once.
pub fn paint_maze<S: PixelSink>(maze: &Maze, sink: &mut S) -> Result<(), S::Error> {
    for cell in maze.cells() {
        paint_cell(cell, sink);
    }
    sink.flush()
}
