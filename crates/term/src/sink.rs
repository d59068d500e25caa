//! TerminalSink: a [`PixelSink`] that shows its pixels in the terminal.
//!
//! Pixels land in an in-memory [`PixelBuffer`]; on every flush the buffer is
//! mapped through a [`PixelView`] and handed to the diffing
//! [`TerminalRenderer`], so a per-tile flush only redraws that tile's cells.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::{PixelBuffer, PixelSink};
use crate::fb::FrameBuffer;
use crate::pixel_view::{PixelView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::Rgba;

pub struct TerminalSink<W: Write = io::Stdout> {
    pixels: PixelBuffer,
    view: PixelView,
    renderer: TerminalRenderer<W>,
    fb: FrameBuffer,
    /// Fixed viewport; `None` asks the terminal for its size on every flush
    viewport: Option<Viewport>,
}

impl TerminalSink<io::Stdout> {
    /// Sink of `width x height` pixels drawing to stdout at the terminal's size.
    pub fn stdout(width: usize, height: usize) -> Self {
        Self::with_renderer(width, height, TerminalRenderer::new(), None)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn with_renderer(
        width: usize,
        height: usize,
        renderer: TerminalRenderer<W>,
        viewport: Option<Viewport>,
    ) -> Self {
        Self {
            pixels: PixelBuffer::new(width, height),
            view: PixelView::default(),
            renderer,
            fb: FrameBuffer::new(0, 0),
            viewport,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    /// Update the status line; visible from the next flush.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.view.set_status(status);
    }

    fn current_viewport(&self) -> Viewport {
        if let Some(vp) = self.viewport {
            return vp;
        }
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }
}

impl<W: Write> PixelSink for TerminalSink<W> {
    type Error = anyhow::Error;

    fn write_pixel(&mut self, x: usize, y: usize, color: Rgba) {
        self.pixels.write_pixel(x, y, color);
    }

    fn flush(&mut self) -> Result<()> {
        let viewport = self.current_viewport();
        self.view.render_into(&self.pixels, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{layout_for, paint};
    use crate::types::{GridPos, Sides, FLOOR_COLOR, TILE_SIZE};

    fn sink() -> TerminalSink<Vec<u8>> {
        TerminalSink::with_renderer(
            TILE_SIZE * 2,
            TILE_SIZE,
            TerminalRenderer::with_writer(Vec::new()),
            Some(Viewport::new(20, 6)),
        )
    }

    #[test]
    fn test_pixels_are_kept_until_flush() {
        let mut s = sink();
        paint(&layout_for(Sides::all()), GridPos::new(1, 0), &mut s);
        assert_eq!(s.pixels().get(TILE_SIZE, 0), Some(FLOOR_COLOR));
        assert!(s.renderer().writer().is_empty());

        s.flush().unwrap();
        assert!(!s.renderer().writer().is_empty());
    }

    #[test]
    fn test_unchanged_flush_writes_almost_nothing() {
        let mut s = sink();
        paint(&layout_for(Sides::empty()), GridPos::new(0, 0), &mut s);
        s.flush().unwrap();
        let after_first = s.renderer().writer().len();

        s.flush().unwrap();
        let second = s.renderer().writer().len() - after_first;
        assert!(second < after_first / 10);
    }
}
