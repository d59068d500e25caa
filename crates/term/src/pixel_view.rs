//! PixelView: maps an RGBA pixel buffer into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Terminal glyphs are roughly twice as tall as they are wide, so each
//! terminal cell shows two vertically stacked pixels: the upper-half block
//! `▀` takes the top pixel as its foreground and the bottom pixel as its
//! background. A 10x10 maze of 10px tiles therefore needs 100x50 cells.

use crate::core::PixelBuffer;
use crate::fb::{Cell, FrameBuffer, Rgb};

const HALF_BLOCK: char = '▀';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Pixel-to-terminal mapping with an optional status line.
#[derive(Debug, Clone)]
pub struct PixelView {
    anchor_y: AnchorY,
    backdrop: Rgb,
    status: Option<String>,
}

impl Default for PixelView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            backdrop: Rgb::new(0, 0, 0),
            status: None,
        }
    }
}

impl PixelView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Text shown on the last terminal row, below the image.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Terminal cells needed to show `pixels` without cropping (status row excluded)
    pub fn natural_viewport(pixels: &PixelBuffer) -> Viewport {
        let w = pixels.width().min(u16::MAX as usize) as u16;
        let h = pixels.height().div_ceil(2).min(u16::MAX as usize) as u16;
        Viewport::new(w, h)
    }

    /// Render `pixels` into an existing framebuffer sized to `viewport`.
    ///
    /// The image is centered horizontally and anchored vertically; parts that do
    /// not fit are cropped from the right/bottom.
    pub fn render_into(&self, pixels: &PixelBuffer, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', self.backdrop, self.backdrop));

        let status_rows = u16::from(self.status.is_some() && viewport.height > 1);
        let avail_h = viewport.height - status_rows;
        let image = Self::natural_viewport(pixels);

        let start_x = viewport.width.saturating_sub(image.width) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => avail_h.saturating_sub(image.height) / 2,
            AnchorY::Top => 0,
        };

        for cy in 0..image.height.min(avail_h.saturating_sub(start_y)) {
            let top_y = cy as usize * 2;
            for cx in 0..image.width.min(viewport.width.saturating_sub(start_x)) {
                let x = cx as usize;
                let top = pixels.get(x, top_y).map(Rgb::from).unwrap_or(self.backdrop);
                let bottom = pixels
                    .get(x, top_y + 1)
                    .map(Rgb::from)
                    .unwrap_or(self.backdrop);
                fb.set(start_x + cx, start_y + cy, Cell::new(HALF_BLOCK, top, bottom));
            }
        }

        if let (Some(status), 1) = (self.status.as_deref(), status_rows) {
            fb.put_str(
                0,
                viewport.height - 1,
                status,
                Rgb::new(200, 200, 200),
                self.backdrop,
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, pixels: &PixelBuffer, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(pixels, viewport, &mut fb);
        fb
    }

    /// Render at the natural size plus the status row, for batch output.
    pub fn render_fit(&self, pixels: &PixelBuffer) -> FrameBuffer {
        let mut vp = Self::natural_viewport(pixels);
        if self.status.is_some() {
            vp.height = vp.height.saturating_add(1);
        }
        self.render(pixels, vp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PixelSink;
    use crate::types::Rgba;

    fn checker(w: usize, h: usize) -> PixelBuffer {
        let mut p = PixelBuffer::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let v = if (x + y) % 2 == 0 { 255 } else { 10 };
                p.write_pixel(x, y, Rgba::new(v, v, v, 255));
            }
        }
        p
    }

    #[test]
    fn test_two_pixel_rows_per_cell() {
        let p = checker(4, 4);
        let fb = PixelView::default().render(&p, Viewport::new(4, 2));
        let c = fb.get(0, 0).unwrap();
        assert_eq!(c.ch, '▀');
        assert_eq!(c.fg, Rgb::new(255, 255, 255));
        assert_eq!(c.bg, Rgb::new(10, 10, 10));
        let c = fb.get(1, 1).unwrap();
        assert_eq!(c.fg, Rgb::new(10, 10, 10));
        assert_eq!(c.bg, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_odd_height_pads_last_row_with_backdrop() {
        let p = checker(2, 3);
        assert_eq!(PixelView::natural_viewport(&p), Viewport::new(2, 2));
        let fb = PixelView::default().render(&p, Viewport::new(2, 2));
        assert_eq!(fb.get(0, 1).unwrap().bg, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_image_is_centered_in_larger_viewport() {
        let p = checker(2, 2);
        let fb = PixelView::default().render(&p, Viewport::new(6, 5));
        // 2x1 image in 6x5: x offset 2, y offset 2
        assert_eq!(fb.get(2, 2).unwrap().ch, '▀');
        assert_eq!(fb.get(1, 2).unwrap().ch, ' ');
        assert_eq!(fb.get(2, 1).unwrap().ch, ' ');
    }

    #[test]
    fn test_small_viewport_crops_without_panicking() {
        let p = checker(100, 100);
        let fb = PixelView::default()
            .with_anchor_y(AnchorY::Top)
            .render(&p, Viewport::new(3, 2));
        assert!(fb.cells().iter().all(|c| c.ch == '▀'));
    }

    #[test]
    fn test_status_line_takes_the_last_row() {
        let p = checker(4, 2);
        let mut view = PixelView::default();
        view.set_status("ok");
        let fb = view.render_fit(&p);
        assert_eq!((fb.width(), fb.height()), (4, 2));
        assert_eq!(fb.get(0, 1).unwrap().ch, 'o');
        assert_eq!(fb.get(1, 1).unwrap().ch, 'k');
        assert_eq!(fb.get(0, 0).unwrap().ch, '▀');
    }
}
