//! Pixel sink module - the write-only surface tiles are painted into
//!
//! The core never reads back from a sink. [`PixelBuffer`] is the in-memory
//! RGBA implementation; hosts wrap it (or replace it) to push pixels to a
//! real screen on [`PixelSink::flush`].

use std::convert::Infallible;

use crate::types::Rgba;

/// Bytes per pixel in an RGBA buffer
pub const CHANNELS: usize = 4;

/// Linear byte offset of pixel (x, y) in a 4-channel buffer `buffer_width` pixels wide
#[inline(always)]
pub fn pixel_offset(x: usize, y: usize, buffer_width: usize) -> usize {
    (x + y * buffer_width) * CHANNELS
}

/// Write-only pixel surface.
pub trait PixelSink {
    type Error;

    /// Store one pixel. Positions outside the surface are ignored.
    fn write_pixel(&mut self, x: usize, y: usize, color: Rgba);

    /// Publish everything written so far.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    type Error = S::Error;

    fn write_pixel(&mut self, x: usize, y: usize, color: Rgba) {
        (**self).write_pixel(x, y, color);
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

/// Flat RGBA pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
    flushes: usize,
}

impl PixelBuffer {
    /// Create a zeroed (fully transparent) buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * CHANNELS],
            flushes: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw channel bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw channel bytes, for painting with [`crate::tile::paint_rgba`]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Number of flush requests seen
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Read pixel (x, y); `None` if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = pixel_offset(x, y, self.width);
        Some(Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }
}

impl PixelSink for PixelBuffer {
    type Error = Infallible;

    fn write_pixel(&mut self, x: usize, y: usize, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = pixel_offset(x, y, self.width);
        self.data[i..i + CHANNELS].copy_from_slice(&color.to_array());
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        self.flushes += 1;
        Ok(())
    }
}
