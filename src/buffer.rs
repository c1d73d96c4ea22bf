//! Render target
//!
//! The output pixel storage is owned by the caller; the renderer only ever
//! writes into it during the resolve step and never reads it back.

use crate::error::RenderError;

/// Validated view over a caller-owned RGBA8 pixel buffer
///
/// Data is row-major with the origin at the top-left, 4 bytes per pixel.
pub struct RenderTarget<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> RenderTarget<'a> {
    /// Bind an output buffer of `width` x `height` pixels
    ///
    /// Fails if the buffer holds fewer than `width * height * 4` bytes.
    pub fn new(data: &'a mut [u8], width: usize, height: usize) -> Result<Self, RenderError> {
        let needed = width * height * 4;
        if data.len() < needed {
            return Err(RenderError::TargetTooSmall {
                needed,
                len: data.len(),
            });
        }
        Ok(RenderTarget {
            data,
            width,
            height,
        })
    }
    /// Target width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Target height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Raw pixel bytes
    pub fn data(&self) -> &[u8] {
        self.data
    }
    /// Read back the pixel at (x, y)
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height);
        let i = (y * self.width + x) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
    pub(crate) fn put_pixel(&mut self, x: usize, y: usize, px: [u8; 4]) {
        let i = (y * self.width + x) * 4;
        self.data[i..i + 4].copy_from_slice(&px);
    }
}
