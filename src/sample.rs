//! Supersampled sample storage and the resolve step
//!
//! The sample buffer holds `width * rate` by `height * rate` color samples
//! for a `width` x `height` pixel target. Scan converters write individual
//! samples (last write wins, no blending); `resolve_into` reduces every
//! `rate` x `rate` block to one output pixel with an unweighted box filter.

use crate::buffer::RenderTarget;
use crate::color::{cu8, Rgba};

pub struct SampleBuffer {
    samples: Vec<Rgba>,
    width: usize,
    height: usize,
    rate: usize,
}

impl SampleBuffer {
    /// Allocate a sample grid for a `width` x `height` target at `rate`
    /// samples per pixel axis
    pub fn new(width: usize, height: usize, rate: usize) -> Self {
        SampleBuffer {
            samples: vec![Rgba::white(); width * rate * height * rate],
            width,
            height,
            rate,
        }
    }
    /// Target width in nominal pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Target height in nominal pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Samples per pixel axis
    pub fn rate(&self) -> usize {
        self.rate
    }
    /// Width of the sample grid
    pub fn sample_width(&self) -> usize {
        self.width * self.rate
    }
    /// Height of the sample grid
    pub fn sample_height(&self) -> usize {
        self.height * self.rate
    }
    /// Set every sample to `color`
    ///
    /// Runs before any draw call of a frame so no stale samples from the
    /// previous frame survive the resolve.
    pub fn fill(&mut self, color: Rgba) {
        for s in self.samples.iter_mut() {
            *s = color;
        }
    }
    /// Overwrite the sample at integer sample coordinates
    ///
    /// Writes outside the grid are silently discarded; primitives are
    /// routinely clipped by the viewport this way.
    pub fn set(&mut self, sx: i64, sy: i64, color: Rgba) {
        if sx < 0 || sy < 0 {
            return;
        }
        let (sx, sy) = (sx as usize, sy as usize);
        if sx >= self.sample_width() || sy >= self.sample_height() {
            return;
        }
        let w = self.sample_width();
        self.samples[sy * w + sx] = color;
    }
    /// Read the sample at integer sample coordinates
    pub fn get(&self, sx: usize, sy: usize) -> Rgba {
        debug_assert!(sx < self.sample_width() && sy < self.sample_height());
        self.samples[sy * self.sample_width() + sx]
    }
    /// Box-filter every `rate` x `rate` sample block down to one output pixel
    ///
    /// This is the only point at which the externally owned target is
    /// touched. Resolving twice without drawing in between produces
    /// identical output.
    pub fn resolve_into(&self, target: &mut RenderTarget) {
        let n = (self.rate * self.rate) as f64;
        let w = self.width.min(target.width());
        let h = self.height.min(target.height());
        for y in 0..h {
            for x in 0..w {
                let (mut r, mut g, mut b, mut a) = (0.0, 0.0, 0.0, 0.0);
                for sy in 0..self.rate {
                    for sx in 0..self.rate {
                        let s = self.get(x * self.rate + sx, y * self.rate + sy);
                        r += s.r;
                        g += s.g;
                        b += s.b;
                        a += s.a;
                    }
                }
                target.put_pixel(x, y, [cu8(r / n), cu8(g / n), cu8(b / n), cu8(a / n)]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::RenderTarget;

    #[test]
    fn out_of_bounds_writes_are_discarded() {
        let mut buf = SampleBuffer::new(2, 2, 2);
        buf.set(-1, 0, Rgba::black());
        buf.set(0, -1, Rgba::black());
        buf.set(4, 0, Rgba::black());
        buf.set(0, 4, Rgba::black());
        for sy in 0..buf.sample_height() {
            for sx in 0..buf.sample_width() {
                assert_eq!(buf.get(sx, sy), Rgba::white());
            }
        }
    }

    #[test]
    fn writes_overwrite_without_blending() {
        let mut buf = SampleBuffer::new(1, 1, 1);
        buf.set(0, 0, Rgba::new(1.0, 0.0, 0.0, 0.5));
        buf.set(0, 0, Rgba::new(0.0, 1.0, 0.0, 0.25));
        assert_eq!(buf.get(0, 0), Rgba::new(0.0, 1.0, 0.0, 0.25));
    }

    #[test]
    fn resolve_averages_a_block() {
        let mut buf = SampleBuffer::new(1, 1, 2);
        buf.fill(Rgba::white());
        // one of four samples black: channels average to 3/4
        buf.set(0, 0, Rgba::black());
        let mut data = vec![0u8; 4];
        let mut target = RenderTarget::new(&mut data, 1, 1).unwrap();
        buf.resolve_into(&mut target);
        assert_eq!(target.pixel(0, 0), [191, 191, 191, 255]);
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut buf = SampleBuffer::new(2, 1, 2);
        buf.set(1, 1, Rgba::new(0.2, 0.4, 0.6, 1.0));
        let mut data = vec![0u8; 8];
        let mut target = RenderTarget::new(&mut data, 2, 1).unwrap();
        buf.resolve_into(&mut target);
        let first: Vec<u8> = target.data().to_vec();
        buf.resolve_into(&mut target);
        assert_eq!(target.data(), first.as_slice());
    }
}
